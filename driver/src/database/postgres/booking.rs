use error_stack::{Report, ResultExt};
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::{BookingQuery, DependOnBookingQuery, SortOrder, StateFilter, Viewpoint};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::{
    Booking, BookingId, BookingPeriod, BookingStatus, CreatedAt, ItemId, UserId,
};
use kernel::KernelError;

use crate::database::postgres::PgTransaction;
use crate::database::PostgresDatabase;
use crate::error::ConvertError;

pub struct PostgresBookingRepository;

#[async_trait::async_trait]
impl BookingQuery<PgTransaction> for PostgresBookingRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_by_id(con, id).await
    }

    async fn find_all_by_viewpoint(
        &self,
        con: &mut PgTransaction,
        viewpoint: &Viewpoint,
        filter: StateFilter,
        now: OffsetDateTime,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        PgBookingInternal::find_all_by_viewpoint(con, viewpoint, filter, now).await
    }

    async fn find_first_approved_starting_after(
        &self,
        con: &mut PgTransaction,
        item_id: &ItemId,
        after: OffsetDateTime,
        order: SortOrder,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_first_approved_starting_after(con, item_id, after, order).await
    }

    async fn find_finished_by_booker(
        &self,
        con: &mut PgTransaction,
        booker_id: &UserId,
        item_id: &ItemId,
        before: OffsetDateTime,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_finished_by_booker(con, booker_id, item_id, before).await
    }
}

impl DependOnBookingQuery<PgTransaction> for PostgresDatabase {
    type BookingQuery = PostgresBookingRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &PostgresBookingRepository
    }
}

#[async_trait::async_trait]
impl BookingModifier<PgTransaction> for PostgresBookingRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        PgBookingInternal::create(con, booking).await
    }

    async fn update_status(
        &self,
        con: &mut PgTransaction,
        id: &BookingId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::update_status(con, id, expected, status).await
    }
}

impl DependOnBookingModifier<PgTransaction> for PostgresDatabase {
    type BookingModifier = PostgresBookingRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &PostgresBookingRepository
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    item_id: Uuid,
    booker_id: Uuid,
    start_at: OffsetDateTime,
    end_at: OffsetDateTime,
    status: String,
    created_at: OffsetDateTime,
}

impl TryFrom<BookingRow> for Booking {
    type Error = Report<KernelError>;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        // Stored rows satisfy the window CHECK; a violation here means the
        // table was tampered with, so it surfaces as Internal.
        let period = BookingPeriod::new(row.start_at, row.end_at)
            .change_context_lazy(|| KernelError::Internal)?;
        Ok(Booking::new(
            BookingId::new(row.id),
            ItemId::new(row.item_id),
            UserId::new(row.booker_id),
            period,
            row.status.parse()?,
            CreatedAt::new(row.created_at),
        ))
    }
}

const BOOKING_COLUMNS: &str =
    "b.id, b.item_id, b.booker_id, b.start_at, b.end_at, b.status, b.created_at";

/// Column the viewpoint's identity match runs against.
fn viewpoint_column(viewpoint: &Viewpoint) -> &'static str {
    match viewpoint {
        Viewpoint::Booker(_) => "b.booker_id",
        Viewpoint::Owner(_) => "i.owner_id",
    }
}

/// Predicate fragment per filter and whether it binds "now" as `$2`. This is
/// the whole classification table; both viewpoints share it.
fn filter_predicate(filter: StateFilter) -> (&'static str, bool) {
    match filter {
        StateFilter::All => ("", false),
        StateFilter::Waiting => (" AND b.status = 'WAITING'", false),
        StateFilter::Rejected => (" AND b.status IN ('REJECTED', 'CANCELED')", false),
        StateFilter::Current => (" AND b.start_at <= $2 AND $2 < b.end_at", true),
        StateFilter::Past => (" AND b.end_at < $2", true),
        StateFilter::Future => (" AND b.start_at > $2", true),
    }
}

pub(in crate::database) struct PgBookingInternal;

impl PgBookingInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT
                id, item_id, booker_id, start_at, end_at, status, created_at
            FROM
                bookings
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;
        row.map(Booking::try_from).transpose()
    }

    async fn find_all_by_viewpoint(
        con: &mut PgConnection,
        viewpoint: &Viewpoint,
        filter: StateFilter,
        now: OffsetDateTime,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let (predicate, binds_now) = filter_predicate(filter);
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} \
             FROM bookings b JOIN items i ON i.id = b.item_id \
             WHERE {column} = $1{predicate} \
             ORDER BY b.start_at, b.created_at",
            column = viewpoint_column(viewpoint),
        );
        let mut query = sqlx::query_as::<_, BookingRow>(&sql).bind(viewpoint.user_id().as_ref());
        if binds_now {
            query = query.bind(now);
        }
        let rows = query.fetch_all(&mut *con).await.convert_error()?;
        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_first_approved_starting_after(
        con: &mut PgConnection,
        item_id: &ItemId,
        after: OffsetDateTime,
        order: SortOrder,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let direction = match order {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        };
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} \
             FROM bookings b \
             WHERE b.item_id = $1 AND b.status = 'APPROVED' AND b.start_at > $2 \
             ORDER BY b.start_at {direction} \
             LIMIT 1",
        );
        let row = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(item_id.as_ref())
            .bind(after)
            .fetch_optional(&mut *con)
            .await
            .convert_error()?;
        row.map(Booking::try_from).transpose()
    }

    async fn find_finished_by_booker(
        con: &mut PgConnection,
        booker_id: &UserId,
        item_id: &ItemId,
        before: OffsetDateTime,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT
                id, item_id, booker_id, start_at, end_at, status, created_at
            FROM
                bookings
            WHERE
                booker_id = $1 AND item_id = $2 AND status = 'APPROVED' AND end_at < $3
            LIMIT 1
            "#,
        )
        .bind(booker_id.as_ref())
        .bind(item_id.as_ref())
        .bind(before)
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;
        row.map(Booking::try_from).transpose()
    }

    async fn create(
        con: &mut PgConnection,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO bookings (id, item_id, booker_id, start_at, end_at, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(booking.id().as_ref())
        .bind(booking.item_id().as_ref())
        .bind(booking.booker_id().as_ref())
        .bind(booking.period().start())
        .bind(booking.period().end())
        .bind(booking.status().as_str())
        .bind(booking.created_at().as_ref())
        .execute(&mut *con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update_status(
        con: &mut PgConnection,
        id: &BookingId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            UPDATE bookings
            SET status = $3
            WHERE id = $1 AND status = $2
            RETURNING id, item_id, booker_id, start_at, end_at, status, created_at
            "#,
        )
        .bind(id.as_ref())
        .bind(expected.as_str())
        .bind(status.as_str())
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;
        row.map(Booking::try_from).transpose()
    }
}
