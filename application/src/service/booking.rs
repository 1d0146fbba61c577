use error_stack::Report;
use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnItemQuery, DependOnUserQuery, ItemQuery, UserQuery,
};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::{
    Booking, BookingId, BookingPeriod, BookingStatus, CreatedAt, ItemId, UserId,
};
use kernel::KernelError;

use crate::transfer::{BookingDto, ConfirmBookingDto, CreateBookingDto, GetBookingDto, ListBookingsDto};

/// Creates a booking in `WAITING`. Everything is validated against a single
/// "now" before the one persisted write; the item is never locked or marked
/// unavailable here.
#[async_trait::async_trait]
pub trait CreateBookingService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnItemQuery<Connection>
    + DependOnBookingModifier<Connection>
{
    async fn create_booking(
        &self,
        dto: CreateBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let now = OffsetDateTime::now_utc();
        let mut connection = self.database_connection().transact().await?;

        let booker_id = UserId::new(dto.booker_id);
        self.user_query()
            .find_by_id(&mut connection, &booker_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {} not found", dto.booker_id))
            })?;
        let item_id = ItemId::new(dto.item_id);
        let item = self
            .item_query()
            .find_by_id(&mut connection, &item_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("item {} not found", dto.item_id))
            })?;

        if !item.available() {
            return Err(Report::new(KernelError::Invalid)
                .attach_printable(format!("item {} is not available", dto.item_id)));
        }
        if dto.start < now {
            return Err(Report::new(KernelError::Invalid)
                .attach_printable("booking cannot start in the past"));
        }
        if dto.end <= now {
            return Err(Report::new(KernelError::Invalid)
                .attach_printable("booking must end in the future"));
        }
        let period = BookingPeriod::new(dto.start, dto.end)?;

        let booking = Booking::new(
            BookingId::new(Uuid::new_v4()),
            item_id,
            booker_id,
            period,
            BookingStatus::Waiting,
            CreatedAt::new(now),
        );
        self.booking_modifier()
            .create(&mut connection, &booking)
            .await?;
        connection.commit().await?;

        info!(
            "created booking {} of item {} for user {}",
            booking.id().as_ref(),
            dto.item_id,
            dto.booker_id
        );
        Ok(BookingDto::from(booking))
    }
}

impl<Connection: Transaction + Send, T> CreateBookingService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnItemQuery<Connection>
        + DependOnBookingModifier<Connection>
{
}

/// Decides a `WAITING` booking. Only the owner of the booked item may act,
/// and a booking is decided at most once: the store flips the status with a
/// compare-and-set, so of two racing confirmations exactly one wins and the
/// other fails with `Invalid`.
#[async_trait::async_trait]
pub trait ConfirmBookingService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnItemQuery<Connection>
    + DependOnBookingQuery<Connection>
    + DependOnBookingModifier<Connection>
{
    async fn confirm_booking(
        &self,
        dto: ConfirmBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let booking_id = BookingId::new(dto.booking_id);
        let booking = self
            .booking_query()
            .find_by_id(&mut connection, &booking_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("booking {} not found", dto.booking_id))
            })?;
        let item = self
            .item_query()
            .find_by_id(&mut connection, booking.item_id())
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("item {} not found", booking.item_id().as_ref()))
            })?;

        if item.owner_id() != &UserId::new(dto.actor_id) {
            return Err(Report::new(KernelError::Forbidden).attach_printable(format!(
                "user {} does not own the booked item",
                dto.actor_id
            )));
        }
        if *booking.status() != BookingStatus::Waiting {
            return Err(Report::new(KernelError::Invalid).attach_printable(format!(
                "booking {} is already decided ({})",
                dto.booking_id,
                booking.status()
            )));
        }

        let status = if dto.approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };
        let updated = self
            .booking_modifier()
            .update_status(&mut connection, &booking_id, BookingStatus::Waiting, status)
            .await?
            .ok_or_else(|| {
                // Lost the compare-and-set against a racing confirmation.
                Report::new(KernelError::Invalid).attach_printable(format!(
                    "booking {} was decided concurrently",
                    dto.booking_id
                ))
            })?;
        connection.commit().await?;

        info!("booking {} decided as {}", dto.booking_id, status);
        Ok(BookingDto::from(updated))
    }
}

impl<Connection: Transaction + Send, T> ConfirmBookingService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnItemQuery<Connection>
        + DependOnBookingQuery<Connection>
        + DependOnBookingModifier<Connection>
{
}

/// Single-booking retrieval, visible to the booker and the item owner only.
#[async_trait::async_trait]
pub trait GetBookingService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnItemQuery<Connection>
    + DependOnBookingQuery<Connection>
{
    async fn get_booking(
        &self,
        dto: GetBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        debug!("fetching booking {}", dto.booking_id);
        let mut connection = self.database_connection().transact().await?;

        let actor_id = UserId::new(dto.actor_id);
        self.user_query()
            .find_by_id(&mut connection, &actor_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {} not found", dto.actor_id))
            })?;
        let booking = self
            .booking_query()
            .find_by_id(&mut connection, &BookingId::new(dto.booking_id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("booking {} not found", dto.booking_id))
            })?;
        let item = self
            .item_query()
            .find_by_id(&mut connection, booking.item_id())
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("item {} not found", booking.item_id().as_ref()))
            })?;

        if booking.booker_id() != &actor_id && item.owner_id() != &actor_id {
            return Err(Report::new(KernelError::Forbidden).attach_printable(format!(
                "user {} is neither the booker nor the item owner",
                dto.actor_id
            )));
        }
        Ok(BookingDto::from(booking))
    }
}

impl<Connection: Transaction + Send, T> GetBookingService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnItemQuery<Connection>
        + DependOnBookingQuery<Connection>
{
}

/// The query classifier: maps a state filter plus a viewpoint to an ordered
/// result set. Read-only; "now" is captured once per call so a booking
/// cannot straddle two timing buckets within one evaluation.
#[async_trait::async_trait]
pub trait ListBookingsService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnBookingQuery<Connection>
{
    async fn list_bookings(
        &self,
        dto: ListBookingsDto,
    ) -> error_stack::Result<Vec<BookingDto>, KernelError> {
        let now = OffsetDateTime::now_utc();
        let mut connection = self.database_connection().transact().await?;

        let user_id = dto.viewpoint.user_id();
        debug!(
            "listing bookings for user {} under filter {}",
            user_id.as_ref(),
            dto.filter
        );
        self.user_query()
            .find_by_id(&mut connection, user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("user {} not found", user_id.as_ref()))
            })?;

        let bookings = self
            .booking_query()
            .find_all_by_viewpoint(&mut connection, &dto.viewpoint, dto.filter, now)
            .await?;
        Ok(bookings.into_iter().map(BookingDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> ListBookingsService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnBookingQuery<Connection>
{
}
