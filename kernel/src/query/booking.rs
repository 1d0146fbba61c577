use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database::Transaction;
use crate::entity::{Booking, BookingId, BookingStatus, ItemId, UserId};
use crate::KernelError;

/// Which party's relation a list query filters on: the requesting booker or
/// the owner of the booked item.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Viewpoint {
    Booker(UserId),
    Owner(UserId),
}

impl Viewpoint {
    pub fn user_id(&self) -> &UserId {
        match self {
            Viewpoint::Booker(id) | Viewpoint::Owner(id) => id,
        }
    }
}

/// Coarse booking classification used by list queries.
///
/// `Waiting`/`Rejected` select on status and ignore timing; `Current`/`Past`/
/// `Future` select on the window against a single "now" and ignore status.
/// `Rejected` is deliberately the union of `REJECTED` and `CANCELED`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StateFilter {
    #[default]
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl StateFilter {
    /// Pure classification predicate, evaluated against a "now" the caller
    /// captured once for the whole query.
    pub fn matches(&self, booking: &Booking, now: OffsetDateTime) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Current => booking.period().contains(now),
            StateFilter::Past => *booking.period().end() < now,
            StateFilter::Future => *booking.period().start() > now,
            StateFilter::Waiting => *booking.status() == BookingStatus::Waiting,
            StateFilter::Rejected => matches!(
                booking.status(),
                BookingStatus::Rejected | BookingStatus::Canceled
            ),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StateFilter::All => "ALL",
            StateFilter::Current => "CURRENT",
            StateFilter::Past => "PAST",
            StateFilter::Future => "FUTURE",
            StateFilter::Waiting => "WAITING",
            StateFilter::Rejected => "REJECTED",
        }
    }
}

impl Display for StateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for the start-adjacent item lookups.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[async_trait::async_trait]
pub trait BookingQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError>;

    /// All bookings visible from `viewpoint` that match `filter`, ascending
    /// by start with insertion order as tiebreak. `now` is captured once by
    /// the caller and anchors every temporal branch of the filter.
    async fn find_all_by_viewpoint(
        &self,
        con: &mut Connection,
        viewpoint: &Viewpoint,
        filter: StateFilter,
        now: OffsetDateTime,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;

    /// First approved booking of `item_id` with `start > after`, by `order`
    /// over start. Descending picks what the item view surfaces as the
    /// "last" booking, ascending the "next" one; the shared predicate is
    /// intentional.
    async fn find_first_approved_starting_after(
        &self,
        con: &mut Connection,
        item_id: &ItemId,
        after: OffsetDateTime,
        order: SortOrder,
    ) -> error_stack::Result<Option<Booking>, KernelError>;

    /// Any approved booking of `item_id` by `booker_id` that ended before
    /// `before`. Gates comment creation.
    async fn find_finished_by_booker(
        &self,
        con: &mut Connection,
        booker_id: &UserId,
        item_id: &ItemId,
        before: OffsetDateTime,
    ) -> error_stack::Result<Option<Booking>, KernelError>;
}

pub trait DependOnBookingQuery<Connection: Transaction>: Sync + Send + 'static {
    type BookingQuery: BookingQuery<Connection>;
    fn booking_query(&self) -> &Self::BookingQuery;
}
