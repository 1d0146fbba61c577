use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::{StateFilter, Viewpoint};
use kernel::prelude::entity::Booking;

#[derive(Debug, Clone)]
pub struct CreateBookingDto {
    pub booker_id: Uuid,
    pub item_id: Uuid,
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl CreateBookingDto {
    pub fn new(booker_id: Uuid, item_id: Uuid, start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self {
            booker_id,
            item_id,
            start,
            end,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfirmBookingDto {
    pub actor_id: Uuid,
    pub booking_id: Uuid,
    pub approved: bool,
}

impl ConfirmBookingDto {
    pub fn new(actor_id: Uuid, booking_id: Uuid, approved: bool) -> Self {
        Self {
            actor_id,
            booking_id,
            approved,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetBookingDto {
    pub actor_id: Uuid,
    pub booking_id: Uuid,
}

impl GetBookingDto {
    pub fn new(actor_id: Uuid, booking_id: Uuid) -> Self {
        Self {
            actor_id,
            booking_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListBookingsDto {
    pub viewpoint: Viewpoint,
    pub filter: StateFilter,
}

impl ListBookingsDto {
    pub fn new(viewpoint: Viewpoint, filter: StateFilter) -> Self {
        Self { viewpoint, filter }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookingDto {
    pub id: Uuid,
    pub item_id: Uuid,
    pub booker_id: Uuid,
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
    pub status: String,
}

impl From<Booking> for BookingDto {
    fn from(booking: Booking) -> Self {
        Self {
            id: (*booking.id()).into(),
            item_id: (*booking.item_id()).into(),
            booker_id: (*booking.booker_id()).into(),
            start: *booking.period().start(),
            end: *booking.period().end(),
            status: booking.status().as_str().to_string(),
        }
    }
}
