mod id;
mod period;
mod status;

pub use self::{id::*, period::*, status::*};
use crate::entity::{CreatedAt, ItemId, UserId};
use serde::{Deserialize, Serialize};

/// A request for temporary custody of an item.
///
/// `item_id` and `booker_id` never change after creation; `status` starts as
/// [`BookingStatus::Waiting`] and is decided exactly once by the item's owner.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    item_id: ItemId,
    booker_id: UserId,
    period: BookingPeriod,
    status: BookingStatus,
    created_at: CreatedAt<Booking>,
}

impl Booking {
    pub fn new(
        id: BookingId,
        item_id: ItemId,
        booker_id: UserId,
        period: BookingPeriod,
        status: BookingStatus,
        created_at: CreatedAt<Booking>,
    ) -> Self {
        Self {
            id,
            item_id,
            booker_id,
            period,
            status,
            created_at,
        }
    }

    pub fn id(&self) -> &BookingId {
        &self.id
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn booker_id(&self) -> &UserId {
        &self.booker_id
    }

    pub fn period(&self) -> &BookingPeriod {
        &self.period
    }

    pub fn status(&self) -> &BookingStatus {
        &self.status
    }

    pub fn created_at(&self) -> &CreatedAt<Booking> {
        &self.created_at
    }
}
