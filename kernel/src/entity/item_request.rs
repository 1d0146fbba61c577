mod description;
mod id;

pub use self::{description::*, id::*};
use crate::entity::{CreatedAt, UserId};
use serde::{Deserialize, Serialize};

/// A standing ask for an item nobody has listed yet. Owners answer it by
/// creating an item that points back via [`crate::entity::Item::request_id`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ItemRequest {
    id: ItemRequestId,
    requester_id: UserId,
    description: RequestDescription,
    created_at: CreatedAt<ItemRequest>,
}

impl ItemRequest {
    pub fn new(
        id: ItemRequestId,
        requester_id: UserId,
        description: RequestDescription,
        created_at: CreatedAt<ItemRequest>,
    ) -> Self {
        Self {
            id,
            requester_id,
            description,
            created_at,
        }
    }

    pub fn id(&self) -> &ItemRequestId {
        &self.id
    }

    pub fn requester_id(&self) -> &UserId {
        &self.requester_id
    }

    pub fn description(&self) -> &RequestDescription {
        &self.description
    }

    pub fn created_at(&self) -> &CreatedAt<ItemRequest> {
        &self.created_at
    }
}
