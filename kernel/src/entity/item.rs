mod description;
mod id;
mod name;

pub use self::{description::*, id::*, name::*};
use crate::entity::{ItemRequestId, UserId};
use serde::{Deserialize, Serialize};

/// `request_id` links the item to the [`crate::entity::ItemRequest`] it
/// answers, when it was listed in response to one. Fixed at creation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    owner_id: UserId,
    name: ItemName,
    description: ItemDescription,
    available: bool,
    request_id: Option<ItemRequestId>,
}

impl Item {
    pub fn new(
        id: ItemId,
        owner_id: UserId,
        name: ItemName,
        description: ItemDescription,
        available: bool,
        request_id: Option<ItemRequestId>,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            description,
            available,
            request_id,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn description(&self) -> &ItemDescription {
        &self.description
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn request_id(&self) -> Option<&ItemRequestId> {
        self.request_id.as_ref()
    }

    pub fn rename(&mut self, name: ItemName) {
        self.name = name;
    }

    pub fn describe(&mut self, description: ItemDescription) {
        self.description = description;
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}
