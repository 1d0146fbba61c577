use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::ItemRequest;

use crate::transfer::ItemDto;

#[derive(Debug, Clone)]
pub struct CreateItemRequestDto {
    pub requester_id: Uuid,
    pub description: String,
}

impl CreateItemRequestDto {
    pub fn new(requester_id: Uuid, description: impl Into<String>) -> Self {
        Self {
            requester_id,
            description: description.into(),
        }
    }
}

/// `items` carries the items listed in answer to the request; list views of
/// other users' requests leave it empty.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ItemRequestDto {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub description: String,
    pub created_at: OffsetDateTime,
    pub items: Vec<ItemDto>,
}

impl ItemRequestDto {
    pub fn new(request: ItemRequest, items: Vec<ItemDto>) -> Self {
        Self {
            id: (*request.id()).into(),
            requester_id: (*request.requester_id()).into(),
            description: request.description().as_ref().to_string(),
            created_at: *request.created_at().as_ref(),
            items,
        }
    }
}

impl From<ItemRequest> for ItemRequestDto {
    fn from(request: ItemRequest) -> Self {
        Self::new(request, Vec::new())
    }
}
