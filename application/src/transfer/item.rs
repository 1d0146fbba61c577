use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::Item;

use crate::transfer::CommentDto;

/// `request_id`, when present, must point at an existing item request the
/// new listing answers.
#[derive(Debug, Clone)]
pub struct CreateItemDto {
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<Uuid>,
}

impl CreateItemDto {
    pub fn new(
        owner_id: Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
        available: bool,
        request_id: Option<Uuid>,
    ) -> Self {
        Self {
            owner_id,
            name: name.into(),
            description: description.into(),
            available,
            request_id,
        }
    }
}

/// Absent or blank name/description leave the stored value untouched;
/// `available` is applied whenever present.
#[derive(Debug, Clone)]
pub struct UpdateItemDto {
    pub actor_id: Uuid,
    pub item_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl UpdateItemDto {
    pub fn new(
        actor_id: Uuid,
        item_id: Uuid,
        name: Option<String>,
        description: Option<String>,
        available: Option<bool>,
    ) -> Self {
        Self {
            actor_id,
            item_id,
            name,
            description,
            available,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ItemDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<Uuid>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: (*item.id()).into(),
            owner_id: (*item.owner_id()).into(),
            name: item.name().as_ref().to_string(),
            description: item.description().as_ref().to_string(),
            available: item.available(),
            request_id: item.request_id().map(|id| (*id).into()),
        }
    }
}

/// Item detail view: the record, its comments, and the two start-adjacent
/// approved-booking timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetailDto {
    pub item: ItemDto,
    pub comments: Vec<CommentDto>,
    pub last_booking: Option<OffsetDateTime>,
    pub next_booking: Option<OffsetDateTime>,
}
