use application::transfer::{CreateCommentDto, CreateItemDto, UpdateItemDto};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    name: String,
    description: String,
    available: bool,
    #[serde(default)]
    request_id: Option<Uuid>,
}

impl CreateItemRequest {
    pub fn into_dto(self, owner_id: Uuid) -> CreateItemDto {
        CreateItemDto::new(
            owner_id,
            self.name,
            self.description,
            self.available,
            self.request_id,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    name: Option<String>,
    description: Option<String>,
    available: Option<bool>,
}

impl UpdateItemRequest {
    pub fn into_dto(self, actor_id: Uuid, item_id: Uuid) -> UpdateItemDto {
        UpdateItemDto::new(actor_id, item_id, self.name, self.description, self.available)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    text: String,
}

impl SearchQuery {
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    text: String,
}

impl CreateCommentRequest {
    pub fn into_dto(self, author_id: Uuid, item_id: Uuid) -> CreateCommentDto {
        CreateCommentDto::new(author_id, item_id, self.text)
    }
}
