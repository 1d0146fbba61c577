use application::transfer::{CommentDto, ItemDetailDto, ItemDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    id: Uuid,
    owner_id: Uuid,
    name: String,
    description: String,
    available: bool,
    request_id: Option<Uuid>,
}

impl From<ItemDto> for ItemResponse {
    fn from(dto: ItemDto) -> Self {
        Self {
            id: dto.id,
            owner_id: dto.owner_id,
            name: dto.name,
            description: dto.description,
            available: dto.available,
            request_id: dto.request_id,
        }
    }
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    id: Uuid,
    item_id: Uuid,
    author_name: String,
    text: String,
    created_at: OffsetDateTime,
}

impl From<CommentDto> for CommentResponse {
    fn from(dto: CommentDto) -> Self {
        Self {
            id: dto.id,
            item_id: dto.item_id,
            author_name: dto.author_name,
            text: dto.text,
            created_at: dto.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemDetailResponse {
    id: Uuid,
    owner_id: Uuid,
    name: String,
    description: String,
    available: bool,
    request_id: Option<Uuid>,
    comments: Vec<CommentResponse>,
    last_booking: Option<OffsetDateTime>,
    next_booking: Option<OffsetDateTime>,
}

impl From<ItemDetailDto> for ItemDetailResponse {
    fn from(dto: ItemDetailDto) -> Self {
        Self {
            id: dto.item.id,
            owner_id: dto.item.owner_id,
            name: dto.item.name,
            description: dto.item.description,
            available: dto.item.available,
            request_id: dto.item.request_id,
            comments: dto.comments.into_iter().map(CommentResponse::from).collect(),
            last_booking: dto.last_booking,
            next_booking: dto.next_booking,
        }
    }
}

impl IntoResponse for ItemDetailResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
