use application::transfer::ItemRequestDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::route::item::ItemResponse;

#[derive(Debug, Serialize)]
pub struct ItemRequestResponse {
    id: Uuid,
    requester_id: Uuid,
    description: String,
    created_at: OffsetDateTime,
    items: Vec<ItemResponse>,
}

impl From<ItemRequestDto> for ItemRequestResponse {
    fn from(dto: ItemRequestDto) -> Self {
        Self {
            id: dto.id,
            requester_id: dto.requester_id,
            description: dto.description,
            created_at: dto.created_at,
            items: dto.items.into_iter().map(ItemResponse::from).collect(),
        }
    }
}

impl IntoResponse for ItemRequestResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
