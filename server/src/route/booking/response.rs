use application::transfer::BookingDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    id: Uuid,
    item_id: Uuid,
    booker_id: Uuid,
    start: OffsetDateTime,
    end: OffsetDateTime,
    status: String,
}

impl From<BookingDto> for BookingResponse {
    fn from(dto: BookingDto) -> Self {
        Self {
            id: dto.id,
            item_id: dto.item_id,
            booker_id: dto.booker_id,
            start: dto.start,
            end: dto.end,
            status: dto.status,
        }
    }
}

impl IntoResponse for BookingResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
