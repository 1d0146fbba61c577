use application::transfer::UserDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    id: Uuid,
    name: String,
    email: String,
}

impl From<UserDto> for UserResponse {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
        }
    }
}

impl IntoResponse for UserResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
