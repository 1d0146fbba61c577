use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use uuid::Uuid;

mod booking;
mod item;
mod item_request;
mod user;

pub use self::booking::BookingRouter;
pub use self::item::ItemRouter;
pub use self::item_request::ItemRequestRouter;
pub use self::user::UserRouter;

/// Identity of the calling user, taken from the `X-User-Id` header.
#[derive(Debug)]
pub struct ActorId(pub Uuid);

#[axum::async_trait]
impl<S> FromRequestParts<S> for ActorId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("X-User-Id")
            .ok_or(StatusCode::BAD_REQUEST)?;
        let header = header.to_str().map_err(|_| StatusCode::BAD_REQUEST)?;
        Uuid::parse_str(header)
            .map(ActorId)
            .map_err(|_| StatusCode::BAD_REQUEST)
    }
}
