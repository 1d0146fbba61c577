mod request;
mod response;

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use application::service::{
    CreateUserService, DeleteUserService, GetUserService, UpdateUserService,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use self::request::{CreateUserRequest, UpdateUserRequest};
use self::response::UserResponse;

pub trait UserRouter {
    fn route_user(self) -> Self;
}

impl UserRouter for Router<AppModule> {
    fn route_user(self) -> Self {
        self.route(
            "/users",
            post(
                |State(handler): State<AppModule>, Json(req): Json<CreateUserRequest>| async move {
                    handler
                        .pgpool()
                        .create_user(req.into_dto())
                        .await
                        .map(|dto| (StatusCode::CREATED, Json(UserResponse::from(dto))))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    handler
                        .pgpool()
                        .get_user(id)
                        .await
                        .map(UserResponse::from)
                        .map_err(ErrorStatus::from)
                },
            )
            .patch(
                |State(handler): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateUserRequest>| async move {
                    handler
                        .pgpool()
                        .update_user(req.into_dto(id))
                        .await
                        .map(UserResponse::from)
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    handler
                        .pgpool()
                        .delete_user(id)
                        .await
                        .map(|()| StatusCode::NO_CONTENT)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
