mod request;
mod response;

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::ActorId;
use application::service::{CreateItemRequestService, GetItemRequestService};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use self::request::CreateItemRequestRequest;
use self::response::ItemRequestResponse;

pub trait ItemRequestRouter {
    fn route_item_request(self) -> Self;
}

impl ItemRequestRouter for Router<AppModule> {
    fn route_item_request(self) -> Self {
        self.route(
            "/requests",
            get(
                |State(handler): State<AppModule>, actor: ActorId| async move {
                    handler
                        .pgpool()
                        .list_own_item_requests(actor.0)
                        .await
                        .map(|requests| {
                            Json(
                                requests
                                    .into_iter()
                                    .map(ItemRequestResponse::from)
                                    .collect::<Vec<_>>(),
                            )
                        })
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(handler): State<AppModule>,
                 actor: ActorId,
                 Json(req): Json<CreateItemRequestRequest>| async move {
                    handler
                        .pgpool()
                        .create_item_request(req.into_dto(actor.0))
                        .await
                        .map(|dto| (StatusCode::CREATED, Json(ItemRequestResponse::from(dto))))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/requests/all",
            get(
                |State(handler): State<AppModule>, actor: ActorId| async move {
                    handler
                        .pgpool()
                        .list_other_item_requests(actor.0)
                        .await
                        .map(|requests| {
                            Json(
                                requests
                                    .into_iter()
                                    .map(ItemRequestResponse::from)
                                    .collect::<Vec<_>>(),
                            )
                        })
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/requests/:id",
            get(
                |State(handler): State<AppModule>,
                 actor: ActorId,
                 Path(id): Path<Uuid>| async move {
                    handler
                        .pgpool()
                        .get_item_request(actor.0, id)
                        .await
                        .map(ItemRequestResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
