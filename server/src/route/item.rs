mod request;
mod response;

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::ActorId;
use application::service::{
    CreateCommentService, CreateItemService, DeleteItemService, GetItemService, UpdateItemService,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use self::request::{CreateCommentRequest, CreateItemRequest, SearchQuery, UpdateItemRequest};
use self::response::{CommentResponse, ItemDetailResponse};
pub(in crate::route) use self::response::ItemResponse;

pub trait ItemRouter {
    fn route_item(self) -> Self;
}

impl ItemRouter for Router<AppModule> {
    fn route_item(self) -> Self {
        self.route(
            "/items",
            get(
                |State(handler): State<AppModule>, actor: ActorId| async move {
                    handler
                        .pgpool()
                        .list_items(actor.0)
                        .await
                        .map(|items| {
                            Json(items.into_iter().map(ItemResponse::from).collect::<Vec<_>>())
                        })
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(handler): State<AppModule>,
                 actor: ActorId,
                 Json(req): Json<CreateItemRequest>| async move {
                    handler
                        .pgpool()
                        .create_item(req.into_dto(actor.0))
                        .await
                        .map(|dto| (StatusCode::CREATED, Json(ItemResponse::from(dto))))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/items/search",
            get(
                |State(handler): State<AppModule>, Query(query): Query<SearchQuery>| async move {
                    handler
                        .pgpool()
                        .search_items(query.text())
                        .await
                        .map(|items| {
                            Json(items.into_iter().map(ItemResponse::from).collect::<Vec<_>>())
                        })
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/items/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    handler
                        .pgpool()
                        .get_item_detail(id)
                        .await
                        .map(ItemDetailResponse::from)
                        .map_err(ErrorStatus::from)
                },
            )
            .patch(
                |State(handler): State<AppModule>,
                 actor: ActorId,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateItemRequest>| async move {
                    handler
                        .pgpool()
                        .update_item(req.into_dto(actor.0, id))
                        .await
                        .map(ItemResponse::from)
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    handler
                        .pgpool()
                        .delete_item(id)
                        .await
                        .map(|()| StatusCode::NO_CONTENT)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/items/:id/comments",
            post(
                |State(handler): State<AppModule>,
                 actor: ActorId,
                 Path(id): Path<Uuid>,
                 Json(req): Json<CreateCommentRequest>| async move {
                    handler
                        .pgpool()
                        .create_comment(req.into_dto(actor.0, id))
                        .await
                        .map(|dto| (StatusCode::CREATED, Json(CommentResponse::from(dto))))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
