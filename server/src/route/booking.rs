mod request;
mod response;

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::ActorId;
use application::service::{ConfirmBookingService, CreateBookingService, GetBookingService, ListBookingsService};
use application::transfer::{ConfirmBookingDto, GetBookingDto, ListBookingsDto};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use kernel::interface::query::Viewpoint;
use kernel::prelude::entity::UserId;
use uuid::Uuid;

use self::request::{ApprovedQuery, CreateBookingRequest, StateQuery};
use self::response::BookingResponse;

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/bookings",
            get(
                |State(handler): State<AppModule>,
                 actor: ActorId,
                 Query(query): Query<StateQuery>| async move {
                    handler
                        .pgpool()
                        .list_bookings(ListBookingsDto::new(
                            Viewpoint::Booker(UserId::new(actor.0)),
                            query.state(),
                        ))
                        .await
                        .map(|bookings| {
                            Json(
                                bookings
                                    .into_iter()
                                    .map(BookingResponse::from)
                                    .collect::<Vec<_>>(),
                            )
                        })
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(handler): State<AppModule>,
                 actor: ActorId,
                 Json(req): Json<CreateBookingRequest>| async move {
                    handler
                        .pgpool()
                        .create_booking(req.into_dto(actor.0))
                        .await
                        .map(|dto| (StatusCode::CREATED, Json(BookingResponse::from(dto))))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings/owner",
            get(
                |State(handler): State<AppModule>,
                 actor: ActorId,
                 Query(query): Query<StateQuery>| async move {
                    handler
                        .pgpool()
                        .list_bookings(ListBookingsDto::new(
                            Viewpoint::Owner(UserId::new(actor.0)),
                            query.state(),
                        ))
                        .await
                        .map(|bookings| {
                            Json(
                                bookings
                                    .into_iter()
                                    .map(BookingResponse::from)
                                    .collect::<Vec<_>>(),
                            )
                        })
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings/:id",
            get(
                |State(handler): State<AppModule>,
                 actor: ActorId,
                 Path(id): Path<Uuid>| async move {
                    handler
                        .pgpool()
                        .get_booking(GetBookingDto::new(actor.0, id))
                        .await
                        .map(BookingResponse::from)
                        .map_err(ErrorStatus::from)
                },
            )
            .patch(
                |State(handler): State<AppModule>,
                 actor: ActorId,
                 Path(id): Path<Uuid>,
                 Query(query): Query<ApprovedQuery>| async move {
                    handler
                        .pgpool()
                        .confirm_booking(ConfirmBookingDto::new(actor.0, id, query.approved()))
                        .await
                        .map(BookingResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
