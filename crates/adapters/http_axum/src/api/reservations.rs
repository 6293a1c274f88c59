//! JSON REST handlers for reservations.
//!
//! Handlers forward straight to the [`ReservationService`]; bodies and path
//! parameters are decoded by axum extractors before the service is reached.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use formation_app::ports::ReservationService;
use formation_domain::id::ParticipantId;
use formation_domain::reservation::Reservation;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Reservation>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => (StatusCode::OK, json).into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Reservation>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /api/reservations`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(reservation): Json<Reservation>,
) -> Result<CreateResponse, ApiError>
where
    S: ReservationService + Send + Sync + 'static,
{
    let created = state
        .reservation_service
        .add_reservation(reservation)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /api/reservations`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: ReservationService + Send + Sync + 'static,
{
    let reservations = state.reservation_service.get_all_reservations().await?;
    Ok(ListResponse::Ok(Json(reservations)))
}

/// `GET /api/reservations/participant/{id}`
pub async fn list_by_participant<S>(
    State(state): State<AppState<S>>,
    Path(participant_id): Path<ParticipantId>,
) -> Result<ListResponse, ApiError>
where
    S: ReservationService + Send + Sync + 'static,
{
    let reservations = state
        .reservation_service
        .get_reservations_by_participant(participant_id)
        .await?;
    Ok(ListResponse::Ok(Json(reservations)))
}
