//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod reservations;

use axum::Router;
use axum::routing::get;

use formation_app::ports::ReservationService;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ReservationService + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/reservations",
            get(reservations::list::<S>).post(reservations::create::<S>),
        )
        .route(
            "/reservations/participant/{id}",
            get(reservations::list_by_participant::<S>),
        )
}
