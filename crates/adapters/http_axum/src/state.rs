//! Shared application state for axum handlers.

use std::sync::Arc;

use formation_app::ports::ReservationService;

/// Application state shared across all axum handlers.
///
/// Generic over the reservation service to avoid dynamic dispatch.
/// `Clone` is implemented manually so the service itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Reservation use-cases.
    pub reservation_service: Arc<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            reservation_service: Arc::clone(&self.reservation_service),
        }
    }
}

impl<S> AppState<S>
where
    S: ReservationService + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(reservation_service: S) -> Self {
        Self {
            reservation_service: Arc::new(reservation_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(reservation_service: Arc<S>) -> Self {
        Self {
            reservation_service,
        }
    }
}
