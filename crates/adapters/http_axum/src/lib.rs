//! # formation-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the reservation JSON API (`/api/reservations`, …)
//! - Map HTTP requests into [`ReservationService`] calls (driving adapter)
//! - Map service results into HTTP responses with fixed status codes
//! - Apply the configured cross-origin policy
//!
//! ## Dependency rule
//! Depends on `formation-app` (for the service port) and `formation-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.
//!
//! [`ReservationService`]: formation_app::ports::ReservationService

pub mod api;
pub mod cors;
pub mod error;
pub mod router;
pub mod state;
