//! # formation-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven/outbound port** adapters must implement:
//!   - `ReservationRepository` — create and query reservations
//! - Define the **driving/inbound port** the HTTP layer depends on:
//!   - `ReservationService` — add, list all, list by participant
//! - Provide `ReservationManager`, the use-case implementation of
//!   `ReservationService` on top of any `ReservationRepository`
//!
//! ## Dependency rule
//! Depends on `formation-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
