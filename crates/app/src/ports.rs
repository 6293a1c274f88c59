//! Port definitions — traits that adapters implement or depend on.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod reservation_repo;
pub mod reservation_service;

pub use reservation_repo::ReservationRepository;
pub use reservation_service::ReservationService;
