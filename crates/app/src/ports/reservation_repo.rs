//! Reservation repository port — persistence for reservations.

use std::future::Future;

use formation_domain::error::FormationError;
use formation_domain::id::ParticipantId;
use formation_domain::reservation::Reservation;

/// Repository for persisting and querying [`Reservation`]s.
pub trait ReservationRepository {
    /// Store a new reservation, returning it with any storage-assigned fields.
    fn create(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, FormationError>> + Send;

    /// Get all reservations, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Reservation>, FormationError>> + Send;

    /// Find every reservation held by a participant, ordered by id.
    fn find_by_participant(
        &self,
        participant_id: ParticipantId,
    ) -> impl Future<Output = Result<Vec<Reservation>, FormationError>> + Send;
}
