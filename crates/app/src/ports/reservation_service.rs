//! Reservation service port — the capability the HTTP layer is driven through.

use std::future::Future;

use formation_domain::error::FormationError;
use formation_domain::id::ParticipantId;
use formation_domain::reservation::Reservation;

/// Use-cases available on reservations.
///
/// Results are returned as produced by the implementation; callers must not
/// reorder or filter them.
pub trait ReservationService {
    /// Add a reservation and return the stored version, which may carry
    /// fields assigned during storage.
    fn add_reservation(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, FormationError>> + Send;

    /// Return every known reservation.
    fn get_all_reservations(
        &self,
    ) -> impl Future<Output = Result<Vec<Reservation>, FormationError>> + Send;

    /// Return the reservations held by `participant_id`, possibly none.
    fn get_reservations_by_participant(
        &self,
        participant_id: ParticipantId,
    ) -> impl Future<Output = Result<Vec<Reservation>, FormationError>> + Send;
}
