//! Reservation manager — use-cases for booking participants onto formations.

use formation_domain::error::FormationError;
use formation_domain::id::ParticipantId;
use formation_domain::reservation::Reservation;
use formation_domain::time::now;

use crate::ports::{ReservationRepository, ReservationService};

/// Application service implementing [`ReservationService`] over a repository.
pub struct ReservationManager<R> {
    repo: R,
}

impl<R: ReservationRepository> ReservationManager<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R> ReservationService for ReservationManager<R>
where
    R: ReservationRepository + Send + Sync,
{
    async fn add_reservation(
        &self,
        mut reservation: Reservation,
    ) -> Result<Reservation, FormationError> {
        if reservation.reserved_at.is_none() {
            reservation.reserved_at = Some(now());
        }
        let stored = self.repo.create(reservation).await?;
        tracing::info!(
            reservation_id = ?stored.id,
            participant_id = %stored.participant_id,
            formation_id = %stored.formation_id,
            "reservation added"
        );
        Ok(stored)
    }

    async fn get_all_reservations(&self) -> Result<Vec<Reservation>, FormationError> {
        self.repo.get_all().await
    }

    async fn get_reservations_by_participant(
        &self,
        participant_id: ParticipantId,
    ) -> Result<Vec<Reservation>, FormationError> {
        let reservations = self.repo.find_by_participant(participant_id).await?;
        tracing::debug!(%participant_id, count = reservations.len(), "listed reservations");
        Ok(reservations)
    }
}
