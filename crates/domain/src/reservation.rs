//! Reservation — a participant booked onto a formation.

use serde::{Deserialize, Serialize};

use crate::error::{FormationError, ValidationError};
use crate::id::{FormationId, ParticipantId, ReservationId};
use crate::time::Timestamp;

/// A booking record linking a participant to a formation.
///
/// `id` and `reserved_at` are optional on the way in: callers may supply
/// them, otherwise storage assigns the id and the service stamps the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default)]
    pub id: Option<ReservationId>,
    pub participant_id: ParticipantId,
    pub formation_id: FormationId,
    #[serde(default)]
    pub reserved_at: Option<Timestamp>,
}

impl Reservation {
    /// Create a builder for constructing a [`Reservation`].
    #[must_use]
    pub fn builder() -> ReservationBuilder {
        ReservationBuilder::default()
    }

    /// Whether this reservation belongs to `participant_id`.
    #[must_use]
    pub fn is_for(&self, participant_id: ParticipantId) -> bool {
        self.participant_id == participant_id
    }
}

/// Step-by-step builder for [`Reservation`].
#[derive(Debug, Default)]
pub struct ReservationBuilder {
    id: Option<ReservationId>,
    participant_id: Option<ParticipantId>,
    formation_id: Option<FormationId>,
    reserved_at: Option<Timestamp>,
}

impl ReservationBuilder {
    #[must_use]
    pub fn id(mut self, id: ReservationId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn participant_id(mut self, participant_id: ParticipantId) -> Self {
        self.participant_id = Some(participant_id);
        self
    }

    #[must_use]
    pub fn formation_id(mut self, formation_id: FormationId) -> Self {
        self.formation_id = Some(formation_id);
        self
    }

    #[must_use]
    pub fn reserved_at(mut self, reserved_at: Timestamp) -> Self {
        self.reserved_at = Some(reserved_at);
        self
    }

    /// Consume the builder and return a [`Reservation`].
    ///
    /// # Errors
    ///
    /// Returns [`FormationError::Validation`] if the participant or the
    /// formation is missing.
    pub fn build(self) -> Result<Reservation, FormationError> {
        let participant_id = self
            .participant_id
            .ok_or(ValidationError::MissingField("participant_id"))?;
        let formation_id = self
            .formation_id
            .ok_or(ValidationError::MissingField("formation_id"))?;

        Ok(Reservation {
            id: self.id,
            participant_id,
            formation_id,
            reserved_at: self.reserved_at,
        })
    }
}
