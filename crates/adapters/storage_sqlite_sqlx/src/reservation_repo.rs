//! `SQLite` implementation of [`ReservationRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use formation_app::ports::ReservationRepository;
use formation_domain::error::FormationError;
use formation_domain::id::{FormationId, ParticipantId, ReservationId};
use formation_domain::reservation::Reservation;
use formation_domain::time::{Timestamp, now};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Reservation`].
struct Wrapper(Reservation);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let participant_id: i64 = row.try_get("participant_id")?;
        let formation_id: i64 = row.try_get("formation_id")?;
        let reserved_at: String = row.try_get("reserved_at")?;

        let reserved_at = chrono::DateTime::parse_from_rfc3339(&reserved_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(StorageError::from(err))))?
            .with_timezone(&chrono::Utc);

        Ok(Self(Reservation {
            id: Some(ReservationId::new(id)),
            participant_id: ParticipantId::new(participant_id),
            formation_id: FormationId::new(formation_id),
            reserved_at: Some(reserved_at),
        }))
    }
}

const INSERT: &str = "INSERT INTO reservations (id, participant_id, formation_id, reserved_at) VALUES (?, ?, ?, ?) RETURNING id";
const SELECT_ALL: &str = "SELECT * FROM reservations ORDER BY id";
const SELECT_BY_PARTICIPANT: &str =
    "SELECT * FROM reservations WHERE participant_id = ? ORDER BY id";

/// `SQLite`-backed reservation repository.
pub struct SqliteReservationRepository {
    pool: SqlitePool,
}

impl SqliteReservationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReservationRepository for SqliteReservationRepository {
    fn create(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, FormationError>> + Send {
        let pool = self.pool.clone();
        async move {
            let reserved_at: Timestamp = reservation.reserved_at.unwrap_or_else(now);

            let id: i64 = sqlx::query_scalar(INSERT)
                .bind(reservation.id.map(ReservationId::get))
                .bind(reservation.participant_id.get())
                .bind(reservation.formation_id.get())
                .bind(reserved_at.to_rfc3339())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Reservation {
                id: Some(ReservationId::new(id)),
                reserved_at: Some(reserved_at),
                ..reservation
            })
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Reservation>, FormationError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_participant(
        &self,
        participant_id: ParticipantId,
    ) -> impl Future<Output = Result<Vec<Reservation>, FormationError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PARTICIPANT)
                .bind(participant_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
