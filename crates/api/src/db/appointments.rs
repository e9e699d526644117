//! Appointment repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use mindwell_core::{AppointmentId, AppointmentMode, Email};

use super::RepositoryError;
use crate::models::appointment::{Appointment, AppointmentUpdate, NewAppointment};

/// Database row for an appointment.
#[derive(Debug, sqlx::FromRow)]
struct AppointmentRow {
    id: i32,
    name: String,
    email: String,
    phone: String,
    mode: AppointmentMode,
    counselor: String,
    notes: String,
    start_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const APPOINTMENT_COLUMNS: &str =
    "id, name, email, phone, mode, counselor, notes, start_at, created_at, updated_at";

impl AppointmentRow {
    fn into_appointment(self) -> Result<Appointment, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Appointment {
            id: AppointmentId::new(self.id),
            name: self.name,
            email,
            phone: self.phone,
            mode: self.mode,
            counselor: self.counselor,
            notes: self.notes,
            start_at: self.start_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Repository for appointment database operations.
pub struct AppointmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AppointmentRepository<'a> {
    /// Create a new appointment repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a booking.
    ///
    /// No duplicate-slot check: two bookings for the same counselor and
    /// start time are both accepted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, booking: &NewAppointment) -> Result<Appointment, RepositoryError> {
        let row = sqlx::query_as::<_, AppointmentRow>(&format!(
            "INSERT INTO appointment (name, email, phone, mode, counselor, notes, start_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {APPOINTMENT_COLUMNS}"
        ))
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(booking.mode)
        .bind(&booking.counselor)
        .bind(&booking.notes)
        .bind(booking.start_at)
        .fetch_one(self.pool)
        .await?;

        row.into_appointment()
    }

    /// List bookings, newest start time first.
    ///
    /// With a requester email the result is restricted to that requester
    /// (emails are stored lowercase, and `Email` parsing lowercases the
    /// filter, so the match is effectively case-insensitive). Without one,
    /// every booking is returned.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        requester: Option<&Email>,
    ) -> Result<Vec<Appointment>, RepositoryError> {
        let rows = match requester {
            Some(email) => {
                sqlx::query_as::<_, AppointmentRow>(&format!(
                    "SELECT {APPOINTMENT_COLUMNS} FROM appointment
                     WHERE email = $1
                     ORDER BY start_at DESC"
                ))
                .bind(email)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, AppointmentRow>(&format!(
                    "SELECT {APPOINTMENT_COLUMNS} FROM appointment ORDER BY start_at DESC"
                ))
                .fetch_all(self.pool)
                .await?
            }
        };

        rows.into_iter()
            .map(AppointmentRow::into_appointment)
            .collect()
    }

    /// Merge the supplied fields into an existing booking.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when no booking has the given id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: AppointmentId,
        update: &AppointmentUpdate,
    ) -> Result<Appointment, RepositoryError> {
        let row = sqlx::query_as::<_, AppointmentRow>(&format!(
            "UPDATE appointment SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                mode = COALESCE($5, mode),
                counselor = COALESCE($6, counselor),
                notes = COALESCE($7, notes),
                start_at = COALESCE($8, start_at),
                updated_at = now()
             WHERE id = $1
             RETURNING {APPOINTMENT_COLUMNS}"
        ))
        .bind(id)
        .bind(update.name.as_deref())
        .bind(update.email.as_ref())
        .bind(update.phone.as_deref())
        .bind(update.mode)
        .bind(update.counselor.as_deref())
        .bind(update.notes.as_deref())
        .bind(update.start_at)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.into_appointment()
    }
}
