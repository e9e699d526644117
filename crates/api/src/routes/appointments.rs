//! Appointment booking handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use mindwell_core::{AppointmentId, Email};

use crate::db::{AppointmentRepository, RepositoryError};
use crate::error::{ApiError, Result};
use crate::models::appointment::{Appointment, AppointmentUpdate, NewAppointment};
use crate::state::AppState;

/// Response for a successful booking.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub message: &'static str,
    pub appointment: Appointment,
}

/// Book an appointment.
///
/// POST /appointments
///
/// Open endpoint; bookings are keyed by the submitted email. Two bookings
/// for the same counselor and start time are both accepted.
///
/// # Errors
///
/// 400 when a required field is missing or blank.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewAppointment>,
) -> Result<(StatusCode, Json<BookingResponse>)> {
    let booking = body
        .normalize()
        .map_err(|field| ApiError::Validation(format!("{field} is required")))?;

    let appointment = AppointmentRepository::new(state.pool())
        .create(&booking)
        .await?;

    tracing::info!(appointment_id = %appointment.id, counselor = %appointment.counselor, "Appointment booked");

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            message: "Appointment booked successfully!",
            appointment,
        }),
    ))
}

/// Query parameters for listing appointments.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub email: Option<String>,
}

/// List appointments, newest start time first.
///
/// GET /appointments?email=
///
/// With `email` the result is the requester's own bookings; without it,
/// every booking (the admin dashboard view).
///
/// # Errors
///
/// 400 when the email filter is malformed.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Appointment>>> {
    let requester = params
        .email
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(Email::parse)
        .transpose()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let appointments = AppointmentRepository::new(state.pool())
        .list(requester.as_ref())
        .await?;

    Ok(Json(appointments))
}

/// Update an appointment.
///
/// PUT /appointments/:id
///
/// Partial merge; only the supplied fields change.
///
/// # Errors
///
/// 404 when no appointment has the id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<AppointmentId>,
    Json(body): Json<AppointmentUpdate>,
) -> Result<Json<Appointment>> {
    let appointment = AppointmentRepository::new(state.pool())
        .update(id, &body)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => ApiError::NotFound("Appointment".to_string()),
            other => other.into(),
        })?;

    Ok(Json(appointment))
}
