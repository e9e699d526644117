//! HTTP route handlers for the MindWell API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings the database)
//!
//! # Auth
//! POST /register               - Register an employee account
//! POST /login                  - Login, returns a bearer token
//!
//! # Appointments
//! POST /appointments           - Book an appointment
//! GET  /appointments           - List bookings (?email= filters by requester)
//! PUT  /appointments/:id       - Partial update
//!
//! # Counselor directory
//! GET    /counselors           - Public filtered/paginated listing
//! GET    /counselors/:id       - Public read
//! POST   /counselors           - Create (admin)
//! PATCH  /counselors/:id       - Partial update (admin)
//! DELETE /counselors/:id       - Delete (admin)
//!
//! # Contact messages
//! POST   /messages             - Submit a contact message
//! GET    /messages             - List all messages
//! PUT    /messages/:id         - Partial update
//! DELETE /messages/:id         - Delete
//!
//! # Profile
//! GET /profile/:id             - Account profile, sans password hash
//! PUT /profile/:id             - Update profile fields
//!
//! # Music library
//! GET    /music                - List tracks
//! GET    /music/:id            - Read one track
//! POST   /music                - Upload a track
//! PUT    /music/:id            - Partial update
//! DELETE /music/:id            - Delete
//! ```

pub mod appointments;
pub mod auth;
pub mod counselors;
pub mod health;
pub mod messages;
pub mod music;
pub mod profile;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Assemble the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/appointments",
            post(appointments::create).get(appointments::list),
        )
        .route("/appointments/{id}", put(appointments::update))
        .route(
            "/counselors",
            get(counselors::list).post(counselors::create),
        )
        .route(
            "/counselors/{id}",
            get(counselors::get_one)
                .patch(counselors::update)
                .delete(counselors::remove),
        )
        .route("/messages", post(messages::create).get(messages::list))
        .route(
            "/messages/{id}",
            put(messages::update).delete(messages::remove),
        )
        .route(
            "/profile/{id}",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/music", get(music::list).post(music::create))
        .route(
            "/music/{id}",
            get(music::get_one).put(music::update).delete(music::remove),
        )
}
