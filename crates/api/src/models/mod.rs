//! Domain types for the API.
//!
//! These types represent validated domain objects separate from database
//! row types and from request/response payloads.

pub mod account;
pub mod appointment;
pub mod counselor;
pub mod message;
pub mod music;

pub use account::{Account, ProfileUpdate};
pub use appointment::{Appointment, AppointmentUpdate, NewAppointment};
pub use counselor::{Counselor, CounselorPayload};
pub use message::{Message, MessageUpdate, NewMessage};
pub use music::{MusicTrack, NewTrack, TrackUpdate};
