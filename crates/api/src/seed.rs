//! Bootstrap seeding.
//!
//! Ensures the default admin account and the counselor catalog exist.
//! Invoked explicitly from `main` after the pool is up (and available as
//! `mw-cli seed`), never as an import side effect. Every step is
//! existence-checked, so running it repeatedly is safe.

use sqlx::PgPool;
use thiserror::Error;

use mindwell_core::{Email, Role};

use crate::db::counselors::{CounselorChanges, CounselorRepository};
use crate::db::{AccountRepository, RepositoryError};
use crate::services::{AuthError, AuthService};

/// Email of the seeded admin account.
pub const ADMIN_EMAIL: &str = "admin@mindwell.com";

/// Initial password of the seeded admin account. Meant to be rotated on
/// first login in any real deployment.
pub const ADMIN_PASSWORD: &str = "Admin123!";

/// Errors from bootstrap seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("invalid seed email: {0}")]
    Email(#[from] mindwell_core::EmailError),
}

/// Run all seeding steps.
///
/// # Errors
///
/// Returns `SeedError` if a lookup or insert fails.
pub async fn run(pool: &PgPool) -> Result<(), SeedError> {
    seed_admin(pool).await?;
    seed_counselors(pool).await?;
    Ok(())
}

/// Ensure the default admin account exists.
async fn seed_admin(pool: &PgPool) -> Result<(), SeedError> {
    let email = Email::parse(ADMIN_EMAIL)?;
    let accounts = AccountRepository::new(pool);

    if accounts.get_by_email(&email).await?.is_some() {
        tracing::info!(email = ADMIN_EMAIL, "Admin account already exists");
        return Ok(());
    }

    AuthService::new(pool)
        .register("Admin", ADMIN_EMAIL, ADMIN_PASSWORD, Role::Admin)
        .await?;
    tracing::info!(email = ADMIN_EMAIL, "Admin account created");

    Ok(())
}

/// A catalog entry: name, category, years, languages, approach, quote.
struct CatalogEntry {
    name: &'static str,
    category: &'static str,
    experience_years: i32,
    languages: &'static [&'static str],
    approach: &'static [&'static str],
    quote: &'static str,
    rating: i32,
}

/// The fixed counselor catalog shipped with a fresh install.
const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Dr. Sarah Fernando",
        category: "Anxiety & Stress",
        experience_years: 12,
        languages: &["English", "Sinhala"],
        approach: &["CBT", "Mindfulness"],
        quote: "Small steps every day add up to big change.",
        rating: 5,
    },
    CatalogEntry {
        name: "Dr. Nuwan Perera",
        category: "Depression",
        experience_years: 9,
        languages: &["English", "Sinhala", "Tamil"],
        approach: &["Person-Centered", "ACT"],
        quote: "You don't have to carry it alone.",
        rating: 4,
    },
    CatalogEntry {
        name: "Ms. Tharushi Jayawardena",
        category: "Relationships",
        experience_years: 7,
        languages: &["English", "Sinhala"],
        approach: &["Gottman Method", "EFT"],
        quote: "Strong relationships are built one conversation at a time.",
        rating: 4,
    },
    CatalogEntry {
        name: "Mr. Kavindu Silva",
        category: "Career & Burnout",
        experience_years: 6,
        languages: &["English"],
        approach: &["Solution-Focused", "Coaching"],
        quote: "Rest is part of the work.",
        rating: 4,
    },
    CatalogEntry {
        name: "Dr. Anjali Raj",
        category: "Trauma",
        experience_years: 15,
        languages: &["English", "Tamil"],
        approach: &["EMDR", "Somatic Therapy"],
        quote: "Healing is not linear, and that is okay.",
        rating: 5,
    },
    CatalogEntry {
        name: "Ms. Dilini Weerasinghe",
        category: "Student Wellness",
        experience_years: 5,
        languages: &["English", "Sinhala"],
        approach: &["CBT", "Study Skills Coaching"],
        quote: "Your worth is not your grades.",
        rating: 4,
    },
];

/// Ensure each catalog counselor exists, keyed by name.
async fn seed_counselors(pool: &PgPool) -> Result<(), SeedError> {
    let counselors = CounselorRepository::new(pool);
    let mut created = 0usize;

    for entry in CATALOG {
        if counselors.exists_by_name(entry.name).await? {
            continue;
        }

        let changes = CounselorChanges {
            experience_years: Some(entry.experience_years),
            languages: Some(entry.languages.iter().map(ToString::to_string).collect()),
            approach: Some(entry.approach.iter().map(ToString::to_string).collect()),
            quote: Some(entry.quote.to_string()),
            rating: Some(entry.rating),
            ..CounselorChanges::default()
        };
        counselors
            .create(entry.name, entry.category, &changes)
            .await?;
        created += 1;
    }

    if created > 0 {
        tracing::info!(created, "Counselor catalog seeded");
    } else {
        tracing::info!("Counselor catalog already seeded");
    }

    Ok(())
}
