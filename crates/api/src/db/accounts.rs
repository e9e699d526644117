//! Account repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use mindwell_core::{AccountId, Email, Role};

use super::{RepositoryError, map_unique_violation};
use crate::models::account::{Account, ProfileUpdate};

/// Database row for an account, without the password hash.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: i32,
    name: String,
    email: String,
    role: Role,
    phone: String,
    bio: String,
    specialization: String,
    experience: String,
    qualification: String,
    profile_image: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const ACCOUNT_COLUMNS: &str = "id, name, email, role, phone, bio, specialization, \
     experience, qualification, profile_image, created_at, updated_at";

impl AccountRow {
    fn into_account(self) -> Result<Account, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Account {
            id: AccountId::new(self.id),
            name: self.name,
            email,
            role: self.role,
            phone: self.phone,
            bio: self.bio,
            specialization: self.specialization,
            experience: self.experience,
            qualification: self.qualification,
            profile_image: self.profile_image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Repository for account database operations.
pub struct AccountRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an account by its email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM account WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    /// Get an account by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn get_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM account WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    /// Create a new account with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        email: &Email,
        password_hash: &str,
        role: Role,
    ) -> Result<Account, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "INSERT INTO account (name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "email"))?;

        row.into_account()
    }

    /// Get an account together with its password hash, by email.
    ///
    /// Returns `None` if no account matches.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(Account, String)>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct HashRow {
            #[sqlx(flatten)]
            account: AccountRow,
            password_hash: String,
        }

        let row = sqlx::query_as::<_, HashRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS}, password_hash FROM account WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        Ok(Some((r.account.into_account()?, r.password_hash)))
    }

    /// Update an account's profile fields.
    ///
    /// Only the fields present in `update` change; `email`, `role`, and the
    /// password are untouchable through this path. Returns `None` when no
    /// account has the given id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_profile(
        &self,
        id: AccountId,
        update: &ProfileUpdate,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "UPDATE account SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                bio = COALESCE($4, bio),
                specialization = COALESCE($5, specialization),
                experience = COALESCE($6, experience),
                qualification = COALESCE($7, qualification),
                profile_image = COALESCE($8, profile_image),
                updated_at = now()
             WHERE id = $1
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(id)
        .bind(update.name.as_deref())
        .bind(update.phone.as_deref())
        .bind(update.bio.as_deref())
        .bind(update.specialization.as_deref())
        .bind(update.experience.as_deref())
        .bind(update.qualification.as_deref())
        .bind(update.profile_image.as_deref())
        .fetch_optional(self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }
}
