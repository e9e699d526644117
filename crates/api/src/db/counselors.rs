//! Counselor directory repository.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use mindwell_core::CounselorId;

use super::RepositoryError;
use crate::models::counselor::Counselor;

/// Database row for a counselor.
#[derive(Debug, sqlx::FromRow)]
struct CounselorRow {
    id: i32,
    name: String,
    category: String,
    experience_years: i32,
    languages: Vec<String>,
    approach: Vec<String>,
    quote: String,
    rating: i32,
    image_url: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const COUNSELOR_COLUMNS: &str = "id, name, category, experience_years, languages, approach, \
     quote, rating, image_url, is_active, created_at, updated_at";

impl From<CounselorRow> for Counselor {
    fn from(row: CounselorRow) -> Self {
        Self {
            id: CounselorId::new(row.id),
            name: row.name,
            category: row.category,
            experience_years: row.experience_years,
            languages: row.languages,
            approach: row.approach,
            quote: row.quote,
            rating: row.rating,
            image_url: row.image_url,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Filters for the public directory listing. All optional.
#[derive(Debug, Clone, Default)]
pub struct CounselorFilter {
    /// Case-insensitive substring match over name and category.
    pub q: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Language membership.
    pub language: Option<String>,
    /// Minimum rating (inclusive).
    pub min_rating: Option<i32>,
}

/// Whitelisted sort keys for the directory listing.
///
/// Unknown keys fall back to creation time; a leading `-` flips the order,
/// mirroring the query syntax the directory page already sends.
fn sort_clause(sort: Option<&str>) -> &'static str {
    let raw = sort.unwrap_or("createdAt");
    let (key, desc) = raw
        .strip_prefix('-')
        .map_or((raw, false), |stripped| (stripped, true));

    match (key, desc) {
        ("name", false) => "name ASC",
        ("name", true) => "name DESC",
        ("rating", false) => "rating ASC",
        ("rating", true) => "rating DESC",
        ("experienceYears", false) => "experience_years ASC",
        ("experienceYears", true) => "experience_years DESC",
        (_, true) => "created_at DESC",
        (_, false) => "created_at ASC",
    }
}

/// Fields for inserting or merging a counselor record. `None` means "keep
/// the stored value" on update and "use the schema default" on create.
#[derive(Debug, Clone, Default)]
pub struct CounselorChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub experience_years: Option<i32>,
    pub languages: Option<Vec<String>>,
    pub approach: Option<Vec<String>>,
    pub quote: Option<String>,
    pub rating: Option<i32>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Repository for counselor directory operations.
pub struct CounselorRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CounselorRepository<'a> {
    /// Create a new counselor repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List active counselors matching the filter, with pagination.
    ///
    /// Returns the page of items and the total number of matches.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list(
        &self,
        filter: &CounselorFilter,
        page: i64,
        limit: i64,
        sort: Option<&str>,
    ) -> Result<(Vec<Counselor>, i64), RepositoryError> {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);

        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM counselor");
        push_filters(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(self.pool)
            .await?;

        let mut list_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {COUNSELOR_COLUMNS} FROM counselor"));
        push_filters(&mut list_query, filter);
        list_query.push(format!(" ORDER BY {}", sort_clause(sort)));
        list_query.push(" LIMIT ");
        list_query.push_bind(limit);
        list_query.push(" OFFSET ");
        list_query.push_bind(page_offset(page, limit));

        let rows: Vec<CounselorRow> = list_query
            .build_query_as()
            .fetch_all(self.pool)
            .await?;

        Ok((rows.into_iter().map(Counselor::from).collect(), total))
    }

    /// Get a counselor by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: CounselorId) -> Result<Option<Counselor>, RepositoryError> {
        let row = sqlx::query_as::<_, CounselorRow>(&format!(
            "SELECT {COUNSELOR_COLUMNS} FROM counselor WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Counselor::from))
    }

    /// Whether a counselor with this exact name already exists.
    ///
    /// Used by catalog seeding to stay idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let found: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM counselor WHERE name = $1 LIMIT 1")
                .bind(name)
                .fetch_optional(self.pool)
                .await?;
        Ok(found.is_some())
    }

    /// Create a counselor.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        name: &str,
        category: &str,
        changes: &CounselorChanges,
    ) -> Result<Counselor, RepositoryError> {
        let row = sqlx::query_as::<_, CounselorRow>(&format!(
            "INSERT INTO counselor
                (name, category, experience_years, languages, approach,
                 quote, rating, image_url, is_active)
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, '{{}}'), COALESCE($5, '{{}}'),
                     COALESCE($6, ''), COALESCE($7, 4), COALESCE($8, ''), COALESCE($9, TRUE))
             RETURNING {COUNSELOR_COLUMNS}"
        ))
        .bind(name)
        .bind(category)
        .bind(changes.experience_years)
        .bind(changes.languages.as_deref())
        .bind(changes.approach.as_deref())
        .bind(changes.quote.as_deref())
        .bind(changes.rating)
        .bind(changes.image_url.as_deref())
        .bind(changes.is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(Counselor::from(row))
    }

    /// Merge the supplied fields into an existing counselor.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when no counselor has the id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: CounselorId,
        changes: &CounselorChanges,
    ) -> Result<Counselor, RepositoryError> {
        let row = sqlx::query_as::<_, CounselorRow>(&format!(
            "UPDATE counselor SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                experience_years = COALESCE($4, experience_years),
                languages = COALESCE($5, languages),
                approach = COALESCE($6, approach),
                quote = COALESCE($7, quote),
                rating = COALESCE($8, rating),
                image_url = COALESCE($9, image_url),
                is_active = COALESCE($10, is_active),
                updated_at = now()
             WHERE id = $1
             RETURNING {COUNSELOR_COLUMNS}"
        ))
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.category.as_deref())
        .bind(changes.experience_years)
        .bind(changes.languages.as_deref())
        .bind(changes.approach.as_deref())
        .bind(changes.quote.as_deref())
        .bind(changes.rating)
        .bind(changes.image_url.as_deref())
        .bind(changes.is_active)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(Counselor::from(row))
    }

    /// Delete a counselor.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when no counselor has the id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: CounselorId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM counselor WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Offset for a 1-based page. Saturating, so an absurd client-supplied
/// page number cannot overflow into a negative OFFSET.
const fn page_offset(page: i64, limit: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Append the directory filter as a WHERE clause.
fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &CounselorFilter) {
    query.push(" WHERE is_active = TRUE");

    if let Some(category) = &filter.category {
        query.push(" AND category = ");
        query.push_bind(category.clone());
    }
    if let Some(language) = &filter.language {
        query.push(" AND ");
        query.push_bind(language.clone());
        query.push(" = ANY(languages)");
    }
    if let Some(min_rating) = filter.min_rating {
        query.push(" AND rating >= ");
        query.push_bind(min_rating);
    }
    if let Some(q) = &filter.q {
        let pattern = format!("%{q}%");
        query.push(" AND (name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR category ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_clause_whitelist() {
        assert_eq!(sort_clause(None), "created_at ASC");
        assert_eq!(sort_clause(Some("createdAt")), "created_at ASC");
        assert_eq!(sort_clause(Some("-createdAt")), "created_at DESC");
        assert_eq!(sort_clause(Some("rating")), "rating ASC");
        assert_eq!(sort_clause(Some("-rating")), "rating DESC");
        assert_eq!(sort_clause(Some("experienceYears")), "experience_years ASC");
        assert_eq!(sort_clause(Some("name")), "name ASC");
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 12), 0);
        assert_eq!(page_offset(3, 12), 24);
    }

    #[test]
    fn test_page_offset_saturates_on_huge_page() {
        assert_eq!(page_offset(i64::MAX, 100), i64::MAX);
        assert_eq!(page_offset(i64::MAX, 1), i64::MAX - 1);
    }

    #[test]
    fn test_sort_clause_unknown_key_falls_back() {
        assert_eq!(sort_clause(Some("password")), "created_at ASC");
        assert_eq!(sort_clause(Some("-id; DROP TABLE counselor")), "created_at DESC");
    }
}
