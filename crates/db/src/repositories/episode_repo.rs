//! Repository for the `episodes` table.

use lateshow_core::types::DbId;
use sqlx::PgPool;

use crate::models::episode::{CreateEpisode, Episode};

/// Provides CRUD operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert a new episode, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEpisode) -> Result<Episode, sqlx::Error> {
        sqlx::query_as::<_, Episode>(
            "INSERT INTO episodes (date, number) VALUES ($1, $2)
             RETURNING id, date, number",
        )
        .bind(input.date)
        .bind(input.number)
        .fetch_one(pool)
        .await
    }

    /// List all episodes, oldest id first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Episode>, sqlx::Error> {
        sqlx::query_as::<_, Episode>("SELECT id, date, number FROM episodes ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find an episode by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        sqlx::query_as::<_, Episode>("SELECT id, date, number FROM episodes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an episode by ID. Dependent appearances are removed by the
    /// schema-level `ON DELETE CASCADE` in the same transaction.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
