//! Repository for the `appearances` table.

use lateshow_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::appearance::{Appearance, AppearanceWithGuest};
use crate::models::guest::Guest;

/// Flat row shape for the appearance-with-guest join query.
#[derive(Debug, FromRow)]
struct AppearanceGuestRow {
    id: DbId,
    episode_id: DbId,
    guest_id: DbId,
    rating: i32,
    guest_name: String,
    guest_occupation: String,
}

/// Provides CRUD operations for appearances.
pub struct AppearanceRepo;

impl AppearanceRepo {
    /// Insert a new appearance, returning the created row.
    ///
    /// Takes validated values; the caller is responsible for the rating
    /// bound and for resolving the episode and guest references first.
    pub async fn create(
        pool: &PgPool,
        episode_id: DbId,
        guest_id: DbId,
        rating: i32,
    ) -> Result<Appearance, sqlx::Error> {
        sqlx::query_as::<_, Appearance>(
            "INSERT INTO appearances (rating, episode_id, guest_id) VALUES ($1, $2, $3)
             RETURNING id, rating, episode_id, guest_id",
        )
        .bind(rating)
        .bind(episode_id)
        .bind(guest_id)
        .fetch_one(pool)
        .await
    }

    /// List an episode's appearances with their guest summaries, oldest
    /// appearance first.
    pub async fn list_by_episode_with_guests(
        pool: &PgPool,
        episode_id: DbId,
    ) -> Result<Vec<AppearanceWithGuest>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AppearanceGuestRow>(
            "SELECT a.id, a.episode_id, a.guest_id, a.rating,
                    g.name AS guest_name, g.occupation AS guest_occupation
             FROM appearances a
             JOIN guests g ON g.id = a.guest_id
             WHERE a.episode_id = $1
             ORDER BY a.id",
        )
        .bind(episode_id)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| AppearanceWithGuest {
                id: row.id,
                episode_id: row.episode_id,
                guest_id: row.guest_id,
                rating: row.rating,
                guest: Guest {
                    id: row.guest_id,
                    name: row.guest_name,
                    occupation: row.guest_occupation,
                },
            })
            .collect())
    }

    /// Count the appearances attached to an episode.
    pub async fn count_by_episode(pool: &PgPool, episode_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM appearances WHERE episode_id = $1")
            .bind(episode_id)
            .fetch_one(pool)
            .await
    }
}
