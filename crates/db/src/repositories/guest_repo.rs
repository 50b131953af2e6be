//! Repository for the `guests` table.

use lateshow_core::types::DbId;
use sqlx::PgPool;

use crate::models::guest::{CreateGuest, Guest};

/// Provides CRUD operations for guests.
pub struct GuestRepo;

impl GuestRepo {
    /// Insert a new guest, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGuest) -> Result<Guest, sqlx::Error> {
        sqlx::query_as::<_, Guest>(
            "INSERT INTO guests (name, occupation) VALUES ($1, $2)
             RETURNING id, name, occupation",
        )
        .bind(&input.name)
        .bind(&input.occupation)
        .fetch_one(pool)
        .await
    }

    /// List all guests, oldest id first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Guest>, sqlx::Error> {
        sqlx::query_as::<_, Guest>("SELECT id, name, occupation FROM guests ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find a guest by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Guest>, sqlx::Error> {
        sqlx::query_as::<_, Guest>("SELECT id, name, occupation FROM guests WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
