//! Appearance entity: the guest-to-episode join record with a rating payload.

use lateshow_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::episode::{Episode, EpisodeSummary};
use crate::models::guest::Guest;

/// A row from the `appearances` table.
#[derive(Debug, Clone, FromRow)]
pub struct Appearance {
    pub id: DbId,
    pub rating: i32,
    pub episode_id: DbId,
    pub guest_id: DbId,
}

/// Request body for `POST /appearances`.
///
/// Every field is optional so the handler can report each missing field
/// itself instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppearance {
    pub episode_id: Option<DbId>,
    pub guest_id: Option<DbId>,
    pub rating: Option<i32>,
}

/// Appearance as nested inside an episode detail response.
///
/// Carries the guest summary but no episode back-reference.
#[derive(Debug, Serialize)]
pub struct AppearanceWithGuest {
    pub id: DbId,
    pub episode_id: DbId,
    pub guest_id: DbId,
    pub rating: i32,
    pub guest: Guest,
}

/// Created-appearance response with both parent summaries.
#[derive(Debug, Serialize)]
pub struct AppearanceDetail {
    pub id: DbId,
    pub rating: i32,
    pub guest_id: DbId,
    pub episode_id: DbId,
    pub episode: EpisodeSummary,
    pub guest: Guest,
}

impl AppearanceDetail {
    pub fn new(appearance: &Appearance, episode: &Episode, guest: Guest) -> Self {
        Self {
            id: appearance.id,
            rating: appearance.rating,
            guest_id: appearance.guest_id,
            episode_id: appearance.episode_id,
            episode: EpisodeSummary::from(episode),
            guest,
        }
    }
}
