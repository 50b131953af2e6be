//! Episode entity model and response shapes.

use chrono::NaiveDate;
use lateshow_core::air_date::format_air_date;
use lateshow_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::appearance::AppearanceWithGuest;

/// A row from the `episodes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Episode {
    pub id: DbId,
    pub date: NaiveDate,
    pub number: i32,
}

/// DTO for creating a new episode.
///
/// Episodes are only created by the seed binary and test setup; there is no
/// HTTP endpoint for this.
#[derive(Debug, Clone)]
pub struct CreateEpisode {
    pub date: NaiveDate,
    pub number: i32,
}

/// Episode as it appears in list responses and nested summaries.
///
/// `date` is pre-formatted as `M/D/YY`.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeSummary {
    pub id: DbId,
    pub date: String,
    pub number: i32,
}

impl From<&Episode> for EpisodeSummary {
    fn from(episode: &Episode) -> Self {
        Self {
            id: episode.id,
            date: format_air_date(episode.date),
            number: episode.number,
        }
    }
}

/// Episode detail with its appearances, each carrying a guest summary.
///
/// The nested appearances never carry the episode back-reference, so the
/// payload cannot recurse.
#[derive(Debug, Serialize)]
pub struct EpisodeDetail {
    pub id: DbId,
    pub date: String,
    pub number: i32,
    pub appearances: Vec<AppearanceWithGuest>,
}

impl EpisodeDetail {
    pub fn new(episode: &Episode, appearances: Vec<AppearanceWithGuest>) -> Self {
        Self {
            id: episode.id,
            date: format_air_date(episode.date),
            number: episode.number,
            appearances,
        }
    }
}
