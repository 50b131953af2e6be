//! Handlers for the `/episodes` resource.

use axum::extract::{Path, State};
use lateshow_core::error::CoreError;
use lateshow_core::types::DbId;
use lateshow_db::models::episode::{EpisodeDetail, EpisodeSummary};
use lateshow_db::repositories::{AppearanceRepo, EpisodeRepo};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::response::PrettyJson;
use crate::state::AppState;

/// GET /episodes
pub async fn list(State(state): State<AppState>) -> AppResult<PrettyJson<Vec<EpisodeSummary>>> {
    let episodes = EpisodeRepo::list(&state.pool).await?;
    Ok(PrettyJson(
        episodes.iter().map(EpisodeSummary::from).collect(),
    ))
}

/// GET /episodes/{id}
///
/// Returns the episode with its appearances, each nesting a guest summary.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<PrettyJson<EpisodeDetail>> {
    let episode = EpisodeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))?;

    let appearances = AppearanceRepo::list_by_episode_with_guests(&state.pool, episode.id).await?;

    Ok(PrettyJson(EpisodeDetail::new(&episode, appearances)))
}

/// DELETE /episodes/{id}
///
/// Dependent appearances are removed by the schema-level cascade.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<PrettyJson<serde_json::Value>> {
    let deleted = EpisodeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(PrettyJson(
            json!({ "message": "Episode deleted successfully" }),
        ))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))
    }
}
