//! Handler for the `/appearances` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use lateshow_core::rating::validate_rating;
use lateshow_db::models::appearance::{AppearanceDetail, CreateAppearance};
use lateshow_db::repositories::{AppearanceRepo, EpisodeRepo, GuestRepo};

use crate::error::{AppError, AppResult};
use crate::response::PrettyJson;
use crate::state::AppState;

/// POST /appearances
///
/// Failure classification, in order: missing or dangling episode/guest
/// references (404, all applicable messages accumulated), then the rating
/// bound (400), then anything else (500). Nothing is written unless every
/// check passes.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAppearance>,
) -> AppResult<(StatusCode, PrettyJson<AppearanceDetail>)> {
    // Reference checks accumulate so a single response reports every
    // missing or dangling id.
    let mut errors = Vec::new();

    let episode = match input.episode_id {
        None => {
            errors.push("Episode ID is required.".to_string());
            None
        }
        Some(id) => {
            let found = EpisodeRepo::find_by_id(&state.pool, id).await?;
            if found.is_none() {
                errors.push("The specified episode does not exist.".to_string());
            }
            found
        }
    };

    let guest = match input.guest_id {
        None => {
            errors.push("Guest ID is required.".to_string());
            None
        }
        Some(id) => {
            let found = GuestRepo::find_by_id(&state.pool, id).await?;
            if found.is_none() {
                errors.push("The specified guest does not exist.".to_string());
            }
            found
        }
    };

    let (Some(episode), Some(guest)) = (episode, guest) else {
        return Err(AppError::MissingReferences(errors));
    };

    let rating = validate_rating(input.rating)?;

    let appearance = AppearanceRepo::create(&state.pool, episode.id, guest.id, rating).await?;

    Ok((
        StatusCode::CREATED,
        PrettyJson(AppearanceDetail::new(&appearance, &episode, guest)),
    ))
}
