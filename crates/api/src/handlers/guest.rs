//! Handlers for the `/guests` resource.

use axum::extract::State;
use lateshow_db::models::guest::Guest;
use lateshow_db::repositories::GuestRepo;

use crate::error::AppResult;
use crate::response::PrettyJson;
use crate::state::AppState;

/// GET /guests
pub async fn list(State(state): State<AppState>) -> AppResult<PrettyJson<Vec<Guest>>> {
    let guests = GuestRepo::list(&state.pool).await?;
    Ok(PrettyJson(guests))
}
