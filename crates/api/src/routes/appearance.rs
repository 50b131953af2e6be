use axum::routing::post;
use axum::Router;

use crate::handlers::appearance;
use crate::state::AppState;

/// Routes mounted at `/appearances`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(appearance::create))
}
