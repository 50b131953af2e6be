use axum::routing::get;
use axum::Router;

use crate::handlers::guest;
use crate::state::AppState;

/// Routes mounted at `/guests`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(guest::list))
}
