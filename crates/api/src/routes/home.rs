use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / -- HTML landing page.
async fn home() -> Html<&'static str> {
    Html("<h1>Welcome to the Late Show API!</h1>")
}

/// Mount the landing page at the root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
