pub mod appearance;
pub mod episode;
pub mod guest;
pub mod health;
pub mod home;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /episodes             list
/// /episodes/{id}        get, delete
/// /guests               list
/// /appearances          create
/// ```
///
/// The home page and `/health` are mounted separately at the root.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/episodes", episode::router())
        .nest("/guests", guest::router())
        .nest("/appearances", appearance::router())
}
