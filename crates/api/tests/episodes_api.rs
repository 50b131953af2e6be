//! HTTP-level integration tests for the `/episodes` endpoints.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{body_json, delete, get};
use lateshow_db::models::episode::{CreateEpisode, Episode};
use lateshow_db::models::guest::{CreateGuest, Guest};
use lateshow_db::repositories::{AppearanceRepo, EpisodeRepo, GuestRepo};
use sqlx::PgPool;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

async fn seed_episode(pool: &PgPool, number: i32, date: NaiveDate) -> Episode {
    EpisodeRepo::create(pool, &CreateEpisode { date, number })
        .await
        .unwrap()
}

async fn seed_guest(pool: &PgPool, name: &str, occupation: &str) -> Guest {
    GuestRepo::create(
        pool,
        &CreateGuest {
            name: name.to_string(),
            occupation: occupation.to_string(),
        },
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// GET /episodes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_episodes_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/episodes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_episodes_formats_dates_without_leading_zeros(pool: PgPool) {
    seed_episode(&pool, 1, ymd(1999, 11, 1)).await;
    seed_episode(&pool, 3, ymd(2000, 1, 1)).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/episodes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let episodes = json.as_array().unwrap();
    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0]["date"], "11/1/99");
    assert_eq!(episodes[0]["number"], 1);
    assert_eq!(episodes[1]["date"], "1/1/00");
    assert_eq!(episodes[1]["number"], 3);
}

// ---------------------------------------------------------------------------
// GET /episodes/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_episode_includes_appearances_with_guests(pool: PgPool) {
    let episode = seed_episode(&pool, 1, ymd(1999, 11, 1)).await;
    let guest = seed_guest(&pool, "Michael J. Fox", "actor").await;
    let appearance = AppearanceRepo::create(&pool, episode.id, guest.id, 4)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/episodes/{}", episode.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], episode.id);
    assert_eq!(json["date"], "11/1/99");
    assert_eq!(json["number"], 1);

    let appearances = json["appearances"].as_array().unwrap();
    assert_eq!(appearances.len(), 1);
    assert_eq!(appearances[0]["id"], appearance.id);
    assert_eq!(appearances[0]["episode_id"], episode.id);
    assert_eq!(appearances[0]["guest_id"], guest.id);
    assert_eq!(appearances[0]["rating"], 4);
    assert_eq!(appearances[0]["guest"]["name"], "Michael J. Fox");
    assert_eq!(appearances[0]["guest"]["occupation"], "actor");

    // The nested appearance must not carry the episode back-reference.
    assert!(appearances[0].get("episode").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_episode_without_appearances_has_empty_list(pool: PgPool) {
    let episode = seed_episode(&pool, 2, ymd(1999, 12, 1)).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/episodes/{}", episode.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["appearances"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_episode_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/episodes/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "error": "Episode not found" }));
}

// ---------------------------------------------------------------------------
// DELETE /episodes/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_episode_cascades_to_its_appearances(pool: PgPool) {
    let doomed = seed_episode(&pool, 1, ymd(1999, 11, 1)).await;
    let survivor = seed_episode(&pool, 2, ymd(1999, 12, 1)).await;
    let guest = seed_guest(&pool, "Amy Poehler", "comedian").await;

    AppearanceRepo::create(&pool, doomed.id, guest.id, 4)
        .await
        .unwrap();
    AppearanceRepo::create(&pool, doomed.id, guest.id, 5)
        .await
        .unwrap();
    AppearanceRepo::create(&pool, survivor.id, guest.id, 3)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/episodes/{}", doomed.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "message": "Episode deleted successfully" })
    );

    // The doomed episode's appearances are gone; nothing else is touched.
    assert_eq!(
        AppearanceRepo::count_by_episode(&pool, doomed.id)
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        AppearanceRepo::count_by_episode(&pool, survivor.id)
            .await
            .unwrap(),
        1
    );
    assert_eq!(GuestRepo::list(&pool).await.unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/episodes/{}", doomed.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_nonexistent_episode_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/episodes/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "error": "Episode not found" }));
}

// ---------------------------------------------------------------------------
// Repository level
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_returns_none_for_unknown_episode(pool: PgPool) {
    assert_matches!(EpisodeRepo::find_by_id(&pool, 4242).await, Ok(None));
}
