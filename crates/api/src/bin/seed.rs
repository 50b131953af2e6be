//! Loads the canonical Late Show fixture data.
//!
//! Wipes the three tables and reseeds them through the repositories. Run
//! with `cargo run --bin seed` against a database reachable via
//! `DATABASE_URL`.

use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lateshow_db::models::episode::CreateEpisode;
use lateshow_db::models::guest::CreateGuest;
use lateshow_db::repositories::{AppearanceRepo, EpisodeRepo, GuestRepo};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,lateshow_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = lateshow_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    lateshow_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // Start from a clean slate. Appearances go with their parents via the
    // schema-level cascade.
    sqlx::query("TRUNCATE episodes, guests RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to clear existing data");
    tracing::info!("Cleared existing data");

    let episode_fixtures = [
        (1, (1999, 11, 1)),
        (2, (1999, 12, 1)),
        (3, (2000, 1, 1)),
        (4, (2000, 2, 1)),
        (5, (2000, 3, 1)),
    ];

    let mut episodes = Vec::new();
    for (number, (year, month, day)) in episode_fixtures {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date");
        let episode = EpisodeRepo::create(&pool, &CreateEpisode { date, number })
            .await
            .expect("Failed to seed episode");
        episodes.push(episode);
    }
    tracing::info!(count = episodes.len(), "Seeded episodes");

    let guest_fixtures = [
        ("Michael J. Fox", "actor"),
        ("Sandra Bernhard", "Comedian"),
        ("Tracey Ullman", "television actress"),
        ("Steve Carell", "actor"),
        ("Amy Poehler", "comedian"),
    ];

    let mut guests = Vec::new();
    for (name, occupation) in guest_fixtures {
        let guest = GuestRepo::create(
            &pool,
            &CreateGuest {
                name: name.to_string(),
                occupation: occupation.to_string(),
            },
        )
        .await
        .expect("Failed to seed guest");
        guests.push(guest);
    }
    tracing::info!(count = guests.len(), "Seeded guests");

    // (episode index, guest index, rating)
    let appearance_fixtures = [(0, 0, 4), (1, 2, 5), (2, 1, 3), (3, 3, 4), (4, 4, 2)];

    for (episode_idx, guest_idx, rating) in appearance_fixtures {
        AppearanceRepo::create(
            &pool,
            episodes[episode_idx].id,
            guests[guest_idx].id,
            rating,
        )
        .await
        .expect("Failed to seed appearance");
    }
    tracing::info!(count = appearance_fixtures.len(), "Seeded appearances");

    tracing::info!("Database seeded");
}
