//! Shared fixtures for engine unit tests.

use votigo_core::entities::{Category, PollOption};
use votigo_core::enums::VoteType;

use crate::Engine;
use crate::lifecycle::NewCategory;

/// Engine over a fresh in-memory database.
pub async fn engine() -> Engine {
    Engine::new_local(":memory:").await.unwrap()
}

/// Engine with one `draft` category holding `options`.
pub async fn engine_with_category(vote_type: VoteType, options: &[&str]) -> (Engine, Category) {
    let engine = engine().await;
    let cat = engine
        .create_category(NewCategory::new("Test Category", vote_type))
        .await
        .unwrap();
    for option in options {
        engine.add_option(cat.id, option).await.unwrap();
    }
    (engine, cat)
}

/// Engine with one `open` category; returns its options in display order.
pub async fn open_poll(
    vote_type: VoteType,
    options: &[&str],
) -> (Engine, Category, Vec<PollOption>) {
    let (engine, cat) = engine_with_category(vote_type, options).await;
    let cat = engine.open(cat.id).await.unwrap();
    let options = engine.list_options(cat.id).await.unwrap();
    (engine, cat, options)
}
