use votigo_config::VotigoConfig;

use crate::context::AppContext;

/// Context over a fresh in-memory database.
pub async fn memory_context() -> AppContext {
    let mut config = VotigoConfig::default();
    config.database.path = ":memory:".to_string();
    AppContext::init(config).await.expect("in-memory context")
}
