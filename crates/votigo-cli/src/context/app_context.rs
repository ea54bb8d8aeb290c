use votigo_config::VotigoConfig;
use votigo_engine::Engine;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub engine: Engine,
    pub config: VotigoConfig,
}

impl AppContext {
    /// Open the configured database and build the engine over it.
    pub async fn init(config: VotigoConfig) -> anyhow::Result<Self> {
        tracing::debug!(path = %config.database.path, "opening vote database");
        let engine = Engine::new_local(&config.database.path).await?;
        Ok(Self { engine, config })
    }
}

#[cfg(test)]
mod tests {
    use super::AppContext;
    use votigo_config::VotigoConfig;

    #[tokio::test]
    async fn init_creates_the_database_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("event.db");
        let mut config = VotigoConfig::default();
        config.database.path = path.to_string_lossy().into_owned();

        let ctx = AppContext::init(config).await.expect("context should init");
        assert!(ctx.engine.list_categories(false).await.expect("list").is_empty());
        assert!(path.exists());
    }
}
