use votigo_config::VotigoConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, TOML files, `VOTIGO_*`) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<VotigoConfig> {
    let mut config = VotigoConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut VotigoConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.db {
        tracing::debug!(%path, "database path overridden by --db");
        config.database.path.clone_from(path);
    }
}

#[cfg(test)]
mod tests {
    use super::apply_overrides;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
    use votigo_config::VotigoConfig;

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            color: ColorMode::Never,
            quiet: false,
            verbose: false,
            db: db.map(str::to_string),
            user: None,
            password: None,
        }
    }

    #[test]
    fn db_flag_replaces_configured_path() {
        let mut config = VotigoConfig::default();
        apply_overrides(&mut config, &flags(Some(":memory:")));
        assert!(config.database.is_in_memory());
    }

    #[test]
    fn configured_path_kept_without_flag() {
        let mut config = VotigoConfig::default();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.database.path, "votigo.db");
    }
}
