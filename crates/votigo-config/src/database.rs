//! Database location.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "votigo.db".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite file path, or `:memory:` for a throwaway database.
    #[serde(default = "default_path")]
    pub path: String,
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
