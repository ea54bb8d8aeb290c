//! General application configuration.

use serde::{Deserialize, Serialize};
use votigo_core::enums::ShowResults;

/// Default row limit for list output.
const fn default_limit() -> u32 {
    50
}

const fn default_show_results() -> ShowResults {
    ShowResults::AfterClose
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Visibility given to categories created without an explicit choice.
    #[serde(default = "default_show_results")]
    pub default_show_results: ShowResults,

    /// Default row limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_show_results: default_show_results(),
            default_limit: default_limit(),
        }
    }
}
