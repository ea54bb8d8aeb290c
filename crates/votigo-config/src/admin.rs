//! Credentials for the administrative surface.

use serde::{Deserialize, Serialize};

fn default_username() -> String {
    "admin".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AdminConfig {
    #[serde(default = "default_username")]
    pub username: String,

    /// Empty leaves the admin commands unguarded.
    #[serde(default)]
    pub password: String,
}

impl AdminConfig {
    /// Returns `true` if a password has been set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.password.is_empty()
    }

    /// Credential check used by the CLI admin guard. Always false while no
    /// password is configured.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.is_configured() && username == self.username && password == self.password
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_password_refuses_everyone() {
        let admin = AdminConfig::default();
        assert!(!admin.is_configured());
        assert!(!admin.verify("admin", ""));
    }

    #[test]
    fn verify_checks_both_fields() {
        let admin = AdminConfig {
            username: "admin".into(),
            password: "hunter2".into(),
        };
        assert!(admin.verify("admin", "hunter2"));
        assert!(!admin.verify("admin", "hunter3"));
        assert!(!admin.verify("root", "hunter2"));
    }
}
