use votigo_config::AdminConfig;

use crate::cli::GlobalFlags;

/// Check `--user`/`--password` against the configured admin credentials.
///
/// Without a configured password the admin commands are open, which suits
/// a single operator on their own machine.
pub fn require_admin(admin: &AdminConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !admin.is_configured() {
        return Ok(());
    }

    let username = flags.user.as_deref().unwrap_or(&admin.username);
    let password = flags.password.as_deref().unwrap_or_default();
    if admin.verify(username, password) {
        return Ok(());
    }

    tracing::debug!(%username, "admin credentials refused");
    anyhow::bail!("admin credentials required (pass --user and --password)")
}
