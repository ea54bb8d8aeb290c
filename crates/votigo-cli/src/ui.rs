//! Terminal-dependent table preferences, resolved once per run.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored rather than squeezing every column.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    fn resolve(
        flags: &GlobalFlags,
        stdout_is_tty: bool,
        no_color: bool,
        columns: Option<&str>,
    ) -> Self {
        let table = flags.format == OutputFormat::Table;
        let table_color = table
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => stdout_is_tty && !flags.quiet && !no_color,
            };

        let term_width = columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH);

        Self {
            table_color,
            term_width,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let prefs = UiPrefs::resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    );
    let _ = UI_PREFS.set(prefs);
}

/// Preferences from [`init`], or plain uncolored output before it runs.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::UiPrefs;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            color,
            quiet: false,
            verbose: false,
            db: None,
            user: None,
            password: None,
        }
    }

    #[test]
    fn auto_color_needs_a_tty_and_no_no_color() {
        let table = flags(OutputFormat::Table, ColorMode::Auto);
        assert!(UiPrefs::resolve(&table, true, false, None).table_color);
        assert!(!UiPrefs::resolve(&table, false, false, None).table_color);
        assert!(!UiPrefs::resolve(&table, true, true, None).table_color);
    }

    #[test]
    fn color_only_applies_to_tables() {
        let json = flags(OutputFormat::Json, ColorMode::Always);
        assert!(!UiPrefs::resolve(&json, true, false, None).table_color);
        let table = flags(OutputFormat::Table, ColorMode::Always);
        assert!(UiPrefs::resolve(&table, false, true, None).table_color);
    }

    #[test]
    fn tiny_or_garbled_columns_are_ignored() {
        let table = flags(OutputFormat::Table, ColorMode::Never);
        assert_eq!(UiPrefs::resolve(&table, true, false, Some("120")).term_width, Some(120));
        assert_eq!(UiPrefs::resolve(&table, true, false, Some("20")).term_width, None);
        assert_eq!(UiPrefs::resolve(&table, true, false, Some("wide")).term_width, None);
    }
}
