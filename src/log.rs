//! Logger setup for the CLI

use log::LevelFilter;
use std::env;

/// Environment variable that turns on debug logging, same as `--verbose`
pub const DEBUG_ENV_VAR: &str = "WORDHELP_DEBUG";

/// True when `WORDHELP_DEBUG` is set to anything but `0`, `false` or the empty string
#[must_use]
pub fn debug_from_env() -> bool {
    env::var(DEBUG_ENV_VAR).is_ok_and(|value| is_truthy(&value))
}

fn is_truthy(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "" | "0" | "false")
}

/// Initialize logging for the CLI
///
/// Logs go to stderr at `Info`, or `Debug` when `debug_enabled`. `RUST_LOG`
/// overrides both when set. Call once per process.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();
    log::debug!("Logger initialized at {level:?} level");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("yes"));
        assert!(is_truthy("TRUE"));
        assert!(!is_truthy(""));
        assert!(!is_truthy(" 0 "));
        assert!(!is_truthy("False"));
    }
}
