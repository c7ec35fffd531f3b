use std::path::PathBuf;

// =============================================================================
// Plugin identity constants
// =============================================================================

/// Plugin id registered with the host. Never changes.
pub const PLUGIN_ID: &str = "foundations";

/// Placeholder for optional metadata the host does not provide
pub const UNKNOWN: &str = "unknown";

/// Plugin version used when the container reports none
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Pre-release marker removed before a version is encoded
pub const SNAPSHOT_MARKER: &str = "-SNAPSHOT";

/// Dependency id under which the host framework API is declared
pub const HOST_API_DEPENDENCY: &str = "spongeapi";

/// Returns the path to the data directory for foundations.
/// Uses $XDG_DATA_HOME/foundations if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/foundations,
/// or ./foundations if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default log file.
pub fn log_path() -> PathBuf {
    data_dir().join("foundations.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(PLUGIN_ID)
}
