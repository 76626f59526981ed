use std::path::PathBuf;

pub fn groupie_home() -> Option<PathBuf> {
    // Allow override via GROUPIE_HOME for testing
    if let Ok(home) = std::env::var("GROUPIE_HOME") {
        return Some(PathBuf::from(home));
    }
    dirs::home_dir().map(|h| h.join(".groupie"))
}

/// Config file location: `--config`, then `GROUPIE_CONFIG`, then the home
/// directory.
pub fn config_path(flag: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(PathBuf::from(path));
    }
    if let Some(path) = std::env::var_os("GROUPIE_CONFIG") {
        return Some(PathBuf::from(path));
    }
    groupie_home().map(|h| h.join("config.toml"))
}
