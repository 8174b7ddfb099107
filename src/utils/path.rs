//! Resolution of user supplied paths (`--db`, `--file`).

use std::path::{Path, PathBuf};

/// Replace a leading `~` with the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));

    match path.strip_prefix("~") {
        Some("") => home(),
        Some(rest) if rest.starts_with('/') => home().join(rest.trim_start_matches('/')),
        _ => PathBuf::from(path),
    }
}

/// Where `init --db NAME` puts the database: bare names go to `base_dir`,
/// absolute and `~` paths are kept.
pub fn resolve_db_path(name: &str, base_dir: &Path) -> PathBuf {
    let p = expand_tilde(name);
    if p.is_absolute() { p } else { base_dir.join(p) }
}
