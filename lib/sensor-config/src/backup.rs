use crate::SensorConfigError;
use chrono::Local;
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Renames the config file to a timestamped `.bak` sibling and returns
/// the backup path.
///
/// The name is `<config_path>_<YYYYMMDD_HHMMSS>.bak`; if that already
/// exists (several runs within one second), an incrementing numeric
/// suffix is appended so an earlier backup is never overwritten. After
/// this call the live path is gone until the caller rewrites it.
pub fn backup_config_file(path: &Path) -> Result<PathBuf, SensorConfigError> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let base = format!("{}_{}", path.display(), timestamp);

    let mut backup_path = PathBuf::from(format!("{base}.bak"));
    let mut suffix = 1;
    while backup_path.exists() {
        backup_path = PathBuf::from(format!("{base}_{suffix}.bak"));
        suffix += 1;
    }

    fs::rename(path, &backup_path)?;
    info!("backup of {} created at {}", path.display(), backup_path.display());

    Ok(backup_path)
}
