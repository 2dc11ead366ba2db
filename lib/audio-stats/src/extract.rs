use crate::{AudioStats, AudioStatsError};
use log::debug;
use std::{
    path::{Path, PathBuf},
    process::Command,
};

/// Locates the `sox` executable on the search path.
pub fn find_sox() -> Result<PathBuf, AudioStatsError> {
    which::which("sox").map_err(|_| AudioStatsError::ToolNotFound)
}

/// Runs `sox <wav> -n stat` and parses the amplitude statistics from
/// its stderr report.
///
/// A missing file or a nonzero exit status fails only this file; the
/// caller decides whether to continue with the remaining files.
pub fn analyze(sox: &Path, wav: &Path) -> Result<AudioStats, AudioStatsError> {
    if !wav.is_file() {
        return Err(AudioStatsError::MissingFile(wav.to_path_buf()));
    }

    let output = Command::new(sox).arg(wav).args(["-n", "stat"]).output()?;
    if !output.status.success() {
        return Err(AudioStatsError::AnalysisFailed {
            file: wav.to_path_buf(),
            status: output.status,
        });
    }

    // sox writes the stat report to stderr, not stdout
    let report = String::from_utf8_lossy(&output.stderr);
    let stats = AudioStats::from_stat_report(&report);
    debug!("{}: {:?}", wav.display(), stats);

    Ok(stats)
}
