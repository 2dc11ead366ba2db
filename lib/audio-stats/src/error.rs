use std::{path::PathBuf, process::ExitStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioStatsError {
    #[error("sox not found. Please install sox using 'apt install sox'.")]
    ToolNotFound,

    #[error("Waveform file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Analysis of {} failed: {status}", .file.display())]
    AnalysisFailed { file: PathBuf, status: ExitStatus },

    #[error("Run analysis tool failed: {0}")]
    Io(#[from] std::io::Error),
}
