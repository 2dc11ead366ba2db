//! Waveform statistics extraction backed by the `sox` command-line tool.
//!
//! Each waveform file is analyzed by running `sox <file> -n stat` and
//! parsing the amplitude statistics from its diagnostic output. A file
//! that cannot be analyzed fails individually and can be skipped by the
//! caller without aborting the rest of a run.

mod error;
mod extract;
mod stats;

pub use error::AudioStatsError;
pub use extract::{analyze, find_sox};
pub use stats::AudioStats;
