//! Sensor configuration document handling.
//!
//! The configuration is a YAML document holding a few acquisition
//! settings and an ordered list of sensor records. It is always read
//! fully, modified in memory, and rewritten fully; any rewrite of an
//! existing file is preceded by a timestamped backup so the prior
//! contents are never lost.

mod backup;
mod config;
mod error;
mod gain;
mod generate;
mod mutate;

pub use backup::backup_config_file;
pub use config::{Sensor, SensorConfig};
pub use error::SensorConfigError;
pub use gain::{AVAILABLE_GAINS, GainLadder};
pub use generate::generate;
pub use mutate::{MutationOutcome, set_sensor_gain};
