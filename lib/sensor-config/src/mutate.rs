use crate::{GainLadder, SensorConfig, SensorConfigError, backup_config_file};
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Result of a gain mutation attempt that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The sensor already had the requested gain; nothing was written.
    Unchanged { gain: u32 },

    /// The gain was rewritten; the prior file survives at `backup`.
    Updated { previous: u32, backup: PathBuf },
}

/// Rewrites one sensor's gain in the configuration file.
///
/// Validation failures (gain not on the ladder, unknown sensor label)
/// leave the file untouched. A matching current gain is a no-op, so
/// repeated calls converge after the first write. An actual change
/// serializes the updated document first, then renames the current
/// file to its backup and writes the new contents to the live path;
/// if the final write fails the backup is the surviving copy.
pub fn set_sensor_gain(
    path: &Path,
    label: &str,
    new_gain: u32,
    ladder: &GainLadder,
) -> Result<MutationOutcome, SensorConfigError> {
    if !ladder.contains(new_gain) {
        return Err(SensorConfigError::GainNotAvailable(new_gain));
    }

    let mut config = SensorConfig::load(path)?;
    let sensor = config
        .sensor_mut(label)
        .ok_or_else(|| SensorConfigError::SensorNotFound(label.to_string()))?;

    let previous = sensor.gain;
    if previous == new_gain {
        return Ok(MutationOutcome::Unchanged { gain: new_gain });
    }

    sensor.gain = new_gain;
    let serialized = config.to_yaml()?;

    let backup = backup_config_file(path)?;
    fs::write(path, serialized)?;
    info!("gain of {label} changed from {previous} to {new_gain}");

    Ok(MutationOutcome::Updated { previous, backup })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CONFIG: &str = "\
afe_ip: 169.254.229.3
afe_port: 50000
sampling_rate: 10000
sensors:
- label: S001
  block: A
  channel: 1
  gain: 20
- label: S002
  block: A
  channel: 2
  gain: 100
";

    fn backups_in(dir: &Path) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|entry| {
                let path = entry.unwrap().path();
                let is_backup = path.extension().is_some_and(|ext| ext == "bak");
                is_backup.then_some(path)
            })
            .collect();
        found.sort();
        found
    }

    #[test]
    fn test_update_creates_backup_of_prior_contents() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.yml");
        fs::write(&config, CONFIG).unwrap();

        let outcome =
            set_sensor_gain(&config, "S001", 50, &GainLadder::default()).unwrap();
        let MutationOutcome::Updated { previous, backup } = outcome else {
            panic!("expected an update");
        };

        assert_eq!(previous, 20);
        assert_eq!(fs::read_to_string(backup).unwrap(), CONFIG);

        let updated = SensorConfig::load(&config).unwrap();
        assert_eq!(updated.sensor("S001").unwrap().gain, 50);

        // untouched records keep every field
        assert_eq!(updated.sensor("S002").unwrap().gain, 100);
        assert_eq!(updated.sensor("S002").unwrap().block, "A");
        assert_eq!(updated.sensor("S002").unwrap().channel, 2);
    }

    #[test]
    fn test_same_gain_is_a_no_op() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.yml");
        fs::write(&config, CONFIG).unwrap();

        let outcome =
            set_sensor_gain(&config, "S001", 20, &GainLadder::default()).unwrap();
        assert_eq!(outcome, MutationOutcome::Unchanged { gain: 20 });

        assert_eq!(fs::read_to_string(&config).unwrap(), CONFIG);
        assert!(backups_in(dir.path()).is_empty());
    }

    #[test]
    fn test_repeated_mutation_writes_once() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.yml");
        fs::write(&config, CONFIG).unwrap();

        let ladder = GainLadder::default();
        let first = set_sensor_gain(&config, "S001", 50, &ladder).unwrap();
        assert!(matches!(first, MutationOutcome::Updated { .. }));

        // converged: second call neither writes nor backs up again
        let second = set_sensor_gain(&config, "S001", 50, &ladder).unwrap();
        assert_eq!(second, MutationOutcome::Unchanged { gain: 50 });
        assert_eq!(backups_in(dir.path()).len(), 1);
    }

    #[test]
    fn test_unknown_sensor_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.yml");
        fs::write(&config, CONFIG).unwrap();

        let result = set_sensor_gain(&config, "S999", 50, &GainLadder::default());
        assert!(matches!(
            result,
            Err(SensorConfigError::SensorNotFound(label)) if label == "S999"
        ));

        assert_eq!(fs::read_to_string(&config).unwrap(), CONFIG);
        assert!(backups_in(dir.path()).is_empty());
    }

    #[test]
    fn test_off_ladder_gain_is_rejected_without_read() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.yml");
        fs::write(&config, CONFIG).unwrap();

        let result = set_sensor_gain(&config, "S001", 42, &GainLadder::default());
        assert!(matches!(
            result,
            Err(SensorConfigError::GainNotAvailable(42))
        ));
        assert_eq!(fs::read_to_string(&config).unwrap(), CONFIG);
    }
}
