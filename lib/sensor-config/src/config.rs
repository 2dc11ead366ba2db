use crate::SensorConfigError;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fs, path::Path};

/// Default acquisition frontend address for freshly generated configs.
pub const DEFAULT_AFE_IP: &str = "169.254.229.3";
pub const DEFAULT_AFE_PORT: u16 = 50000;

/// Default sampling rate in Hz.
pub const DEFAULT_SAMPLING_RATE: u32 = 10000;

/// One sensor record inside the configuration document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Sensor {
    pub label: String,

    /// Hardware block the sensor is wired to, "A" through "H".
    pub block: String,

    /// Channel within the block, 1 through 4. Existing config files
    /// quote this value, so both scalar forms are accepted.
    #[serde(deserialize_with = "channel_from_yaml")]
    pub channel: u8,

    pub gain: u32,
}

/// The whole configuration document: acquisition settings plus an
/// ordered list of sensors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SensorConfig {
    pub afe_ip: String,
    pub afe_port: u16,
    pub sampling_rate: u32,
    pub sensors: Vec<Sensor>,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            afe_ip: DEFAULT_AFE_IP.to_string(),
            afe_port: DEFAULT_AFE_PORT,
            sampling_rate: DEFAULT_SAMPLING_RATE,
            sensors: vec![],
        }
    }
}

impl SensorConfig {
    /// Reads and parses the configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SensorConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Serializes and rewrites the configuration file. The caller is
    /// responsible for backing up an existing file first.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SensorConfigError> {
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, SensorConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn sensor(&self, label: &str) -> Option<&Sensor> {
        self.sensors.iter().find(|s| s.label == label)
    }

    pub fn sensor_mut(&mut self, label: &str) -> Option<&mut Sensor> {
        self.sensors.iter_mut().find(|s| s.label == label)
    }
}

fn channel_from_yaml<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u8),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // same shape the legacy generator produced, channels quoted
    const LEGACY_CONFIG: &str = r#"afe_ip: 169.254.229.3
afe_port: 50000
sampling_rate: 10000 # Hz
sensors: # sensor name, block: A-H, channel: 1-4, gain: 0, 1, 2, 5, 10, 20, 50, 100
  - {label: "S001", block: "A", channel: "1", gain: 100}
  - {label: "S002", block: "A", channel: "2", gain: 20}
"#;

    #[test]
    fn test_load_legacy_quoted_channels() {
        let config: SensorConfig = serde_yaml::from_str(LEGACY_CONFIG).unwrap();
        assert_eq!(config.afe_ip, "169.254.229.3");
        assert_eq!(config.afe_port, 50000);
        assert_eq!(config.sampling_rate, 10000);
        assert_eq!(config.sensors.len(), 2);
        assert_eq!(config.sensors[0].channel, 1);
        assert_eq!(config.sensors[1].gain, 20);
    }

    #[test]
    fn test_numeric_channels_accepted() {
        let config: SensorConfig = serde_yaml::from_str(
            "afe_ip: 10.0.0.1\nafe_port: 1234\nsampling_rate: 8000\nsensors:\n- label: X001\n  block: B\n  channel: 3\n  gain: 5\n",
        )
        .unwrap();
        assert_eq!(config.sensors[0].channel, 3);
        assert_eq!(config.sensors[0].block, "B");
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let config: SensorConfig = serde_yaml::from_str(LEGACY_CONFIG).unwrap();
        let reparsed: SensorConfig =
            serde_yaml::from_str(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn test_sensor_lookup() {
        let mut config: SensorConfig = serde_yaml::from_str(LEGACY_CONFIG).unwrap();
        assert_eq!(config.sensor("S002").unwrap().gain, 20);
        assert!(config.sensor("S999").is_none());

        config.sensor_mut("S002").unwrap().gain = 50;
        assert_eq!(config.sensor("S002").unwrap().gain, 50);
    }
}
