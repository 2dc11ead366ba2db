use thiserror::Error;

#[derive(Error, Debug)]
pub enum SensorConfigError {
    #[error("Sensor {0} not found in config.")]
    SensorNotFound(String),

    #[error("Gain {0} is not an available gain setting.")]
    GainNotAvailable(u32),

    #[error("Error: The number of sensors cannot exceed 32.")]
    TooManySensors,

    #[error("Error: Not enough blocks to accommodate all sensors.")]
    BlocksExhausted,

    #[error("Parse config failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config file operation failed: {0}")]
    Io(#[from] std::io::Error),
}
