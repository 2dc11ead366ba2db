use crate::{Sensor, SensorConfig, SensorConfigError};

const BLOCKS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
const CHANNELS_PER_BLOCK: u8 = 4;

/// Gain for freshly generated sensors. Initial signal strength is
/// unknown, so every sensor starts at the ladder ceiling and gets
/// calibrated down from there.
const INITIAL_GAIN: u32 = 100;

/// Builds a fresh configuration for sensors `<prefix>NNN` numbered
/// `start..=end`, assigned round-robin over the hardware blocks.
///
/// Blocks cycle A through H; within a block the channel cycles 1
/// through 4. The hardware offers 8 x 4 = 32 slots, so more than 32
/// sensors is rejected up front, and running out of blocks mid-way is
/// rejected as well.
pub fn generate(prefix: &str, start: u32, end: u32) -> Result<SensorConfig, SensorConfigError> {
    let capacity = BLOCKS.len() as i64 * i64::from(CHANNELS_PER_BLOCK);
    if i64::from(end) - i64::from(start) + 1 > capacity {
        return Err(SensorConfigError::TooManySensors);
    }

    let mut config = SensorConfig::default();
    let mut block_index = 0;
    let mut channel = 1;

    for number in start..=end {
        let Some(block) = BLOCKS.get(block_index) else {
            return Err(SensorConfigError::BlocksExhausted);
        };

        config.sensors.push(Sensor {
            label: format!("{prefix}{number:03}"),
            block: block.to_string(),
            channel,
            gain: INITIAL_GAIN,
        });

        channel += 1;
        if channel > CHANNELS_PER_BLOCK {
            channel = 1;
            block_index += 1;
        }
    }

    Ok(config)
}
