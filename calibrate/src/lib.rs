//! Gain calibration for audio sensor arrays.
//!
//! Two command-line tools share this crate:
//! - `calibrate` inspects recorded waveform statistics for one sensor
//!   and adjusts its amplifier gain in the configuration file, one
//!   ladder step per run.
//! - `genconfig` generates the initial configuration file for a
//!   numbered range of sensors.

pub mod policy;

/// Initializes the logger with a timestamp/level/location prefix.
///
/// The filter defaults to `info` and can be overridden through
/// `RUST_LOG`.
pub fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
