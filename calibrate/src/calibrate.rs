use anyhow::{Context, Result, bail};
use calibrate::policy::{self, Decision, StatsRecord, Thresholds};
use clap::Parser;
use log::{info, warn};
use sensor_config::{GainLadder, MutationOutcome, SensorConfig, set_sensor_gain};
use std::{
    fs,
    path::PathBuf,
    process::ExitCode,
    time::SystemTime,
};

#[derive(Parser, Debug)]
#[command(
    name = "calibrate",
    about = "Adjust an audio sensor's amplifier gain from recorded waveform statistics"
)]
struct Args {
    /// Sensor configuration file
    config_file: PathBuf,

    /// Label of the sensor to calibrate
    sensor_label: String,

    /// Recorded waveform files for that sensor
    #[arg(required = true)]
    wav_files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    calibrate::init_logger();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let sox = audio_stats::find_sox()?;

    let config = SensorConfig::load(&args.config_file)
        .with_context(|| format!("read config file {} failed", args.config_file.display()))?;
    let Some(sensor) = config.sensor(&args.sensor_label) else {
        bail!("Sensor {} not found in config.", args.sensor_label);
    };

    let ladder = GainLadder::default();
    let current_gain = sensor.gain;
    if !ladder.contains(current_gain) {
        bail!(
            "Current gain {current_gain} of sensor {} is not an available gain setting.",
            args.sensor_label
        );
    }

    let records = collect_stats(&sox, &args.wav_files);
    let decision = policy::evaluate(&records, current_gain, &ladder, &Thresholds::default());

    match decision {
        Decision::Hold { reason } => {
            println!("{reason}");
        }
        Decision::Adjust { gain, reason } => {
            println!("{reason}");

            match set_sensor_gain(&args.config_file, &args.sensor_label, gain, &ladder)? {
                MutationOutcome::Unchanged { gain } => {
                    println!("Gain for {} is already {gain}.", args.sensor_label);
                }
                MutationOutcome::Updated { previous, backup } => {
                    println!(
                        "Backup of {} created at {}",
                        args.config_file.display(),
                        backup.display()
                    );

                    let action = if gain < previous { "Reduced" } else { "Increased" };
                    println!(
                        "{action} gain for {} from {previous} to {gain}.",
                        args.sensor_label
                    );
                }
            }
        }
    }

    Ok(())
}

/// Analyzes every waveform file and returns the per-file statistics
/// ordered most recent first by file modification time.
///
/// Files that fail analysis are skipped with a warning; they never
/// abort the run.
fn collect_stats(sox: &std::path::Path, wav_files: &[PathBuf]) -> Vec<StatsRecord> {
    let mut analyzed = vec![];

    for wav in wav_files {
        let modified = fs::metadata(wav)
            .and_then(|md| md.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        match audio_stats::analyze(sox, wav) {
            Ok(stats) => {
                info!("{}: {stats:?}", wav.display());
                analyzed.push((modified, stats, wav.display().to_string()));
            }
            Err(e) => warn!("skipping {}: {e}", wav.display()),
        }
    }

    // stable sort keeps the command-line order for equal timestamps
    analyzed.sort_by(|a, b| b.0.cmp(&a.0));

    analyzed
        .into_iter()
        .map(|(_, stats, source)| StatsRecord { stats, source })
        .collect()
}
