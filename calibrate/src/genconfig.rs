use clap::Parser;
use std::process::ExitCode;

/// Fixed output filename; this tool is for first-time setup and
/// overwrites without backup.
const OUTPUT_FILE: &str = "config.yml";

#[derive(Parser, Debug)]
#[command(
    name = "genconfig",
    about = "Generate the initial sensor configuration file"
)]
struct Args {
    /// Label prefix, e.g. "S" yields S001, S002, ...
    prefix: String,

    /// First sensor number, inclusive
    start_number: u32,

    /// Last sensor number, inclusive
    end_number: u32,
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

    let config = match sensor_config::generate(&args.prefix, args.start_number, args.end_number) {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = config.save(OUTPUT_FILE) {
        eprintln!("Write {OUTPUT_FILE} failed: {e}");
        return ExitCode::from(1);
    }

    println!(
        "Config file '{OUTPUT_FILE}' has been generated with prefix '{}' from number {} to {}.",
        args.prefix, args.start_number, args.end_number
    );

    ExitCode::SUCCESS
}
