use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use labelme2bbox::{convert_directory, Args, LabelRegistry};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let input_dir = PathBuf::from(&args.json_dir);
    if !input_dir.exists() {
        error!("The specified json_dir does not exist: {}", args.json_dir);
        return ExitCode::FAILURE;
    }

    let output_dir = PathBuf::from(&args.output_dir);
    let registry = LabelRegistry::from_labels(args.label_list.iter().cloned());

    info!("Starting the conversion process...");

    match convert_directory(&input_dir, &output_dir, &registry) {
        Ok(stats) => {
            stats.print_summary();
            info!("Conversion process completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to convert dataset: {}", e);
            ExitCode::FAILURE
        }
    }
}
