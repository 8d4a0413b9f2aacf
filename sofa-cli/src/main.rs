use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use sofa_cli::batch::run_batch;
use sofa_cli::config::CliConfig;
use sofa_cli::io;
use sofa_cli::io::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CliConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .context(format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed CliConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_string();

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).context(format!(
            "could not create output folder: {}",
            args.output_folder.display()
        ))?;
    }

    let specs = io::read_specs(&args.input_file)?;
    info!("[MAIN] {} sofa request(s) read from {}", specs.len(), args.input_file.display());

    let summaries = run_batch(&specs, &config, &input_stem, &args.output_folder)?;
    info!("[MAIN] {} layout(s) written", summaries.len());

    Ok(())
}
