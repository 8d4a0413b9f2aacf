use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};
use sofa_rs::entities::SofaSpec;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod colors;
pub mod layout_to_svg;
pub mod output;
pub mod svg_export;
pub mod svg_util;

/// An input file holds either a single request or a batch.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpecFile {
    Batch(Vec<SofaSpec>),
    Single(Box<SofaSpec>),
}

pub fn read_specs(path: &Path) -> Result<Vec<SofaSpec>> {
    let file = File::open(path).context(format!("could not open input file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let specs: SpecFile = serde_json::from_reader(reader)
        .context(format!("could not parse input file: {}", path.display()))?;
    Ok(match specs {
        SpecFile::Batch(specs) => specs,
        SpecFile::Single(spec) => vec![*spec],
    })
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)?;
    info!(
        "[IO] layout written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or_default()
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)?;
    info!(
        "[IO] svg written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or_default()
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
