use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use log::{error, info};
use rayon::prelude::*;
use sofa_rs::entities::SofaSpec;
use sofa_rs::{Summary, build_layout};

use crate::config::CliConfig;
use crate::io;
use crate::io::colors::ColorResolution;
use crate::io::layout_to_svg::layout_to_svg;
use crate::io::output::{LayoutExport, SofaOutput};

/// Configures every sofa of `specs` in parallel and writes `<stem>.json` (and `.svg`)
/// per request, suffixed with the index for batches. Every request is attempted;
/// an error is returned if any of them failed.
pub fn run_batch(
    specs: &[SofaSpec],
    config: &CliConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<Vec<Summary>> {
    let colors = ColorResolution::resolve(&config.colors);
    let batch = specs.len() > 1;

    let results = specs
        .par_iter()
        .enumerate()
        .map(|(i, spec)| {
            let stem = match batch {
                true => format!("{input_stem}_{i}"),
                false => input_stem.to_string(),
            };
            process(spec, config, &colors, &stem, output_folder)
                .inspect_err(|e| error!("[BATCH] request {i} ({stem}) failed: {e:#}"))
        })
        .collect::<Vec<_>>();

    let n_failed = results.iter().filter(|r| r.is_err()).count();
    if n_failed > 0 {
        bail!("{n_failed} of {} requests failed", specs.len());
    }
    Ok(results.into_iter().flatten().collect())
}

fn process(
    spec: &SofaSpec,
    config: &CliConfig,
    colors: &ColorResolution,
    stem: &str,
    output_folder: &Path,
) -> Result<Summary> {
    let layout = build_layout(spec)?;
    info!("[BATCH] {stem}\n{}", layout.summary);

    let output = SofaOutput {
        request: spec.clone(),
        result: LayoutExport::new(&layout, config.export_anchors),
        colors: colors.clone(),
        config: config.clone(),
    };
    let json_path: PathBuf = output_folder.join(format!("{stem}.json"));
    io::write_json(&output, &json_path)?;

    if config.write_svg {
        let svg_path = output_folder.join(format!("{stem}.svg"));
        let svg = layout_to_svg(&layout, colors, config.svg_draw_options);
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(layout.summary)
}
