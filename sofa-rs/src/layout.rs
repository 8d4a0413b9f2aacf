use log::info;
use serde::Serialize;

use crate::assembly::{Candidate, select_layout};
use crate::cushions::{CushionPlan, plan_cushions};
use crate::entities::{Pieces, SofaSpec, SplitFlags};
use crate::error::Result;
use crate::report::Summary;
use crate::topology::{Anchors, Arrangement};

/// Complete result of configuring one sofa.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub arrangement: Arrangement,
    pub anchors: Anchors,
    pub pieces: Pieces,
    pub split_flags: SplitFlags,
    pub cushions: CushionPlan,
    pub summary: Summary,
}

/// Runs the whole pipeline on `spec`: validation, anchors (choosing the layout when the
/// topology leaves it open), pieces and splits, bolsters, cushion plan and summary.
pub fn build_layout(spec: &SofaSpec) -> Result<Layout> {
    spec.validate()?;

    let Candidate {
        arrangement,
        anchors,
        assembly,
    } = select_layout(spec)?;
    let cushions = plan_cushions(spec, &anchors)?;
    let summary = Summary::new(&anchors, &assembly, &cushions, spec.depth);

    info!(
        "[LAYOUT] {}: {} banquettes, {} cushions ({})",
        summary.layout,
        summary.n_banquettes(),
        summary.total_cushions,
        summary.cushion_policy
    );

    Ok(Layout {
        arrangement,
        anchors,
        pieces: assembly.pieces,
        split_flags: assembly.split_flags,
        cushions,
        summary,
    })
}
