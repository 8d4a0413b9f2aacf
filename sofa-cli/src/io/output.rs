use serde::Serialize;
use sofa_rs::cushions::CushionPlan;
use sofa_rs::entities::{Pieces, SofaSpec, SplitFlags};
use sofa_rs::topology::Anchors;
use sofa_rs::{Layout, Summary};

use crate::config::CliConfig;
use crate::io::colors::ColorResolution;

/// Everything handed to the rendering and pricing collaborators for one request.
#[derive(Serialize, Clone)]
pub struct SofaOutput {
    pub request: SofaSpec,
    #[serde(flatten)]
    pub result: LayoutExport,
    pub colors: ColorResolution,
    pub config: CliConfig,
}

#[derive(Serialize, Clone)]
pub struct LayoutExport {
    pub layout: String,
    pub pieces: Pieces,
    pub split_flags: SplitFlags,
    pub cushions: CushionPlan,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchors: Option<Anchors>,
}

impl LayoutExport {
    pub fn new(layout: &Layout, with_anchors: bool) -> Self {
        LayoutExport {
            layout: layout.arrangement.label(),
            pieces: layout.pieces.clone(),
            split_flags: layout.split_flags,
            cushions: layout.cushions.clone(),
            summary: layout.summary.clone(),
            anchors: with_anchors.then(|| layout.anchors.clone()),
        }
    }
}
