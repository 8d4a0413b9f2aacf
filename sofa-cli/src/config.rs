use serde::{Deserialize, Serialize};

use crate::io::colors::ColorChoices;
use crate::io::svg_util::SvgDrawOptions;

/// Configuration of the command-line front-end
/// Missing fields take their value from [`CliConfig::default`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Write an SVG drawing next to every JSON output
    pub write_svg: bool,
    /// Include the anchors (frame corner, branches, junctions) in the JSON output
    pub export_anchors: bool,
    /// Colours of the pieces, by name (e.g. "grey dark") or hex code
    pub colors: ColorChoices,
    /// Optional SVG drawing options
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            write_svg: true,
            export_anchors: false,
            colors: ColorChoices::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
