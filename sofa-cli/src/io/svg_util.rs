use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    /// Writes the nominal dimensions on every piece and the size on every cushion
    pub labels: bool,
    /// Draws the overall width and height of the sofa
    pub dimensions: bool,
    /// Marks the frame corner and the junctions
    pub anchors: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            labels: true,
            dimensions: true,
            anchors: false,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutThemes {
    #[default]
    Showroom,
    Blueprint,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::Showroom => SHOWROOM_THEME,
            SvgLayoutThemes::Blueprint => BLUEPRINT_THEME,
        }
    }
}

/// Drawing style independent of the piece colours
#[derive(Copy, Clone, PartialEq, Debug, Serialize)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub background: &'static str,
    pub contour: &'static str,
    pub text: &'static str,
    pub font_size: f64,
}

pub static SHOWROOM_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    background: "#FFFFFF",
    contour: "#000000",
    text: "#000000",
    font_size: 7.0,
};

pub static BLUEPRINT_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 1.5,
    background: "#1F3B73",
    contour: "#FFFFFF",
    text: "#FFFFFF",
    font_size: 6.0,
};

pub fn parse_hex(color: &str) -> Result<(u8, u8, u8)> {
    let hex = color.trim().trim_start_matches('#');
    let hex = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        _ => hex.to_string(),
    };
    ensure!(
        hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        "invalid hex color: {color}"
    );
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

pub fn to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Moves `color` toward white by `fraction` (0: unchanged, 1: white).
pub fn lighten(color: &str, fraction: f64) -> Result<String> {
    let (r, g, b) = parse_hex(color)?;
    let f = |c: u8| (c as f64 + (255.0 - c as f64) * fraction).round().clamp(0.0, 255.0) as u8;
    Ok(to_hex((f(r), f(g), f(b))))
}

/// Moves `color` toward black by `fraction` (0: unchanged, 1: black).
pub fn darken(color: &str, fraction: f64) -> Result<String> {
    let (r, g, b) = parse_hex(color)?;
    let f = |c: u8| (c as f64 * (1.0 - fraction)).round().clamp(0.0, 255.0) as u8;
    Ok(to_hex((f(r), f(g), f(b))))
}
