use anyhow::{Result, bail};
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::io::svg_util::{darken, lighten, parse_hex, to_hex};

/// Named base colours of the fabric catalogue
const PALETTE: [(&str, &str); 9] = [
    ("grey", "#9E9E9E"),
    ("gray", "#9E9E9E"),
    ("beige", "#D8C4A8"),
    ("taupe", "#8B7E74"),
    ("cream", "#F4F1E9"),
    ("white", "#FFFFFF"),
    ("black", "#111111"),
    ("sand", "#E6D8B8"),
    ("anthracite", "#4B4B4B"),
];

/// Shade modifiers, positive lightens and negative darkens.
/// Multi-word modifiers are listed before their suffixes.
const SHADES: [(&str, f64); 5] = [
    ("almost white", 0.75),
    ("very light", 0.40),
    ("very dark", -0.40),
    ("light", 0.22),
    ("dark", -0.22),
];

const FALLBACK_COLOR: &str = "grey";
const DEFAULT_SEAT: &str = "grey very light almost white";
const DEFAULT_CUSHIONS: &str = "taupe";
const DEFAULT_BOLSTERS: &str = "#E0D9C7";
const BACKREST_LIGHTENING: f64 = 0.20;

/// Colour requests for the pieces of a sofa. Each entry is either a hex code or a
/// palette name followed by any number of shade modifiers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorChoices {
    pub armrests: Option<String>,
    pub backrests: Option<String>,
    pub seat: Option<String>,
    pub cushions: Option<String>,
    pub bolsters: Option<String>,
}

/// A resolved colour: the hex code drawn and, if requested by name, the name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedColor {
    pub hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorResolution {
    pub armrests: ResolvedColor,
    pub backrests: ResolvedColor,
    pub seat: ResolvedColor,
    pub cushions: ResolvedColor,
    pub bolsters: ResolvedColor,
}

impl ColorResolution {
    /// Resolves every choice, derives the backrests from the armrests when absent.
    pub fn resolve(choices: &ColorChoices) -> Self {
        let armrests = resolve_or_fallback(choices.armrests.as_deref().unwrap_or(FALLBACK_COLOR));
        let backrests = match choices.backrests.as_deref() {
            Some(c) => resolve_or_fallback(c),
            None => ResolvedColor {
                hex: lighten(&armrests.hex, BACKREST_LIGHTENING).unwrap_or_else(|_| armrests.hex.clone()),
                name: None,
            },
        };
        let seat = resolve_or_fallback(choices.seat.as_deref().unwrap_or(DEFAULT_SEAT));
        let cushions = resolve_or_fallback(choices.cushions.as_deref().unwrap_or(DEFAULT_CUSHIONS));
        let bolsters = resolve_or_fallback(choices.bolsters.as_deref().unwrap_or(DEFAULT_BOLSTERS));

        ColorResolution {
            armrests,
            backrests,
            seat,
            cushions,
            bolsters,
        }
    }
}

impl Default for ColorResolution {
    fn default() -> Self {
        Self::resolve(&ColorChoices::default())
    }
}

fn resolve_or_fallback(choice: &str) -> ResolvedColor {
    resolve_color(choice).unwrap_or_else(|e| {
        warn!("[COLORS] {e}, falling back to {FALLBACK_COLOR}");
        ResolvedColor {
            hex: palette_hex(FALLBACK_COLOR).unwrap_or("#9E9E9E").to_string(),
            name: Some(FALLBACK_COLOR.to_string()),
        }
    })
}

fn palette_hex(name: &str) -> Option<&'static str> {
    PALETTE.iter().find(|(n, _)| *n == name).map(|(_, hex)| *hex)
}

/// Resolves `"#abc"`, `"#aabbcc"` or `"<base> [shade]*"`, e.g. `"grey very dark"`.
pub fn resolve_color(choice: &str) -> Result<ResolvedColor> {
    let choice = choice.trim();
    if choice.starts_with('#') {
        let hex = to_hex(parse_hex(choice)?);
        return Ok(ResolvedColor { hex, name: None });
    }

    let normalized = choice.to_lowercase().split_whitespace().join(" ");
    let (base, mut rest) = match normalized.split_once(' ') {
        Some((base, rest)) => (base, rest),
        None => (normalized.as_str(), ""),
    };
    let Some(base_hex) = palette_hex(base) else {
        bail!("unknown color: {choice}");
    };

    let mut hex = base_hex.to_string();
    while !rest.is_empty() {
        let Some((shade, amount)) = SHADES
            .iter()
            .find(|(shade, _)| rest == *shade || rest.starts_with(&format!("{shade} ")))
        else {
            bail!("unknown shade in color: {choice}");
        };
        hex = if *amount > 0.0 {
            lighten(&hex, *amount)?
        } else {
            darken(&hex, -*amount)?
        };
        rest = rest[shade.len()..].trim_start();
    }

    Ok(ResolvedColor {
        hex,
        name: Some(normalized),
    })
}
