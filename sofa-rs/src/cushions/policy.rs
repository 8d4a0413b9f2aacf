use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::util::{AUTO_CUSHION_SIZES, MAX_CUSHION_SIZE, MIN_CUSHION_SIZE};

/// Size range a [`CushionPolicy::Valise`] may pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeClass {
    /// Any size in [60, 100]
    #[default]
    Free,
    /// "p": [60, 74]
    Small,
    /// "g": [76, 100]
    Large,
}

impl SizeClass {
    pub fn interval(&self) -> (u32, u32) {
        match self {
            SizeClass::Free => (MIN_CUSHION_SIZE, MAX_CUSHION_SIZE),
            SizeClass::Small => (60, 74),
            SizeClass::Large => (76, 100),
        }
    }
}

/// How back cushion sizes are chosen.
///
/// Textual form: `auto`, an integer (fixed size), `valise`, `p`, `g`, `s`, or colon-joined options
/// such as `p:s`, `valise:p` or `std:g`. The `valise` and `std` labels carry no meaning of their
/// own, and when several classes are given the last one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawPolicy", into = "String")]
pub enum CushionPolicy {
    /// One size for all branches, taken from {65, 80, 90}
    #[default]
    Auto,
    /// The given size on every branch
    Fixed(u32),
    /// One size per branch within the class interval, or a single size if `same`
    Valise { class: SizeClass, same: bool },
}

impl CushionPolicy {
    /// Closed interval of allowed sizes.
    pub fn interval(&self) -> (u32, u32) {
        match self {
            CushionPolicy::Auto => (AUTO_CUSHION_SIZES[0], AUTO_CUSHION_SIZES[2]),
            CushionPolicy::Fixed(size) => (*size, *size),
            CushionPolicy::Valise { class, .. } => class.interval(),
        }
    }

    /// Every size the policy may choose, ascending.
    pub fn candidate_sizes(&self) -> Vec<u32> {
        match self {
            CushionPolicy::Auto => AUTO_CUSHION_SIZES.to_vec(),
            _ => {
                let (lo, hi) = self.interval();
                (lo..=hi).collect()
            }
        }
    }

    /// Whether all branches must share a single size.
    pub fn is_uniform(&self) -> bool {
        match self {
            CushionPolicy::Auto | CushionPolicy::Fixed(_) => true,
            CushionPolicy::Valise { same, .. } => *same,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            CushionPolicy::Fixed(size) if !(MIN_CUSHION_SIZE..=MAX_CUSHION_SIZE).contains(size) => {
                Err(ConfigError::CushionSizeOutOfRange {
                    size: *size,
                    lo: MIN_CUSHION_SIZE,
                    hi: MAX_CUSHION_SIZE,
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for CushionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let unknown = || ConfigError::UnknownCushionPolicy(s.clone());
        if s == "auto" {
            return Ok(CushionPolicy::Auto);
        }
        if let Ok(size) = s.parse::<u32>() {
            return Ok(CushionPolicy::Fixed(size));
        }

        let mut class = SizeClass::Free;
        let mut same = false;
        for option in s.split(':').map(str::trim) {
            match option {
                "valise" | "std" => {}
                "p" => class = SizeClass::Small,
                "g" => class = SizeClass::Large,
                "s" => same = true,
                _ => return Err(unknown()),
            }
        }
        Ok(CushionPolicy::Valise { class, same })
    }
}

impl Display for CushionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CushionPolicy::Auto => write!(f, "auto"),
            CushionPolicy::Fixed(size) => write!(f, "{size}"),
            CushionPolicy::Valise { class, same } => {
                let class = match class {
                    SizeClass::Free => None,
                    SizeClass::Small => Some("p"),
                    SizeClass::Large => Some("g"),
                };
                match (class, same) {
                    (None, false) => write!(f, "valise"),
                    (None, true) => write!(f, "s"),
                    (Some(c), false) => write!(f, "{c}"),
                    (Some(c), true) => write!(f, "{c}:s"),
                }
            }
        }
    }
}

/// Accepted serialized forms: a number or a policy string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPolicy {
    Size(u32),
    Text(String),
}

impl TryFrom<RawPolicy> for CushionPolicy {
    type Error = ConfigError;

    fn try_from(raw: RawPolicy) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawPolicy::Size(size) => Ok(CushionPolicy::Fixed(size)),
            RawPolicy::Text(text) => text.parse(),
        }
    }
}

impl From<CushionPolicy> for String {
    fn from(policy: CushionPolicy) -> Self {
        policy.to_string()
    }
}
