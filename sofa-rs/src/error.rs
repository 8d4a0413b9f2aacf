use thiserror::Error;

use crate::entities::{Side, TopologyKind};

/// Result type of the layout pipeline
pub type Result<T> = std::result::Result<T, SofaError>;

/// Every failure of the pipeline is one of two kinds: a configuration the caller can fix,
/// or a broken internal invariant (a defect).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SofaError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

impl SofaError {
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, SofaError::InvalidConfiguration(_))
    }

    /// The configuration error, if this is one.
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            SofaError::InvalidConfiguration(e) => Some(e),
            SofaError::InternalInvariantViolation(_) => None,
        }
    }
}

/// User-correctable configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("a {topology} sofa requires the {name} dimension")]
    MissingDimension {
        name: &'static str,
        topology: TopologyKind,
    },

    #[error("a {topology} sofa has no {feature} on the {side} side")]
    SideNotAvailable {
        feature: &'static str,
        side: Side,
        topology: TopologyKind,
    },

    #[error("a chaise on the {side} side conflicts with the armrest on that side")]
    ChaiseArmrestConflict { side: Side },

    #[error("a chaise on the {side} side requires a backrest on that side")]
    ChaiseWithoutBackrest { side: Side },

    #[error("the {side} branch leaves no room for a seat ({length} cm)")]
    BranchTooShort { side: Side, length: f64 },

    #[error("banquette of {length} cm still exceeds the {max} cm limit after splitting")]
    OversizedBanquette { length: u32, max: u32 },

    #[error("cushion size {size} cm is outside the allowed range [{lo}, {hi}]")]
    CushionSizeOutOfRange { size: u32, lo: u32, hi: u32 },

    #[error("no cushion size vector in [{lo}, {hi}] satisfies the policy")]
    InfeasibleCushionPolicy { lo: u32, hi: u32 },

    #[error("unrecognized cushion policy: {0:?}")]
    UnknownCushionPolicy(String),
}

/// Returns early with an [`SofaError::InternalInvariantViolation`] if the condition does not hold.
#[macro_export]
macro_rules! ensure_invariant {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::SofaError::InternalInvariantViolation(format!($($arg)+)));
        }
    };
}
