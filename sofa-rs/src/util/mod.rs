//! Fixed dimensions of the product line and debug checks.

pub mod assertions;

/// Thickness of a backrest panel (cm)
pub const BACKREST_THICKNESS: f64 = 10.0;
/// Thickness of an armrest panel (cm)
pub const ARMREST_THICKNESS: f64 = 15.0;
/// Depth of a back cushion, also the inset applied when a branch yields the corner (cm)
pub const CUSHION_DEPTH: u32 = 15;
/// A corner block is a square of side `depth + CORNER_EXTRA` (cm)
pub const CORNER_EXTRA: f64 = 20.0;
/// No banquette may have a long side above this length (cm)
pub const MAX_BANQUETTE_LENGTH: u32 = 250;
/// Length of a bolster across the seat (cm)
pub const BOLSTER_LENGTH: f64 = 70.0;
/// Thickness of a bolster, reserved along the branch (cm)
pub const BOLSTER_THICKNESS: u32 = 30;
/// Smallest cushion manufactured (cm)
pub const MIN_CUSHION_SIZE: u32 = 60;
/// Largest cushion manufactured (cm)
pub const MAX_CUSHION_SIZE: u32 = 100;
/// Maximum difference between the cushion sizes of two branches (cm)
pub const MAX_CUSHION_SPREAD: u32 = 5;
/// Half-width of the per-branch window around an anchor size (cm)
pub const ANCHOR_WINDOW: u32 = 2;
/// Candidate sizes of the `auto` policy (cm)
pub const AUTO_CUSHION_SIZES: [u32; 3] = [65, 80, 90];
