//! Configuration of modular sofas: the geometry of every structural piece and the tiling of
//! back cushions and bolsters over the seating branches.
//!
//! The entry point is [`build_layout`].

/// Piece assembly, banquette splitting and layout selection
pub mod assembly;

/// Cushion sizing policy, planner and bolsters
pub mod cushions;

/// Entities describing a sofa and its pieces
pub mod entities;

/// Error types of the pipeline
pub mod error;

/// Geometric primitives
pub mod geometry;

/// Anchors of every topology
pub mod topology;

/// Product constants and debug checks
pub mod util;

mod layout;
mod report;

#[doc(inline)]
pub use error::{ConfigError, Result, SofaError};
#[doc(inline)]
pub use layout::{Layout, build_layout};
#[doc(inline)]
pub use report::{BanquetteDims, BranchSummary, Summary};
