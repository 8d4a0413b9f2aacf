//! Piece Assembler & Splitter: closed polygons for every structural piece, and the choice
//! between the layouts of a topology.

mod assembler;
mod selector;
mod splitter;

pub use assembler::{Assembly, assemble};
pub use selector::{Candidate, select_layout};
pub use splitter::{Split, split_banquette, split_mid};
