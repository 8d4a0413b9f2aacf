mod branch;
mod piece;
mod sofa_spec;
mod topology;

#[doc(inline)]
pub use branch::{Branch, End, JunctionAnchors};
#[doc(inline)]
pub use piece::{Piece, PieceKind, Pieces, SplitFlags};
#[doc(inline)]
pub use sofa_spec::{Chaise, Side, Sides, SofaSpec};
#[doc(inline)]
pub use topology::{Family, Junction, LVariant, Topology, TopologyKind, UVariant};
