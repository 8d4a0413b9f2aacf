//! Shape Point Builder: from a [`SofaSpec`] to the anchors of every seating branch.
//!
//! All topologies are described by at most two [`Junction`]s, one where the left branch meets the
//! bottom branch and one where the right branch does. A straight sofa has none, an L-shaped sofa
//! only the left one.

mod anchors;

#[doc(inline)]
pub use anchors::{Anchors, build_anchors};

use serde::Serialize;

use crate::entities::{Junction, LVariant, SofaSpec, Topology, TopologyKind, UVariant};

/// A topology with its layout resolved to concrete junctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arrangement {
    pub kind: TopologyKind,
    /// Layout name (`v1`..`v4`) for topologies that have several
    pub variant: Option<&'static str>,
    pub left: Option<Junction>,
    pub right: Option<Junction>,
}

impl Arrangement {
    pub fn straight() -> Self {
        Arrangement {
            kind: TopologyKind::Straight,
            variant: None,
            left: None,
            right: None,
        }
    }

    pub fn l(variant: LVariant) -> Self {
        let left = match variant {
            LVariant::V1 => Junction::SideThrough,
            LVariant::V2 => Junction::BottomThrough,
        };
        Arrangement {
            kind: TopologyKind::L,
            variant: Some(variant.name()),
            left: Some(left),
            right: None,
        }
    }

    pub fn l_corner() -> Self {
        Arrangement {
            kind: TopologyKind::LCorner,
            variant: None,
            left: Some(Junction::Corner),
            right: None,
        }
    }

    pub fn u(variant: UVariant) -> Self {
        use Junction::*;
        let (left, right) = match variant {
            UVariant::V1 => (BottomThrough, BottomThrough),
            UVariant::V2 => (SideThrough, SideThrough),
            UVariant::V3 => (BottomThrough, SideThrough),
            UVariant::V4 => (SideThrough, BottomThrough),
        };
        Arrangement {
            kind: TopologyKind::U,
            variant: Some(variant.name()),
            left: Some(left),
            right: Some(right),
        }
    }

    pub fn u_one_corner(variant: UVariant) -> Self {
        use Junction::*;
        let (left, right) = match variant {
            UVariant::V1 => (Corner, SideThrough),
            UVariant::V2 => (Corner, BottomThrough),
            UVariant::V3 => (SideThrough, Corner),
            UVariant::V4 => (BottomThrough, Corner),
        };
        Arrangement {
            kind: TopologyKind::UOneCorner,
            variant: Some(variant.name()),
            left: Some(left),
            right: Some(right),
        }
    }

    pub fn u_two_corners() -> Self {
        Arrangement {
            kind: TopologyKind::UTwoCorners,
            variant: None,
            left: Some(Junction::Corner),
            right: Some(Junction::Corner),
        }
    }

    /// Number of seating branches of the arrangement.
    pub fn n_branches(&self) -> usize {
        1 + self.left.is_some() as usize + self.right.is_some() as usize
    }

    pub fn n_corners(&self) -> usize {
        [self.left, self.right]
            .iter()
            .filter(|j| **j == Some(Junction::Corner))
            .count()
    }

    /// Candidate arrangements for `spec`, in preference order.
    /// An explicit layout yields a single candidate.
    pub fn candidates(spec: &SofaSpec) -> Vec<Arrangement> {
        match spec.topology {
            Topology::Straight => vec![Arrangement::straight()],
            Topology::LCorner => vec![Arrangement::l_corner()],
            Topology::UTwoCorners => vec![Arrangement::u_two_corners()],
            Topology::L { variant: Some(v) } => vec![Arrangement::l(v)],
            Topology::L { variant: None } => {
                let height = spec.left_height.unwrap_or(0.0);
                let order = match spec.width >= height {
                    true => [LVariant::V1, LVariant::V2],
                    false => [LVariant::V2, LVariant::V1],
                };
                order.into_iter().map(Arrangement::l).collect()
            }
            Topology::U { variant: Some(v) } => vec![Arrangement::u(v)],
            Topology::U { variant: None } => [UVariant::V2, UVariant::V1, UVariant::V3, UVariant::V4]
                .into_iter()
                .map(Arrangement::u)
                .collect(),
            Topology::UOneCorner { variant: Some(v) } => vec![Arrangement::u_one_corner(v)],
            Topology::UOneCorner { variant: None } => UVariant::ALL
                .into_iter()
                .map(Arrangement::u_one_corner)
                .collect(),
        }
    }

    /// Human readable name, e.g. `U with one corner (v2)`.
    pub fn label(&self) -> String {
        match self.variant {
            Some(v) => format!("{} ({v})", self.kind),
            None => self.kind.to_string(),
        }
    }
}
