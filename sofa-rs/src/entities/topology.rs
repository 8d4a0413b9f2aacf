use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::entities::{Side, Sides};

/// Layout of an L-shaped sofa without corner block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LVariant {
    /// The left branch runs down to the frame corner
    V1,
    /// The bottom branch runs through to the left frame line
    V2,
}

/// Layout of a U-shaped sofa, with or without one corner block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UVariant {
    V1,
    V2,
    V3,
    V4,
}

impl LVariant {
    pub const ALL: [LVariant; 2] = [LVariant::V1, LVariant::V2];

    pub fn name(&self) -> &'static str {
        match self {
            LVariant::V1 => "v1",
            LVariant::V2 => "v2",
        }
    }
}

impl UVariant {
    pub const ALL: [UVariant; 4] = [UVariant::V1, UVariant::V2, UVariant::V3, UVariant::V4];

    pub fn name(&self) -> &'static str {
        match self {
            UVariant::V1 => "v1",
            UVariant::V2 => "v2",
            UVariant::V3 => "v3",
            UVariant::V4 => "v4",
        }
    }
}

/// Shape of the sofa. A `None` variant lets the selector pick the layout producing the fewest pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Topology {
    Straight,
    L {
        #[serde(default)]
        variant: Option<LVariant>,
    },
    LCorner,
    U {
        #[serde(default)]
        variant: Option<UVariant>,
    },
    UOneCorner {
        #[serde(default)]
        variant: Option<UVariant>,
    },
    UTwoCorners,
}

impl Topology {
    pub fn kind(&self) -> TopologyKind {
        match self {
            Topology::Straight => TopologyKind::Straight,
            Topology::L { .. } => TopologyKind::L,
            Topology::LCorner => TopologyKind::LCorner,
            Topology::U { .. } => TopologyKind::U,
            Topology::UOneCorner { .. } => TopologyKind::UOneCorner,
            Topology::UTwoCorners => TopologyKind::UTwoCorners,
        }
    }
}

/// [`Topology`] without layout variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    Straight,
    L,
    LCorner,
    U,
    UOneCorner,
    UTwoCorners,
}

impl TopologyKind {
    pub fn family(&self) -> Family {
        match self {
            TopologyKind::Straight => Family::Straight,
            TopologyKind::L | TopologyKind::LCorner => Family::L,
            TopologyKind::U | TopologyKind::UOneCorner | TopologyKind::UTwoCorners => Family::U,
        }
    }
}

impl Display for TopologyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TopologyKind::Straight => "straight",
            TopologyKind::L => "L",
            TopologyKind::LCorner => "L with corner",
            TopologyKind::U => "U",
            TopologyKind::UOneCorner => "U with one corner",
            TopologyKind::UTwoCorners => "U with two corners",
        };
        write!(f, "{s}")
    }
}

/// Groups topologies sharing the same seating branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// A single bottom branch
    Straight,
    /// Left and bottom branches
    L,
    /// Left, bottom and right branches
    U,
}

impl Family {
    /// Sides that carry a seating branch, and therefore may carry a backrest.
    pub fn backrest_sides(&self) -> Sides {
        match self {
            Family::Straight => Sides::of(&[Side::Bottom]),
            Family::L => Sides::of(&[Side::Left, Side::Bottom]),
            Family::U => Sides::ALL,
        }
    }

    /// Sides with a free branch end: armrests, chaises and bolsters go there.
    pub fn end_sides(&self) -> Sides {
        match self {
            Family::Straight | Family::U => Sides::of(&[Side::Left, Side::Right]),
            Family::L => Sides::of(&[Side::Left, Side::Bottom]),
        }
    }
}

/// How a side branch meets the bottom branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Junction {
    /// Through a square corner block of side `depth + 20`
    Corner,
    /// The side branch runs down to the frame corner, the bottom starts after it
    SideThrough,
    /// The bottom branch runs to the frame line, the side branch starts above it
    BottomThrough,
}
