use serde::{Deserialize, Serialize};

use crate::entities::Side;
use crate::geometry::primitives::{Polygon, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    Banquette,
    Backrest,
    Armrest,
    CornerBlock,
}

/// A structural piece of the sofa: its footprint and nominal dimensions `length` x `width`
/// (long and short side of the bounding box, whole centimeters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    /// Branch (or junction side, for corner blocks) the piece belongs to
    pub side: Side,
    pub polygon: Polygon,
    pub length: u32,
    pub width: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side, polygon: Polygon) -> Self {
        let (length, width) = polygon.nominal_dims();
        Piece {
            kind,
            side,
            polygon,
            length,
            width,
        }
    }

    pub fn from_rect(kind: PieceKind, side: Side, rect: Rect) -> Self {
        Piece::new(kind, side, Polygon::from(rect))
    }

    pub fn bbox(&self) -> Rect {
        self.polygon.bbox()
    }
}

/// All structural pieces of a layout, grouped by kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pieces {
    pub banquettes: Vec<Piece>,
    pub backrests: Vec<Piece>,
    pub armrests: Vec<Piece>,
    pub corner_blocks: Vec<Piece>,
}

impl Pieces {
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.banquettes
            .iter()
            .chain(self.backrests.iter())
            .chain(self.armrests.iter())
            .chain(self.corner_blocks.iter())
    }

    pub fn push(&mut self, piece: Piece) {
        match piece.kind {
            PieceKind::Banquette => self.banquettes.push(piece),
            PieceKind::Backrest => self.backrests.push(piece),
            PieceKind::Armrest => self.armrests.push(piece),
            PieceKind::CornerBlock => self.corner_blocks.push(piece),
        }
    }

    pub fn banquettes_of(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.banquettes.iter().filter(move |p| p.side == side)
    }
}

/// Records, per seating branch, whether its banquette had to be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SplitFlags {
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
}

impl SplitFlags {
    pub fn get(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Bottom => self.bottom,
            Side::Right => self.right,
        }
    }

    pub fn set(&mut self, side: Side, value: bool) {
        match side {
            Side::Left => self.left = value,
            Side::Bottom => self.bottom = value,
            Side::Right => self.right = value,
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.bottom || self.right
    }
}
