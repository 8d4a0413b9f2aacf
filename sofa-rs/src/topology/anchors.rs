use log::debug;
use serde::Serialize;

use crate::entities::{Branch, End, Family, Junction, JunctionAnchors, Side, SofaSpec};
use crate::error::{ConfigError, Result};
use crate::geometry::Axis;
use crate::geometry::primitives::{Point, Polygon, Rect, Span};
use crate::topology::Arrangement;
use crate::util::{
    ARMREST_THICKNESS, BACKREST_THICKNESS, BOLSTER_LENGTH, CORNER_EXTRA, CUSHION_DEPTH,
};

/// Anchors of one configuration: frame references, seating branches and junctions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anchors {
    pub arrangement: Arrangement,
    /// Inner corner of the frame, offset from the origin by the backrests
    pub frame_corner: Point,
    /// Inner right frame line (U family), `width` otherwise
    pub frame_right: f64,
    /// Side of a corner block
    pub corner_side: f64,
    pub canvas_height: f64,
    /// Bounding box of the whole sofa
    pub footprint: Rect,
    /// Seating branches, in left, bottom, right order
    pub branches: Vec<Branch>,
    pub junctions: Vec<JunctionAnchors>,
}

impl Anchors {
    pub fn branch(&self, side: Side) -> Option<&Branch> {
        self.branches.iter().find(|b| b.side == side)
    }

    pub fn junction(&self, side: Side) -> Option<&JunctionAnchors> {
        self.junctions.iter().find(|j| j.side == side)
    }
}

/// Derives all anchors of `spec` laid out as `arrangement`.
/// `spec` is assumed to be validated.
pub fn build_anchors(spec: &SofaSpec, arrangement: &Arrangement) -> Result<Anchors> {
    let frame = Frame::new(spec);
    let family = arrangement.kind.family();

    let (branches, junctions, footprint) = match family {
        Family::Straight => {
            let seat_height = frame.corner.y() + spec.depth;
            let footprint = Rect::try_new(0.0, 0.0, spec.width, seat_height)?;
            (vec![straight_branch(spec, &frame)?], vec![], footprint)
        }
        Family::L | Family::U => {
            let left_height = spec.left_height.unwrap_or_default();
            let right_height = spec.right_height.unwrap_or_default();
            let mut branches = vec![];
            let mut junctions = vec![];
            if let Some(j) = arrangement.left {
                branches.push(side_branch(spec, &frame, Side::Left, j, left_height)?);
                junctions.push(frame.junction(Side::Left, j, spec.depth)?);
            }
            branches.push(bottom_branch(spec, &frame, arrangement)?);
            if let Some(j) = arrangement.right {
                branches.push(side_branch(spec, &frame, Side::Right, j, right_height)?);
                junctions.push(frame.junction(Side::Right, j, spec.depth)?);
            }
            let top = match family {
                Family::U => f64::max(left_height, right_height),
                _ => left_height,
            };
            (branches, junctions, Rect::try_new(0.0, 0.0, spec.width, top)?)
        }
    };

    debug!(
        "[ANCHORS] {}: frame corner {:?}, right frame line {}, {} branches",
        arrangement.label(),
        frame.corner,
        frame.right,
        branches.len()
    );

    Ok(Anchors {
        arrangement: *arrangement,
        frame_corner: frame.corner,
        frame_right: frame.right,
        corner_side: frame.corner_side,
        canvas_height: footprint.y_max,
        footprint,
        branches,
        junctions,
    })
}

/// Reference lines shared by all branches.
struct Frame {
    corner: Point,
    right: f64,
    width: f64,
    depth: f64,
    corner_side: f64,
}

impl Frame {
    fn new(spec: &SofaSpec) -> Self {
        let offset = |has_backrest: bool| if has_backrest { BACKREST_THICKNESS } else { 0.0 };
        let right = match spec.family() {
            Family::U => spec.width - offset(spec.backrests.right),
            _ => spec.width,
        };
        Frame {
            corner: Point(offset(spec.backrests.left), offset(spec.backrests.bottom)),
            right,
            width: spec.width,
            depth: spec.depth,
            corner_side: spec.depth + CORNER_EXTRA,
        }
    }

    /// Where the seat of a side branch starts along y.
    fn side_seat_start(&self, junction: Junction) -> f64 {
        self.corner.y()
            + match junction {
                Junction::Corner => self.corner_side,
                Junction::SideThrough => 0.0,
                Junction::BottomThrough => self.depth,
            }
    }

    /// Distance between the frame line and the bottom seat end at a junction.
    fn bottom_seat_inset(&self, junction: Junction) -> f64 {
        match junction {
            Junction::Corner => self.corner_side,
            Junction::SideThrough => self.depth,
            Junction::BottomThrough => 0.0,
        }
    }

    fn bolster_span(&self) -> f64 {
        f64::min(BOLSTER_LENGTH, self.depth)
    }

    fn junction(&self, side: Side, kind: Junction, depth: f64) -> Result<JunctionAnchors> {
        let (a, d) = (self.corner_side, depth);
        let Point(x0, y0) = self.corner;
        let (frame_corner, block) = match side {
            Side::Left => {
                let block = vec![
                    Point(x0, y0),
                    Point(x0 + a, y0),
                    Point(x0 + a, y0 + d),
                    Point(x0 + d, y0 + a),
                    Point(x0, y0 + a),
                ];
                (Point(x0, y0), block)
            }
            _ => {
                let xr = self.right;
                let block = vec![
                    Point(xr - a, y0),
                    Point(xr, y0),
                    Point(xr, y0 + a),
                    Point(xr - d, y0 + a),
                    Point(xr - a, y0 + d),
                ];
                (Point(xr, y0), block)
            }
        };
        let block = match kind {
            Junction::Corner => Some(Polygon::try_new(block)?),
            _ => None,
        };
        Ok(JunctionAnchors {
            side,
            kind,
            frame_corner,
            block,
        })
    }
}

/// Pulls the chaise end of `run` inward, never past the seat start `limit`.
fn apply_chaise(spec: &SofaSpec, side: Side, end: End, run: Span, limit: Span) -> Span {
    match spec.chaise {
        Some(chaise) if chaise.side == side => match end {
            End::High => Span::new(run.lo, f64::max(limit.lo, run.hi - chaise.length)),
            End::Low => Span::new(f64::min(limit.hi, run.lo + chaise.length), run.hi),
        },
        _ => run,
    }
}

fn seat_or_too_short(side: Side, axis: Axis, along: Span, across: Span) -> Result<Rect> {
    match along.is_empty() {
        true => Err(ConfigError::BranchTooShort {
            side,
            length: along.hi - along.lo,
        }
        .into()),
        false => Rect::from_spans(axis, along, across),
    }
}

fn rect_if_not_empty(axis: Axis, along: Span, across: Span) -> Result<Option<Rect>> {
    match along.is_empty() || across.is_empty() {
        true => Ok(None),
        false => Rect::from_spans(axis, along, across).map(Some),
    }
}

fn cushion_strip(from: f64, toward_positive: bool) -> Span {
    let depth = CUSHION_DEPTH as f64;
    match toward_positive {
        true => Span::new(from, from + depth),
        false => Span::new(from - depth, from),
    }
}

fn straight_branch(spec: &SofaSpec, frame: &Frame) -> Result<Branch> {
    let y0 = frame.corner.y();
    let arm = |has: bool| if has { ARMREST_THICKNESS } else { 0.0 };
    let seat_span = Span::new(arm(spec.armrests.left), spec.width - arm(spec.armrests.right));
    let depth_span = Span::new(y0, y0 + spec.depth);
    let seat = seat_or_too_short(Side::Bottom, Axis::Horizontal, seat_span, depth_span)?;

    let run = apply_chaise(spec, Side::Left, End::Low, seat_span, seat_span);
    let run = apply_chaise(spec, Side::Right, End::High, run, seat_span);

    let backrest = match spec.backrests.bottom {
        true => rect_if_not_empty(Axis::Horizontal, run, Span::new(0.0, y0))?,
        false => None,
    };

    let full_height = Span::new(0.0, y0 + spec.depth);
    let mut armrests = vec![];
    if spec.armrests.left {
        armrests.push(Rect::try_new(0.0, 0.0, seat_span.lo, full_height.hi)?);
    }
    if spec.armrests.right {
        armrests.push(Rect::try_new(seat_span.hi, 0.0, spec.width, full_height.hi)?);
    }

    //bolsters are centered in the seat depth
    let bolster_lo = y0 + f64::max(0.0, (spec.depth - BOLSTER_LENGTH) / 2.0);
    Ok(Branch {
        side: Side::Bottom,
        axis: Axis::Horizontal,
        seat,
        run,
        cushion_strip: cushion_strip(y0, true),
        bolster_strip: Span::new(bolster_lo, bolster_lo + frame.bolster_span()),
        backrest,
        backrest_cuts: vec![],
        armrests,
        free_ends: vec![(End::Low, Side::Left), (End::High, Side::Right)],
    })
}

fn side_branch(
    spec: &SofaSpec,
    frame: &Frame,
    side: Side,
    junction: Junction,
    height: f64,
) -> Result<Branch> {
    let y0 = frame.corner.y();
    let d = spec.depth;
    let has_armrest = spec.armrests.get(side);
    let top = height - if has_armrest { ARMREST_THICKNESS } else { 0.0 };

    let seat_span = Span::new(frame.side_seat_start(junction), top);
    let (depth_span, outer_span, cushion_strip, bolster_strip, arm_span) = match side {
        Side::Left => {
            let x0 = frame.corner.x();
            (
                Span::new(x0, x0 + d),
                Span::new(0.0, x0),
                self::cushion_strip(x0, true),
                Span::new(x0, x0 + frame.bolster_span()),
                Span::new(0.0, x0 + d),
            )
        }
        _ => {
            let xr = frame.right;
            (
                Span::new(xr - d, xr),
                Span::new(xr, frame.width),
                self::cushion_strip(xr, false),
                Span::new(xr - frame.bolster_span(), xr),
                Span::new(xr - d, frame.width),
            )
        }
    };
    let seat = seat_or_too_short(side, Axis::Vertical, seat_span, depth_span)?;
    let run = apply_chaise(spec, side, End::High, Span::new(y0, top), seat_span);

    let backrest = match spec.backrests.get(side) {
        true => rect_if_not_empty(Axis::Vertical, Span::new(0.0, run.hi), outer_span)?,
        false => None,
    };
    let backrest_cuts = match seat_span.lo > y0 {
        true => vec![seat_span.lo],
        false => vec![],
    };
    let armrests = match has_armrest {
        true => vec![Rect::from_spans(
            Axis::Vertical,
            Span::new(top, height),
            arm_span,
        )?],
        false => vec![],
    };

    Ok(Branch {
        side,
        axis: Axis::Vertical,
        seat,
        run,
        cushion_strip,
        bolster_strip,
        backrest,
        backrest_cuts,
        armrests,
        free_ends: vec![(End::High, side)],
    })
}

fn bottom_branch(spec: &SofaSpec, frame: &Frame, arrangement: &Arrangement) -> Result<Branch> {
    let Point(x0, y0) = frame.corner;
    let d = spec.depth;
    let left = arrangement.left.unwrap_or(Junction::BottomThrough);
    let seat_lo = x0 + frame.bottom_seat_inset(left);

    let (seat_hi, run_hi, free_ends) = match arrangement.right {
        Some(right) => (frame.right - frame.bottom_seat_inset(right), frame.right, vec![]),
        None => {
            let stop = frame.width
                - match spec.armrests.bottom {
                    true => ARMREST_THICKNESS,
                    false => 0.0,
                };
            (stop, stop, vec![(End::High, Side::Bottom)])
        }
    };
    let seat_span = Span::new(seat_lo, seat_hi);
    let seat = seat_or_too_short(Side::Bottom, Axis::Horizontal, seat_span, Span::new(y0, y0 + d))?;
    let run = apply_chaise(spec, Side::Bottom, End::High, Span::new(x0, run_hi), seat_span);

    let backrest = match spec.backrests.bottom {
        true => rect_if_not_empty(Axis::Horizontal, Span::new(x0, run.hi), Span::new(0.0, y0))?,
        false => None,
    };
    let mut backrest_cuts = vec![];
    if seat_span.lo > x0 {
        backrest_cuts.push(seat_span.lo);
    }
    if arrangement.right.is_some() && seat_span.hi < frame.right {
        backrest_cuts.push(seat_span.hi);
    }
    let armrests = match arrangement.right.is_none() && spec.armrests.bottom {
        true => vec![Rect::try_new(seat_hi, 0.0, frame.width, y0 + d)?],
        false => vec![],
    };

    Ok(Branch {
        side: Side::Bottom,
        axis: Axis::Horizontal,
        seat,
        run,
        cushion_strip: cushion_strip(y0, true),
        bolster_strip: Span::new(y0, y0 + frame.bolster_span()),
        backrest,
        backrest_cuts,
        armrests,
        free_ends,
    })
}
