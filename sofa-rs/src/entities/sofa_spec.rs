use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::cushions::CushionPolicy;
use crate::entities::{Family, Topology};
use crate::error::{ConfigError, Result};

/// One of the three sides of a sofa, seen from the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Bottom,
    Right,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::Left, Side::Bottom, Side::Right];
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Side::Left => "left",
            Side::Bottom => "bottom",
            Side::Right => "right",
        };
        write!(f, "{s}")
    }
}

/// A boolean flag per [`Side`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sides {
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
}

impl Sides {
    pub const NONE: Sides = Sides {
        left: false,
        bottom: false,
        right: false,
    };

    pub const ALL: Sides = Sides {
        left: true,
        bottom: true,
        right: true,
    };

    pub fn of(sides: &[Side]) -> Self {
        sides.iter().fold(Sides::NONE, |acc, &s| acc.with(s, true))
    }

    pub fn get(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Bottom => self.bottom,
            Side::Right => self.right,
        }
    }

    pub fn with(mut self, side: Side, value: bool) -> Self {
        match side {
            Side::Left => self.left = value,
            Side::Bottom => self.bottom = value,
            Side::Right => self.right = value,
        }
        self
    }

    /// Sides whose flag is set, in left, bottom, right order.
    pub fn iter(&self) -> impl Iterator<Item = Side> + '_ {
        Side::ALL.into_iter().filter(|s| self.get(*s))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

/// Extended seat ("méridienne") on one side: the backrest and cushions stop `length` cm
/// before the end of that branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chaise {
    pub side: Side,
    pub length: f64,
}

/// Immutable description of a sofa to configure.
///
/// Dimensions are in centimeters. `width` is the overall width of the bottom (or only) branch,
/// `left_height` and `right_height` the overall heights of the side branches, `depth` the seat
/// depth shared by all branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SofaSpec {
    pub topology: Topology,
    pub width: f64,
    #[serde(default)]
    pub left_height: Option<f64>,
    #[serde(default)]
    pub right_height: Option<f64>,
    #[serde(default = "default_depth")]
    pub depth: f64,
    #[serde(default)]
    pub backrests: Sides,
    #[serde(default)]
    pub armrests: Sides,
    #[serde(default)]
    pub chaise: Option<Chaise>,
    #[serde(default)]
    pub bolsters: Sides,
    #[serde(default)]
    pub cushions: CushionPolicy,
}

fn default_depth() -> f64 {
    SofaSpec::DEFAULT_DEPTH
}

impl SofaSpec {
    pub const DEFAULT_DEPTH: f64 = 70.0;

    pub fn straight(width: f64, depth: f64) -> Self {
        SofaSpec {
            topology: Topology::Straight,
            width,
            left_height: None,
            right_height: None,
            depth,
            backrests: Sides::NONE,
            armrests: Sides::NONE,
            chaise: None,
            bolsters: Sides::NONE,
            cushions: CushionPolicy::Auto,
        }
    }

    /// An L-family sofa (`Topology::L` or `Topology::LCorner`).
    pub fn l_shaped(topology: Topology, width: f64, left_height: f64, depth: f64) -> Self {
        SofaSpec {
            topology,
            left_height: Some(left_height),
            ..SofaSpec::straight(width, depth)
        }
    }

    /// A U-family sofa.
    pub fn u_shaped(
        topology: Topology,
        width: f64,
        left_height: f64,
        right_height: f64,
        depth: f64,
    ) -> Self {
        SofaSpec {
            topology,
            left_height: Some(left_height),
            right_height: Some(right_height),
            ..SofaSpec::straight(width, depth)
        }
    }

    pub fn with_backrests(mut self, backrests: Sides) -> Self {
        self.backrests = backrests;
        self
    }

    pub fn with_armrests(mut self, armrests: Sides) -> Self {
        self.armrests = armrests;
        self
    }

    pub fn with_chaise(mut self, side: Side, length: f64) -> Self {
        self.chaise = Some(Chaise { side, length });
        self
    }

    pub fn with_bolsters(mut self, bolsters: Sides) -> Self {
        self.bolsters = bolsters;
        self
    }

    pub fn with_cushions(mut self, cushions: CushionPolicy) -> Self {
        self.cushions = cushions;
        self
    }

    pub fn family(&self) -> Family {
        self.topology.kind().family()
    }

    /// Checks everything that can be rejected before any geometry is computed.
    pub fn validate(&self) -> Result<()> {
        let kind = self.topology.kind();
        let family = kind.family();

        check_dimension("width", self.width)?;
        check_dimension("depth", self.depth)?;
        if family != Family::Straight {
            let h = self.left_height.ok_or(ConfigError::MissingDimension {
                name: "left_height",
                topology: kind,
            })?;
            check_dimension("left_height", h)?;
        }
        if family == Family::U {
            let h = self.right_height.ok_or(ConfigError::MissingDimension {
                name: "right_height",
                topology: kind,
            })?;
            check_dimension("right_height", h)?;
        }

        let unavailable = |feature: &'static str, flags: Sides, allowed: Sides| {
            match flags.iter().find(|s| !allowed.get(*s)) {
                Some(side) => Err(ConfigError::SideNotAvailable {
                    feature,
                    side,
                    topology: kind,
                }),
                None => Ok(()),
            }
        };
        unavailable("backrest", self.backrests, family.backrest_sides())?;
        unavailable("armrest", self.armrests, family.end_sides())?;
        unavailable("bolster", self.bolsters, family.end_sides())?;

        if let Some(chaise) = self.chaise {
            unavailable("chaise", Sides::of(&[chaise.side]), family.end_sides())?;
            check_dimension("chaise length", chaise.length)?;
            if self.armrests.get(chaise.side) {
                return Err(ConfigError::ChaiseArmrestConflict { side: chaise.side }.into());
            }
            if matches!(self.topology, Topology::L { .. }) && !self.backrests.get(chaise.side) {
                return Err(ConfigError::ChaiseWithoutBackrest { side: chaise.side }.into());
            }
        }

        self.cushions.validate()?;
        Ok(())
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<()> {
    match value.is_finite() && value > 0.0 {
        true => Ok(()),
        false => Err(ConfigError::InvalidDimension { name, value }.into()),
    }
}
