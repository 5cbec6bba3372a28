//! Facings and the relative turn algebra.
//!
//! The six facings are the unit steps of a fixed world frame (X right, Y up,
//! Z away). Turns are quarter rotations about a world axis: vertical turns
//! spin about X, horizontal turns spin about Y. The facing alone is the whole
//! orientation, so no roll is tracked.

use std::fmt;

use glam::IVec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    /// +Z
    Away,
    /// -Z
    Toward,
    /// +X
    Right,
    /// -X
    Left,
    /// +Y
    Up,
    /// -Y
    Down,
}

impl Facing {
    pub const ALL: [Facing; 6] = [
        Facing::Away,
        Facing::Toward,
        Facing::Right,
        Facing::Left,
        Facing::Up,
        Facing::Down,
    ];

    /// Unit vector this facing steps along.
    pub fn step(self) -> IVec3 {
        match self {
            Facing::Away => IVec3::Z,
            Facing::Toward => IVec3::NEG_Z,
            Facing::Right => IVec3::X,
            Facing::Left => IVec3::NEG_X,
            Facing::Up => IVec3::Y,
            Facing::Down => IVec3::NEG_Y,
        }
    }

    pub fn opposite(self) -> Facing {
        match self {
            Facing::Away => Facing::Toward,
            Facing::Toward => Facing::Away,
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
            Facing::Up => Facing::Down,
            Facing::Down => Facing::Up,
        }
    }

    /// Quarter turn about the world X axis. `up` carries `Away` to `Up`;
    /// `Right` and `Left` lie on the axis and stay put.
    pub fn turn_vertical(self, up: bool) -> Facing {
        match (self, up) {
            (Facing::Away, true) => Facing::Up,
            (Facing::Up, true) => Facing::Toward,
            (Facing::Toward, true) => Facing::Down,
            (Facing::Down, true) => Facing::Away,
            (Facing::Away, false) => Facing::Down,
            (Facing::Down, false) => Facing::Toward,
            (Facing::Toward, false) => Facing::Up,
            (Facing::Up, false) => Facing::Away,
            (Facing::Right, _) => Facing::Right,
            (Facing::Left, _) => Facing::Left,
        }
    }

    /// Quarter turn about the world Y axis. `right` carries `Away` to `Right`;
    /// `Up` and `Down` lie on the axis and stay put.
    pub fn turn_horizontal(self, right: bool) -> Facing {
        match (self, right) {
            (Facing::Away, true) => Facing::Right,
            (Facing::Right, true) => Facing::Toward,
            (Facing::Toward, true) => Facing::Left,
            (Facing::Left, true) => Facing::Away,
            (Facing::Away, false) => Facing::Left,
            (Facing::Left, false) => Facing::Toward,
            (Facing::Toward, false) => Facing::Right,
            (Facing::Right, false) => Facing::Away,
            (Facing::Up, _) => Facing::Up,
            (Facing::Down, _) => Facing::Down,
        }
    }

    /// Short axis label used in log lines: `X`, `NX`, `Y`, `NY`, `Z`, `NZ`.
    pub fn axis_label(self) -> &'static str {
        match self {
            Facing::Away => "Z",
            Facing::Toward => "NZ",
            Facing::Right => "X",
            Facing::Left => "NX",
            Facing::Up => "Y",
            Facing::Down => "NY",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Facing::Away => "away",
            Facing::Toward => "toward",
            Facing::Right => "right",
            Facing::Left => "left",
            Facing::Up => "up",
            Facing::Down => "down",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.axis_label())
    }
}

/// One of the four relative turn commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    Up,
    Down,
    Left,
    Right,
}

impl Turn {
    pub const ALL: [Turn; 4] = [Turn::Up, Turn::Down, Turn::Left, Turn::Right];

    pub fn apply(self, facing: Facing) -> Facing {
        match self {
            Turn::Up => facing.turn_vertical(true),
            Turn::Down => facing.turn_vertical(false),
            Turn::Left => facing.turn_horizontal(false),
            Turn::Right => facing.turn_horizontal(true),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Turn::Up => "up",
            Turn::Down => "down",
            Turn::Left => "left",
            Turn::Right => "right",
        }
    }
}
