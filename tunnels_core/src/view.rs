//! What the display shows after each command.

use serde::Serialize;

use crate::facing::Turn;
use crate::navigation::Navigator;
use crate::symbols::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Passage {
    Tunnel,
    Wall,
}

impl Passage {
    fn from_wall(wall: bool) -> Self {
        if wall {
            Passage::Wall
        } else {
            Passage::Tunnel
        }
    }

    pub fn is_open(self) -> bool {
        self == Passage::Tunnel
    }
}

/// The six faces of the current cell, relative to the player's facing.
/// Each side is judged against the facing the matching turn would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceView {
    pub forward: Passage,
    pub backward: Passage,
    pub left: Passage,
    pub right: Passage,
    pub up: Passage,
    pub down: Passage,
}

impl FaceView {
    pub fn of(navigator: &Navigator) -> Self {
        Self {
            forward: Passage::from_wall(navigator.wall_ahead()),
            backward: Passage::from_wall(navigator.wall_behind()),
            left: Passage::from_wall(navigator.probe(Turn::Left)),
            right: Passage::from_wall(navigator.probe(Turn::Right)),
            up: Passage::from_wall(navigator.probe(Turn::Up)),
            down: Passage::from_wall(navigator.probe(Turn::Down)),
        }
    }

    pub fn toward(&self, turn: Turn) -> Passage {
        match turn {
            Turn::Up => self.up,
            Turn::Down => self.down,
            Turn::Left => self.left,
            Turn::Right => self.right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub faces: FaceView,
    /// Present only when the current node is identified.
    pub location_symbol: Option<Symbol>,
    /// Hidden once the puzzle is solved.
    pub target_symbol: Option<Symbol>,
    /// 1-based stage number.
    pub stage: usize,
    pub stages: usize,
    pub strikes: u32,
    pub solved: bool,
}
