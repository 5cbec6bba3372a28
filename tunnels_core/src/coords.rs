//! Node identifiers and their positions inside the cube.
//!
//! Nodes are numbered `x + 3y + 9z` with every axis in `0..3`. The symbol
//! table in [`crate::symbols`] is indexed with the same numbering.

use std::convert::TryFrom;
use std::fmt;

use glam::IVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cells along each axis of the cube.
pub const CUBE_SIZE: i32 = 3;

/// Total number of addressable nodes.
pub const NODE_COUNT: usize = 27;

/// A cell of the cube, stored as its id in `0..27`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Node(u8);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("node id {0} is outside 0..{NODE_COUNT}")]
    OutOfRange(u32),
}

impl Node {
    pub fn new(id: u8) -> Result<Self, NodeError> {
        if usize::from(id) < NODE_COUNT {
            Ok(Self(id))
        } else {
            Err(NodeError::OutOfRange(u32::from(id)))
        }
    }

    /// Node at `position`, or `None` when the position lies outside the cube.
    pub fn at(position: IVec3) -> Option<Self> {
        if !in_bounds(position) {
            return None;
        }
        let id = position.x + CUBE_SIZE * position.y + CUBE_SIZE * CUBE_SIZE * position.z;
        Some(Self(id as u8))
    }

    pub fn id(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub fn position(self) -> IVec3 {
        let id = i32::from(self.0);
        IVec3::new(
            id % CUBE_SIZE,
            (id / CUBE_SIZE) % CUBE_SIZE,
            id / (CUBE_SIZE * CUBE_SIZE),
        )
    }

    /// Every node in id order.
    pub fn all() -> impl ExactSizeIterator<Item = Node> {
        (0..NODE_COUNT as u8).map(Node)
    }
}

/// True when every component of `position` is within `0..CUBE_SIZE`.
pub fn in_bounds(position: IVec3) -> bool {
    position.cmpge(IVec3::ZERO).all() && position.cmplt(IVec3::splat(CUBE_SIZE)).all()
}

impl TryFrom<u8> for Node {
    type Error = NodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Node::new(value)
    }
}

impl From<Node> for u8 {
    fn from(node: Node) -> Self {
        node.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.position();
        write!(f, "{} ({}, {}, {})", self.0, pos.x, pos.y, pos.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_round_trips_for_every_cell() {
        for z in 0..CUBE_SIZE {
            for y in 0..CUBE_SIZE {
                for x in 0..CUBE_SIZE {
                    let position = IVec3::new(x, y, z);
                    let node = Node::at(position).expect("cell inside the cube");
                    assert_eq!(node.position(), position);
                }
            }
        }
    }

    #[test]
    fn ids_are_distinct_and_cover_the_cube() {
        let mut seen = [false; NODE_COUNT];
        for node in Node::all() {
            let again = Node::at(node.position()).unwrap();
            assert_eq!(again, node);
            assert!(!seen[node.index()], "duplicate id {}", node.id());
            seen[node.index()] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn numbering_runs_x_then_y_then_z() {
        assert_eq!(Node::at(IVec3::new(1, 0, 0)).unwrap().id(), 1);
        assert_eq!(Node::at(IVec3::new(0, 1, 0)).unwrap().id(), 3);
        assert_eq!(Node::at(IVec3::new(0, 0, 1)).unwrap().id(), 9);
        assert_eq!(Node::at(IVec3::new(2, 2, 2)).unwrap().id(), 26);
    }

    #[test]
    fn positions_outside_the_cube_have_no_node() {
        assert_eq!(Node::at(IVec3::new(-1, 0, 0)), None);
        assert_eq!(Node::at(IVec3::new(0, 3, 0)), None);
        assert_eq!(Node::at(IVec3::new(2, 2, -1)), None);
    }

    #[test]
    fn rejects_out_of_range_ids() {
        assert_eq!(Node::new(26).map(Node::id), Ok(26));
        assert_eq!(Node::new(27), Err(NodeError::OutOfRange(27)));
        assert!(Node::try_from(200u8).is_err());
    }
}
