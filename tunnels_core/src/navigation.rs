//! Position and facing of the player, and the fused turn-then-step move.

use serde::Serialize;

use crate::coords::Node;
use crate::facing::{Facing, Turn};
use crate::walls::{is_wall_forward, neighbor};

/// Result of a single turn command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Moved { from: Node, to: Node, facing: Facing },
    /// The turn happened but a wall stopped the step.
    Blocked { location: Node, facing: Facing },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    location: Node,
    facing: Facing,
}

impl Navigator {
    pub fn new(location: Node, facing: Facing) -> Self {
        Self { location, facing }
    }

    pub fn location(&self) -> Node {
        self.location
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Turns, then advances one cell if the new facing is open. The facing
    /// changes even when the step is blocked.
    pub fn apply_turn(&mut self, turn: Turn) -> Step {
        let facing = turn.apply(self.facing);
        self.facing = facing;
        match neighbor(self.location, facing) {
            Some(to) => {
                let from = self.location;
                self.location = to;
                Step::Moved { from, to, facing }
            }
            None => Step::Blocked {
                location: self.location,
                facing,
            },
        }
    }

    /// Whether `turn` would end up facing a wall, without moving.
    pub fn probe(&self, turn: Turn) -> bool {
        is_wall_forward(self.location, turn.apply(self.facing))
    }

    pub fn wall_ahead(&self) -> bool {
        is_wall_forward(self.location, self.facing)
    }

    pub fn wall_behind(&self) -> bool {
        is_wall_forward(self.location, self.facing.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u8) -> Node {
        Node::new(id).unwrap()
    }

    #[test]
    fn open_turn_moves_and_updates_facing() {
        let mut nav = Navigator::new(node(0), Facing::Away);
        let step = nav.apply_turn(Turn::Right);
        assert_eq!(
            step,
            Step::Moved {
                from: node(0),
                to: node(1),
                facing: Facing::Right
            }
        );
        assert_eq!(nav.location(), node(1));
        assert_eq!(nav.facing(), Facing::Right);
    }

    #[test]
    fn blocked_turn_keeps_location_but_turns() {
        let mut nav = Navigator::new(node(0), Facing::Away);
        let step = nav.apply_turn(Turn::Left);
        assert_eq!(
            step,
            Step::Blocked {
                location: node(0),
                facing: Facing::Left
            }
        );
        assert_eq!(nav.location(), node(0));
        assert_eq!(nav.facing(), Facing::Left);
    }

    #[test]
    fn probe_matches_the_move_that_follows() {
        for start in Node::all() {
            for facing in Facing::ALL {
                for turn in Turn::ALL {
                    let mut nav = Navigator::new(start, facing);
                    let walled = nav.probe(turn);
                    let step = nav.apply_turn(turn);
                    assert_eq!(walled, matches!(step, Step::Blocked { .. }));
                    assert_eq!(nav.facing(), turn.apply(facing));
                }
            }
        }
    }

    #[test]
    fn vertical_loop_returns_to_start() {
        // Away, Up, Toward, Down traces a square and comes back.
        let mut nav = Navigator::new(node(0), Facing::Down);
        for _ in 0..4 {
            assert!(matches!(nav.apply_turn(Turn::Up), Step::Moved { .. }));
        }
        assert_eq!(nav.location(), node(0));
        assert_eq!(nav.facing(), Facing::Down);
    }

    #[test]
    fn turning_on_the_axis_keeps_heading() {
        let mut nav = Navigator::new(node(0), Facing::Right);
        assert!(matches!(nav.apply_turn(Turn::Up), Step::Moved { .. }));
        assert!(matches!(nav.apply_turn(Turn::Down), Step::Moved { .. }));
        assert_eq!(nav.location(), node(2));
        assert!(nav.wall_ahead());
        assert!(!nav.wall_behind());
        assert_eq!(
            nav.apply_turn(Turn::Up),
            Step::Blocked {
                location: node(2),
                facing: Facing::Right
            }
        );
    }
}
