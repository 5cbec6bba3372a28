//! Boundary walls. The cube has no interior walls, so a face is blocked
//! exactly when stepping through it would leave the cube.

use crate::coords::{in_bounds, Node};
use crate::facing::Facing;

pub fn is_wall_forward(node: Node, facing: Facing) -> bool {
    !in_bounds(node.position() + facing.step())
}

/// The node one step ahead, or `None` when a wall is in the way.
pub fn neighbor(node: Node, facing: Facing) -> Option<Node> {
    Node::at(node.position() + facing.step())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::CUBE_SIZE;

    #[test]
    fn wall_iff_step_leaves_the_cube() {
        for node in Node::all() {
            for facing in Facing::ALL {
                let next = node.position() + facing.step();
                let outside = next
                    .to_array()
                    .iter()
                    .any(|&axis| !(0..CUBE_SIZE).contains(&axis));
                assert_eq!(
                    is_wall_forward(node, facing),
                    outside,
                    "node {node} facing {facing}"
                );
            }
        }
    }

    #[test]
    fn neighbor_agrees_with_wall_test() {
        for node in Node::all() {
            for facing in Facing::ALL {
                match neighbor(node, facing) {
                    Some(next) => {
                        assert!(!is_wall_forward(node, facing));
                        assert_eq!(next.position() - node.position(), facing.step());
                        assert_eq!(neighbor(next, facing.opposite()), Some(node));
                    }
                    None => assert!(is_wall_forward(node, facing)),
                }
            }
        }
    }

    #[test]
    fn centre_is_open_on_every_side() {
        let centre = Node::new(13).unwrap();
        assert!(Facing::ALL.iter().all(|&f| !is_wall_forward(centre, f)));
    }

    #[test]
    fn corner_has_three_walls() {
        let corner = Node::new(0).unwrap();
        let walls = Facing::ALL
            .iter()
            .filter(|&&f| is_wall_forward(corner, f))
            .count();
        assert_eq!(walls, 3);
        assert!(is_wall_forward(corner, Facing::Left));
        assert!(is_wall_forward(corner, Facing::Down));
        assert!(is_wall_forward(corner, Facing::Toward));
    }
}
