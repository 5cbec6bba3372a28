//! Core rules for the 3D Tunnels puzzle.
//!
//! The player sits in one cell of a 3×3×3 cube and steers with four relative
//! turns, each of which rotates the facing and then tries to advance one cell.
//! Hidden target nodes must be confirmed in order. Walls and wrong
//! confirmations are strikes, reported to the host through [`Reporter`].
//!
//! Everything here is synchronous and allocation-light so a host can drive it
//! straight from input handlers.

pub mod config;
pub mod coords;
pub mod facing;
pub mod navigation;
pub mod reporter;
pub mod session;
pub mod symbols;
pub mod view;
pub mod walls;

pub use config::{ConfigError, SessionConfig};
pub use coords::{Node, NodeError, CUBE_SIZE, NODE_COUNT};
pub use facing::{Facing, Turn};
pub use navigation::{Navigator, Step};
pub use reporter::{NullReporter, Reporter, Strike};
pub use session::{ConfirmOutcome, Layout, MoveOutcome, PuzzleSession, SessionError};
pub use symbols::{Symbol, SYMBOLS};
pub use view::{FaceView, Passage, SessionView};
pub use walls::{is_wall_forward, neighbor};
