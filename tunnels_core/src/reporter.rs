//! Sinks the host provides for strikes and the final pass.

use serde::Serialize;

use crate::coords::Node;
use crate::facing::Facing;

/// Why a strike was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strike {
    /// A turn command faced a wall, so the step could not happen.
    Wall { location: Node, facing: Facing },
    /// The confirm button was pressed away from the current target.
    WrongNode { expected: Node, actual: Node },
}

/// Called exactly once per strike and exactly once when the puzzle is solved.
pub trait Reporter {
    fn strike(&mut self, strike: &Strike);
    fn pass(&mut self);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn strike(&mut self, strike: &Strike) {
        (**self).strike(strike);
    }

    fn pass(&mut self) {
        (**self).pass();
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn strike(&mut self, strike: &Strike) {
        (**self).strike(strike);
    }

    fn pass(&mut self) {
        (**self).pass();
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn strike(&mut self, _strike: &Strike) {}

    fn pass(&mut self) {}
}
