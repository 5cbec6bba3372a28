//! The puzzle itself: which nodes are identified, which targets remain, and
//! the two commands the host can issue (turn, confirm).

use std::collections::BTreeSet;

use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, SessionConfig};
use crate::coords::Node;
use crate::facing::{Facing, Turn};
use crate::navigation::{Navigator, Step};
use crate::reporter::{Reporter, Strike};
use crate::symbols::describe;
use crate::view::{FaceView, SessionView};

/// A complete starting arrangement. Random sessions build one of these and
/// fixed puzzles can be loaded from one directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub identified: Vec<Node>,
    pub targets: Vec<Node>,
    pub location: Node,
    pub facing: Facing,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("expected {expected} identified nodes but the layout lists {actual}")]
    IdentifiedCount { expected: usize, actual: usize },
    #[error("expected {expected} targets but the layout lists {actual}")]
    TargetCount { expected: usize, actual: usize },
    #[error("node {0} is listed as identified more than once")]
    DuplicateIdentified(Node),
    #[error("target {0} is listed more than once")]
    DuplicateTarget(Node),
    #[error("target {0} is already identified")]
    TargetIdentified(Node),
    #[error("starting location {0} is an identified node")]
    StartIdentified(Node),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveOutcome {
    Moved { from: Node, to: Node, facing: Facing },
    /// Facing changed, location did not, one strike was reported.
    Blocked { location: Node, facing: Facing },
    /// The puzzle is already solved.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfirmOutcome {
    /// Correct node; `node` is now identified and the next stage begins.
    Advanced { node: Node, stage: usize },
    /// Correct final node; the pass was reported.
    Solved { node: Node },
    /// Wrong node; one strike was reported and nothing else changed.
    WrongNode { expected: Node, actual: Node },
    Ignored,
}

pub struct PuzzleSession<R: Reporter> {
    instance: u32,
    navigator: Navigator,
    identified: BTreeSet<Node>,
    targets: Vec<Node>,
    current_target: usize,
    solved: bool,
    strikes: u32,
    reporter: R,
}

impl<R: Reporter> PuzzleSession<R> {
    /// Rolls a fresh puzzle: a uniform identified subset, targets drawn in
    /// random order from the rest, and a start anywhere unidentified.
    pub fn generate<G: Rng>(
        config: SessionConfig,
        rng: &mut G,
        reporter: R,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        let mut nodes: Vec<Node> = Node::all().collect();
        nodes.shuffle(rng);
        let (identified, unidentified) = nodes.split_at(config.identified);
        let targets = unidentified[..config.targets].to_vec();
        let location = unidentified[rng.gen_range(0..unidentified.len())];
        let facing = Facing::ALL[rng.gen_range(0..Facing::ALL.len())];

        let layout = Layout {
            identified: identified.to_vec(),
            targets,
            location,
            facing,
        };
        Self::from_layout(config, layout, reporter)
    }

    pub fn from_layout(
        config: SessionConfig,
        layout: Layout,
        reporter: R,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        if layout.identified.len() != config.identified {
            return Err(SessionError::IdentifiedCount {
                expected: config.identified,
                actual: layout.identified.len(),
            });
        }
        if layout.targets.len() != config.targets {
            return Err(SessionError::TargetCount {
                expected: config.targets,
                actual: layout.targets.len(),
            });
        }

        let mut identified = BTreeSet::new();
        for &node in &layout.identified {
            if !identified.insert(node) {
                return Err(SessionError::DuplicateIdentified(node));
            }
        }
        let mut seen = BTreeSet::new();
        for &target in &layout.targets {
            if identified.contains(&target) {
                return Err(SessionError::TargetIdentified(target));
            }
            if !seen.insert(target) {
                return Err(SessionError::DuplicateTarget(target));
            }
        }
        if identified.contains(&layout.location) {
            return Err(SessionError::StartIdentified(layout.location));
        }

        let instance = config.instance;
        info!(
            "[tunnels #{instance}] Identified nodes: {}",
            describe(&identified)
        );
        info!(
            "[tunnels #{instance}] Target nodes: {}",
            describe(&layout.targets)
        );
        info!(
            "[tunnels #{instance}] Starting location: {}",
            layout.location.symbol().name
        );
        info!(
            "[tunnels #{instance}] Starting orientation: {} (N=negative, X=right, Y=up, Z=away)",
            layout.facing.axis_label()
        );

        Ok(Self {
            instance,
            navigator: Navigator::new(layout.location, layout.facing),
            identified,
            targets: layout.targets,
            current_target: 0,
            solved: false,
            strikes: 0,
            reporter,
        })
    }

    /// Turns and then tries to step forward. A wall ahead costs a strike.
    pub fn turn(&mut self, turn: Turn) -> MoveOutcome {
        if self.solved {
            debug!(
                "[tunnels #{}] ignoring {} turn, already solved",
                self.instance,
                turn.name()
            );
            return MoveOutcome::Ignored;
        }

        match self.navigator.apply_turn(turn) {
            Step::Moved { from, to, facing } => {
                debug!(
                    "[tunnels #{}] {} -> {} facing {}",
                    self.instance,
                    from.symbol().name,
                    to.symbol().name,
                    facing.axis_label()
                );
                MoveOutcome::Moved { from, to, facing }
            }
            Step::Blocked { location, facing } => {
                warn!(
                    "[tunnels #{}] There's a wall in front of you at location {}, orientation {}. Strike!",
                    self.instance,
                    location.symbol().name,
                    facing.axis_label()
                );
                self.report_strike(Strike::Wall { location, facing });
                MoveOutcome::Blocked { location, facing }
            }
        }
    }

    pub fn turn_up(&mut self) -> MoveOutcome {
        self.turn(Turn::Up)
    }

    pub fn turn_down(&mut self) -> MoveOutcome {
        self.turn(Turn::Down)
    }

    pub fn turn_left(&mut self) -> MoveOutcome {
        self.turn(Turn::Left)
    }

    pub fn turn_right(&mut self) -> MoveOutcome {
        self.turn(Turn::Right)
    }

    /// Claims that the current node is the current target.
    pub fn confirm_target(&mut self) -> ConfirmOutcome {
        if self.solved {
            return ConfirmOutcome::Ignored;
        }

        let location = self.navigator.location();
        let expected = self.targets[self.current_target];
        if location != expected {
            warn!(
                "[tunnels #{}] You are not at {}, you are at {}. Strike!",
                self.instance,
                expected.symbol().name,
                location.symbol().name
            );
            self.report_strike(Strike::WrongNode {
                expected,
                actual: location,
            });
            return ConfirmOutcome::WrongNode {
                expected,
                actual: location,
            };
        }

        info!(
            "[tunnels #{}] {} identified correctly.",
            self.instance,
            location.symbol().name
        );
        if self.current_target + 1 == self.targets.len() {
            info!("[tunnels #{}] Module solved.", self.instance);
            self.solved = true;
            self.reporter.pass();
            ConfirmOutcome::Solved { node: location }
        } else {
            self.identified.insert(location);
            self.current_target += 1;
            ConfirmOutcome::Advanced {
                node: location,
                stage: self.current_target + 1,
            }
        }
    }

    fn report_strike(&mut self, strike: Strike) {
        self.strikes += 1;
        self.reporter.strike(&strike);
    }

    pub fn view(&self) -> SessionView {
        let location = self.navigator.location();
        SessionView {
            faces: FaceView::of(&self.navigator),
            location_symbol: self
                .identified
                .contains(&location)
                .then(|| location.symbol()),
            target_symbol: (!self.solved).then(|| self.current_target().symbol()),
            stage: self.current_target + 1,
            stages: self.targets.len(),
            strikes: self.strikes,
            solved: self.solved,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn instance(&self) -> u32 {
        self.instance
    }

    pub fn location(&self) -> Node {
        self.navigator.location()
    }

    pub fn facing(&self) -> Facing {
        self.navigator.facing()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn identified_nodes(&self) -> &BTreeSet<Node> {
        &self.identified
    }

    pub fn target_nodes(&self) -> &[Node] {
        &self.targets
    }

    pub fn current_target_index(&self) -> usize {
        self.current_target
    }

    pub fn current_target(&self) -> Node {
        self.targets[self.current_target]
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
