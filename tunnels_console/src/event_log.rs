use serde::Serialize;
use tunnels_core::{
    ConfirmOutcome, Facing, Layout, MoveOutcome, Node, PuzzleSession, Reporter, Strike,
};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportEvent {
    Strike { strike: Strike },
    Pass,
}

/// Keeps every strike and pass the session reports, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Vec<ReportEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    pub fn strike_count(&self) -> u32 {
        self.events
            .iter()
            .filter(|event| matches!(event, ReportEvent::Strike { .. }))
            .count() as u32
    }

    pub fn pass_count(&self) -> u32 {
        self.events
            .iter()
            .filter(|event| matches!(event, ReportEvent::Pass))
            .count() as u32
    }
}

impl Reporter for RecordingReporter {
    fn strike(&mut self, strike: &Strike) {
        self.events.push(ReportEvent::Strike { strike: *strike });
    }

    fn pass(&mut self) {
        self.events.push(ReportEvent::Pass);
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Solved,
    /// The strike limit was reached.
    Exploded,
    /// Input ran out or the player quit.
    Abandoned,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Move(MoveOutcome),
    Confirm(ConfirmOutcome),
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandRecord {
    pub step: usize,
    pub command: &'static str,
    pub outcome: Outcome,
    pub location: Node,
    pub facing: Facing,
}

/// Everything needed to replay or audit a run.
#[derive(Debug, Clone, Serialize)]
pub struct EventLog {
    pub instance: u32,
    pub seed: Option<u64>,
    pub layout: Layout,
    pub commands: Vec<CommandRecord>,
    pub reports: Vec<ReportEvent>,
    pub strikes: u32,
    pub passes: u32,
    pub status: Option<RunStatus>,
}

impl EventLog {
    /// Captures the starting layout; call before any command is applied.
    pub fn start<R: Reporter>(session: &PuzzleSession<R>, seed: Option<u64>) -> Self {
        Self {
            instance: session.instance(),
            seed,
            layout: Layout {
                identified: session.identified_nodes().iter().copied().collect(),
                targets: session.target_nodes().to_vec(),
                location: session.location(),
                facing: session.facing(),
            },
            commands: Vec::new(),
            reports: Vec::new(),
            strikes: 0,
            passes: 0,
            status: None,
        }
    }

    pub fn record<R: Reporter>(
        &mut self,
        session: &PuzzleSession<R>,
        command: &'static str,
        outcome: Outcome,
    ) {
        self.commands.push(CommandRecord {
            step: self.commands.len() + 1,
            command,
            outcome,
            location: session.location(),
            facing: session.facing(),
        });
    }

    pub fn finish(&mut self, status: RunStatus, reporter: &RecordingReporter) {
        self.reports = reporter.events().to_vec();
        self.strikes = reporter.strike_count();
        self.passes = reporter.pass_count();
        self.status = Some(status);
    }
}
