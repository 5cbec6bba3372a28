//! Text stand-in for the module display.

use std::fmt::Write;

use tunnels_core::{ConfirmOutcome, MoveOutcome, Passage, SessionView, Strike, Symbol};

fn passage(p: Passage) -> &'static str {
    match p {
        Passage::Tunnel => "tunnel",
        Passage::Wall => "wall",
    }
}

fn symbol(symbol: Option<Symbol>) -> String {
    match symbol {
        Some(s) => format!("[{}] {}", s.glyph, s.name),
        None => "?".to_string(),
    }
}

pub fn render_view(view: &SessionView) -> String {
    let faces = &view.faces;
    let mut out = String::new();
    if view.solved {
        let _ = writeln!(out, "Solved ({} strikes)", view.strikes);
    } else {
        let _ = writeln!(
            out,
            "Stage {}/{} | strikes {}",
            view.stage, view.stages, view.strikes
        );
    }
    let _ = writeln!(
        out,
        "  forward: {:<7} backward: {}",
        passage(faces.forward),
        passage(faces.backward)
    );
    let _ = writeln!(
        out,
        "  left:    {:<7} right:    {}",
        passage(faces.left),
        passage(faces.right)
    );
    let _ = writeln!(
        out,
        "  up:      {:<7} down:     {}",
        passage(faces.up),
        passage(faces.down)
    );
    let _ = write!(
        out,
        "  here: {}  target: {}",
        symbol(view.location_symbol),
        symbol(view.target_symbol)
    );
    out
}

pub fn describe_move(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Moved { facing, .. } => format!("You move {}.", facing.name()),
        MoveOutcome::Blocked { facing, .. } => {
            format!("There is a wall {} of you. Strike!", facing.name())
        }
        MoveOutcome::Ignored => "The puzzle is already solved.".to_string(),
    }
}

pub fn describe_confirm(outcome: &ConfirmOutcome) -> String {
    match outcome {
        ConfirmOutcome::Advanced { node, stage } => {
            format!("{} found. On to stage {stage}.", node.symbol().name)
        }
        ConfirmOutcome::Solved { node } => format!("{} found. Solved!", node.symbol().name),
        ConfirmOutcome::WrongNode { .. } => "This is not the target. Strike!".to_string(),
        ConfirmOutcome::Ignored => "The puzzle is already solved.".to_string(),
    }
}

pub fn describe_strike(strike: &Strike) -> String {
    match strike {
        Strike::Wall { location, facing } => {
            format!("wall at {} facing {}", location.symbol().name, facing)
        }
        Strike::WrongNode { expected, actual } => format!(
            "confirmed {} while the target was {}",
            actual.symbol().name,
            expected.symbol().name
        ),
    }
}

#[cfg(test)]
mod tests {
    use tunnels_core::{Facing, Layout, Node, NullReporter, PuzzleSession, SessionConfig};

    use super::*;

    fn corner_session() -> PuzzleSession<NullReporter> {
        let ids = |ids: &[u8]| ids.iter().map(|&id| Node::new(id).unwrap()).collect();
        let layout = Layout {
            identified: ids(&[0, 21, 22, 23, 24, 25]),
            targets: ids(&[1, 4, 3]),
            location: Node::new(9).unwrap(),
            facing: Facing::Up,
        };
        PuzzleSession::from_layout(SessionConfig::default(), layout, NullReporter).unwrap()
    }

    #[test]
    fn renders_faces_and_symbols() {
        let mut session = corner_session();
        session.turn_up();
        let text = render_view(&session.view());
        // Up turned up faces toward: from (0,0,1) back to the corner at 0.
        assert!(text.contains("Stage 1/3 | strikes 0"), "{text}");
        assert!(text.contains("here: [g] Chip"), "{text}");
        assert!(text.contains("target: [h] Ring"), "{text}");
        assert!(text.contains("forward: wall"), "{text}");
    }

    #[test]
    fn unidentified_node_shows_question_mark() {
        let session = corner_session();
        let text = render_view(&session.view());
        assert!(text.contains("here: ?"), "{text}");
    }
}
