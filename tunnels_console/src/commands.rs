use anyhow::{anyhow, Result};
use tunnels_core::Turn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Turn),
    Confirm,
    Look,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  up | u       turn up and move forward
  down | d     turn down and move forward
  left | l     turn left and move forward
  right | r    turn right and move forward
  confirm | c  claim this node is the current target
  look         show the current cell again
  help | ?     show this list
  quit | q     give up";

/// Parses one input line. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let word = line.trim();
    if word.is_empty() || word.starts_with('#') {
        return Ok(None);
    }
    let command = match word.to_ascii_lowercase().as_str() {
        "up" | "u" => Command::Turn(Turn::Up),
        "down" | "d" => Command::Turn(Turn::Down),
        "left" | "l" => Command::Turn(Turn::Left),
        "right" | "r" => Command::Turn(Turn::Right),
        "confirm" | "c" | "target" | "t" => Command::Confirm,
        "look" => Command::Look,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(anyhow!("unknown command: {word} (try 'help')")),
    };
    Ok(Some(command))
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::Turn(turn) => turn.name(),
            Command::Confirm => "confirm",
            Command::Look => "look",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!(parse("up").unwrap(), Some(Command::Turn(Turn::Up)));
        assert_eq!(parse(" R ").unwrap(), Some(Command::Turn(Turn::Right)));
        assert_eq!(parse("target").unwrap(), Some(Command::Confirm));
        assert_eq!(parse("q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("# go right first").unwrap(), None);
    }

    #[test]
    fn rejects_unknown_words() {
        let err = parse("jump").unwrap_err();
        assert!(err.to_string().contains("jump"));
    }
}
