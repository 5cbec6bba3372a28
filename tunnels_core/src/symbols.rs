//! Symbols printed on the nodes, indexed by node id.

use serde::Serialize;

use crate::coords::{Node, NODE_COUNT};

/// A glyph from the puzzle's symbol font together with its readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub glyph: char,
    pub name: &'static str,
}

const fn sym(glyph: char, name: &'static str) -> Symbol {
    Symbol { glyph, name }
}

pub const SYMBOLS: [Symbol; NODE_COUNT] = [
    sym('g', "Chip"),
    sym('h', "Ring"),
    sym('i', "Drop"),
    sym('d', "Cube"),
    sym('e', "Cloud"),
    sym('f', "Command"),
    sym('a', "Heart monitor"),
    sym('b', "Anchor"),
    sym('c', "Medal"),
    sym('p', "Lock"),
    sym('q', "Crossing"),
    sym('r', "Moon"),
    sym('m', "Globe"),
    sym('n', "Heart"),
    sym('o', "Link"),
    sym('j', "Eye"),
    sym('k', "Feather"),
    sym('l', "Flag"),
    sym('y', "Chart"),
    sym('z', "Umbrella"),
    sym('.', "Wind"),
    sym('v', "Shield"),
    sym('w', "Star"),
    sym('x', "Sun"),
    sym('s', "Quarter"),
    sym('t', "Radio"),
    sym('u', "Gear"),
];

impl Node {
    pub fn symbol(self) -> Symbol {
        SYMBOLS[self.index()]
    }
}

/// Comma separated symbol names, for log lines.
pub fn describe<'a, I>(nodes: I) -> String
where
    I: IntoIterator<Item = &'a Node>,
{
    nodes
        .into_iter()
        .map(|node| node.symbol().name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn glyphs_and_names_are_distinct() {
        let glyphs: HashSet<char> = SYMBOLS.iter().map(|s| s.glyph).collect();
        let names: HashSet<&str> = SYMBOLS.iter().map(|s| s.name).collect();
        assert_eq!(glyphs.len(), NODE_COUNT);
        assert_eq!(names.len(), NODE_COUNT);
    }

    #[test]
    fn symbols_follow_node_numbering() {
        assert_eq!(Node::new(0).unwrap().symbol().name, "Chip");
        assert_eq!(Node::new(6).unwrap().symbol().name, "Heart monitor");
        assert_eq!(Node::new(26).unwrap().symbol().name, "Gear");
    }

    #[test]
    fn describe_joins_names() {
        let nodes = [Node::new(0).unwrap(), Node::new(13).unwrap()];
        assert_eq!(describe(&nodes), "Chip, Heart");
    }
}
