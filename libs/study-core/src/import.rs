//! Tab-separated import format.
//!
//! # Format
//! ```text
//! hello	hola
//! goodbye	adiós
//! thank you	gracias
//! ```
//!
//! One card per line, front and back separated by a TAB. Lines with fewer
//! than two fields are skipped rather than failing the whole import.

use serde::{Deserialize, Serialize};

/// A front/back pair salvaged from user input, not yet part of a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCard {
    pub front: String,
    pub back: String,
    pub line_number: usize,
}

/// Parse pasted text into raw cards, skipping malformed lines.
pub fn parse_import(content: &str) -> Vec<RawCard> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

fn parse_line(line: &str, line_number: usize) -> Option<RawCard> {
    if line.trim().is_empty() {
        return None;
    }

    let mut fields = line.split('\t');
    let front = fields.next()?.trim();
    let back = fields.next()?.trim();

    if front.is_empty() || back.is_empty() {
        tracing::trace!(line_number, "skipping import line with a blank side");
        return None;
    }

    Some(RawCard {
        front: front.to_string(),
        back: back.to_string(),
        line_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn malformed_rows_are_dropped() {
        let cards = parse_import("hello\thola\nbadrow\ngoodbye\tadios");
        assert_eq!(
            cards,
            vec![
                RawCard {
                    front: "hello".to_string(),
                    back: "hola".to_string(),
                    line_number: 1,
                },
                RawCard {
                    front: "goodbye".to_string(),
                    back: "adios".to_string(),
                    line_number: 3,
                },
            ]
        );
    }

    #[test]
    fn fields_are_trimmed_and_extras_ignored() {
        let cards = parse_import("  thank you \t gracias \textra");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "thank you");
        assert_eq!(cards[0].back, "gracias");
    }

    #[test]
    fn blank_lines_and_blank_sides_skipped() {
        let cards = parse_import("\n\n   \n\tonly back\nonly front\t \nyes\tsi\n");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].line_number, 6);
    }

    #[test]
    fn windows_line_endings() {
        let cards = parse_import("a\tb\r\nc\td\r\n");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].back, "d");
    }

    #[test]
    fn empty_content() {
        assert!(parse_import("").is_empty());
    }
}
