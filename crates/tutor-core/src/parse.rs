//! Parsers for model output.
//!
//! Model responses are free text in loosely agreed formats. These parsers
//! are lenient: malformed input yields an empty result rather than an error,
//! since a failed parse of AI output is not actionable for the caller.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::Flashcard;

fn numbered_item_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.").unwrap())
}

fn skill_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\d+\.|[-*])\s*").unwrap())
}

fn front_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)FRONT:").unwrap())
}

fn back_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)BACK:").unwrap())
}

/// Splits a numbered list ("1. ... 2. ...") into its items.
///
/// Text with no number markers produces an empty list, including any
/// preamble before the first marker.
pub fn split_numbered(text: &str) -> Vec<String> {
    let mut items: Vec<String> = numbered_item_regex()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    // A preamble before "1." is not an item
    if !numbered_item_regex().is_match(text) {
        return Vec::new();
    }
    if let Some(first_marker) = numbered_item_regex().find(text) {
        if text[..first_marker.start()].trim().is_empty() {
            return items;
        }
        if !items.is_empty() {
            items.remove(0);
        }
    }

    items
}

/// Parses FRONT:/BACK: flashcard pairs.
///
/// Segments missing either side are skipped. Marker matching is
/// case-insensitive.
pub fn parse_flashcards(text: &str) -> Vec<Flashcard> {
    let mut flashcards = Vec::new();

    for segment in front_marker_regex().split(text) {
        if segment.trim().is_empty() {
            continue;
        }

        let mut halves = back_marker_regex().splitn(segment, 2);
        let front = halves.next().map(str::trim).unwrap_or_default();
        let back = halves.next().map(str::trim).unwrap_or_default();

        if !front.is_empty() && !back.is_empty() {
            flashcards.push(Flashcard {
                front: front.to_string(),
                back: back.to_string(),
            });
        }
    }

    flashcards
}

/// Parses one-skill-per-line output, stripping list markers.
pub fn parse_skill_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| skill_prefix_regex().replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_numbered_extracts_items() {
        let text = "1. Solve for x\n2. Check the solution\n3. State the answer";
        let items = split_numbered(text);
        assert_eq!(
            items,
            vec!["Solve for x", "Check the solution", "State the answer"]
        );
    }

    #[test]
    fn split_numbered_drops_preamble() {
        let text = "Here are the questions:\n1. First question\n2. Second question";
        let items = split_numbered(text);
        assert_eq!(items, vec!["First question", "Second question"]);
    }

    #[test]
    fn split_numbered_returns_empty_for_unnumbered_text() {
        assert!(split_numbered("No markers in this text at all.").is_empty());
        assert!(split_numbered("").is_empty());
    }

    #[test]
    fn parse_flashcards_reads_pairs() {
        let text = "FRONT: What is 2+2?\nBACK: 4\n\nFRONT: Capital of France?\nBACK: Paris";
        let cards = parse_flashcards(text);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].front, "What is 2+2?");
        assert_eq!(cards[0].back, "4");
        assert_eq!(cards[1].front, "Capital of France?");
        assert_eq!(cards[1].back, "Paris");
    }

    #[test]
    fn parse_flashcards_is_case_insensitive() {
        let text = "front: A?\nback: B";
        let cards = parse_flashcards(text);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "A?");
    }

    #[test]
    fn parse_flashcards_skips_incomplete_pairs() {
        let text = "FRONT: Only a front side here\n\nFRONT: Complete\nBACK: Yes";
        let cards = parse_flashcards(text);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "Complete");
    }

    #[test]
    fn parse_flashcards_returns_empty_for_malformed_text() {
        assert!(parse_flashcards("just some prose with no markers").is_empty());
    }

    #[test]
    fn parse_skill_lines_strips_markers() {
        let text = "- Factoring quadratics\n* Completing the square\n1. Sign handling\n\n";
        let skills = parse_skill_lines(text);
        assert_eq!(
            skills,
            vec![
                "Factoring quadratics",
                "Completing the square",
                "Sign handling"
            ]
        );
    }

    #[test]
    fn parse_skill_lines_strips_multi_digit_markers() {
        let skills = parse_skill_lines("10. Estimating roots\n12. Unit conversion");
        assert_eq!(skills, vec!["Estimating roots", "Unit conversion"]);
    }

    #[test]
    fn parse_skill_lines_ignores_blank_lines() {
        assert!(parse_skill_lines("\n\n   \n").is_empty());
    }
}
