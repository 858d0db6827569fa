//! Relation cell parser.
//!
//! A relation cell lists target skill names separated by commas. Names may
//! carry parenthesized qualifiers that themselves contain commas
//! (`"C(x, y)"`), and exported notes often append a link annotation such as
//! `"Docker (Docker%20abc123.md)"`. The parser splits on top-level commas and
//! strips those annotations.

use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;

/// Parsed relation targets. Most cells name only a handful of skills.
pub type Targets = SmallVec<[String; 4]>;

/// Trailing ` (…%xx….csv)` / ` (…%xx….md)` link annotation.
static FILE_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\s+\([^()]*%.*?\.(csv|md)\)\s*$").expect("annotation pattern is valid")
});

/// Split a raw relation cell into cleaned target names.
///
/// Never fails: unbalanced parentheses only stop commas from splitting,
/// and whatever text remains at the end is emitted as the last candidate.
pub fn parse_relations(raw: &str) -> Targets {
    split_top_level(raw)
        .into_iter()
        .filter_map(|candidate| {
            let cleaned = strip_file_annotation(&candidate);
            (!cleaned.is_empty()).then(|| cleaned.to_string())
        })
        .collect()
}

/// Split on commas at parenthesis depth 0, trimming each piece and
/// dropping empty ones.
///
/// Depth is not clamped: a stray `)` drives it negative, after which
/// commas stay literal until a matching `(` brings it back to zero.
pub fn split_top_level(raw: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;

    for ch in raw.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                push_trimmed(&mut parts, &current);
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    push_trimmed(&mut parts, &current);

    parts
}

fn push_trimmed(parts: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        parts.push(piece.to_string());
    }
}

/// Remove a trailing URL-encoded file annotation, then trim.
pub fn strip_file_annotation(candidate: &str) -> &str {
    match FILE_ANNOTATION.find(candidate) {
        Some(m) => candidate[..m.start()].trim(),
        None => candidate.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn parse(raw: &str) -> Vec<String> {
        parse_relations(raw).into_vec()
    }

    #[test]
    fn mixed_cell() {
        assert_eq!(
            parse("A, B (foo%20bar.csv), C(x, y)"),
            vec!["A", "B", "C(x, y)"],
        );
    }

    #[test]
    fn empty_and_blank_pieces_are_dropped() {
        assert!(parse("").is_empty());
        assert!(parse(" , ,, ").is_empty());
        assert_eq!(parse("A,,B,"), vec!["A", "B"]);
    }

    #[test]
    fn nested_parentheses() {
        assert_eq!(
            parse("Git (branches (merge, rebase)), SQL"),
            vec!["Git (branches (merge, rebase))", "SQL"],
        );
    }

    #[test]
    fn unbalanced_open_paren_keeps_tail() {
        assert_eq!(parse("A, B (unfinished, C"), vec!["A", "B (unfinished, C"]);
    }

    #[test]
    fn stray_close_paren_disables_splitting() {
        assert_eq!(parse("A) B, C"), vec!["A) B, C"]);
    }

    #[test]
    fn markdown_annotation_is_stripped() {
        assert_eq!(
            parse("Docker (Docker%2027c1a9e8d.md)"),
            vec!["Docker"],
        );
    }

    #[test]
    fn annotation_requires_percent_escape() {
        assert_eq!(parse("Notes (plain.md)"), vec!["Notes (plain.md)"]);
    }

    #[test]
    fn annotation_requires_known_extension() {
        assert_eq!(parse("Deck (my%20deck.pdf)"), vec!["Deck (my%20deck.pdf)"]);
    }

    #[test]
    fn annotation_only_at_end() {
        assert_eq!(
            parse("Linux (a%20b.md) basics"),
            vec!["Linux (a%20b.md) basics"],
        );
    }

    #[test]
    fn annotation_needs_leading_whitespace() {
        assert_eq!(parse("X(a%20b.csv)"), vec!["X(a%20b.csv)"]);
    }

    proptest! {
        #[test]
        fn never_yields_blank_targets(raw in ".{0,64}") {
            for t in parse_relations(&raw) {
                prop_assert!(!t.is_empty());
                prop_assert_eq!(t.trim(), t.as_str());
            }
        }

        #[test]
        fn plain_names_round_trip(names in prop::collection::vec("[A-Za-z][A-Za-z ]{0,10}[A-Za-z]", 0..6)) {
            let raw = names.join(", ");
            let expected: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
            prop_assert_eq!(parse(&raw), expected);
        }
    }
}
