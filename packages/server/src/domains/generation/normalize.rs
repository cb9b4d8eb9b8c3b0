//! Cleanup of raw model output.

use lazy_static::lazy_static;
use regex::Regex;

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

lazy_static! {
    // Ordinal 1-10 followed by ".", ")" or " -"
    static ref NUMBERED_ITEM: Regex = Regex::new(r"^(?:10|[1-9])(?:\.|\)| -)\s*(.*)$").unwrap();
}

/// Drop any visible reasoning segment and leftover markers.
///
/// With a closing marker, only the text after the last one survives. With an
/// opening marker alone (reasoning cut off by the token cap) the text after the
/// last opening marker is kept.
pub fn clean(raw: &str) -> String {
    let visible = if let Some(pos) = raw.rfind(THINK_CLOSE) {
        &raw[pos + THINK_CLOSE.len()..]
    } else if let Some(pos) = raw.rfind(THINK_OPEN) {
        &raw[pos + THINK_OPEN.len()..]
    } else {
        raw
    };

    // Removing one marker can splice the halves of another back together.
    let mut text = visible.to_string();
    while text.contains(THINK_OPEN) || text.contains(THINK_CLOSE) {
        text = text.replace(THINK_OPEN, "").replace(THINK_CLOSE, "");
    }
    text.trim().to_string()
}

/// Items of a numbered list, in order.
///
/// Lines without an ordinal prefix are dropped, as are items of three
/// characters or fewer. Callers apply their own length cap.
pub fn parse_numbered_list(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| {
            let captures = NUMBERED_ITEM.captures(line.trim())?;
            let item = captures.get(1)?.as_str().trim();
            (item.chars().count() > 3).then(|| item.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasoning_before_closing_marker_is_removed() {
        assert_eq!(clean("<think>reasoning</think>actual"), "actual");
        assert_eq!(
            clean("<think>I will write a tweet</think>Check out our new product! #Launch"),
            "Check out our new product! #Launch"
        );
    }

    #[test]
    fn truncated_reasoning_keeps_text_after_opening_marker() {
        assert_eq!(clean("preamble <think> partial answer "), "partial answer");
    }

    #[test]
    fn multiple_segments_keep_only_the_tail() {
        assert_eq!(clean("<think>a</think>middle<think>b</think>  final\n"), "final");
    }

    #[test]
    fn plain_text_is_only_trimmed() {
        assert_eq!(clean("  Hello world \n"), "Hello world");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn markers_spliced_by_removal_are_also_removed() {
        assert_eq!(clean("<think>x</think>y<thi<think>nk>z"), "yz");
    }

    #[test]
    fn clean_is_idempotent() {
        let inputs = [
            "<think>x</think>answer",
            "<think>dangling",
            "a</think>b<think>c",
            "no markers at all",
            "<think></think><think></think>",
            "  padded </think>  ",
            "<think>x</think>y<thi<think>nk>z",
        ];
        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn numbered_list_in_order() {
        assert_eq!(
            parse_numbered_list("1. Alpha\n2. Beta\n3. Gamma"),
            vec!["Alpha", "Beta", "Gamma"]
        );
    }

    #[test]
    fn all_separator_styles_are_accepted() {
        assert_eq!(
            parse_numbered_list("1) First item\n2 - Second item\n  10. Tenth item"),
            vec!["First item", "Second item", "Tenth item"]
        );
    }

    #[test]
    fn unnumbered_and_short_lines_are_dropped() {
        let raw = "Here are some ideas:\n1. ab\n2. Real idea\n- bullet item\n11. Eleventh\n\n3.    ";
        assert_eq!(parse_numbered_list(raw), vec!["Real idea"]);
    }

    #[test]
    fn parse_does_not_cap_length() {
        let raw: String = (1..=10).map(|n| format!("{n}. Keyword number {n}\n")).collect();
        assert_eq!(parse_numbered_list(&raw).len(), 10);
    }
}
