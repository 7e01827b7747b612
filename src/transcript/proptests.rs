//! Property-based tests for the formatting engine

use super::*;
use crate::entry::RESPONSE_SEPARATOR;
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

/// Questions never contain newlines or the label's colon
fn arb_query() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ?']{1,40}"
}

/// Answers without any markup characters
fn arb_plain_answer() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .,\n]{0,80}"
}

/// Answers dense with delimiters and bullet markers
fn arb_marked_answer() -> impl Strategy<Value = String> {
    "[ab* \n]{0,60}"
}

fn arb_word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{1,12}"
}

fn raw(query: &str, answer: &str) -> String {
    format!("Query: {query}{RESPONSE_SEPARATOR}{answer}")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_fallback_is_verbatim(s in any::<String>()) {
        prop_assume!(!s.contains(RESPONSE_SEPARATOR));
        prop_assert_eq!(format(&s), vec![RenderSegment::Plain(s.clone())]);
    }

    #[test]
    fn prop_split_reconstructs_answer(query in arb_query(), answer in arb_plain_answer()) {
        let segments = format(&raw(&query, &answer));
        prop_assert_eq!(&segments[0], &RenderSegment::QueryLabel(query));
        let rebuilt: String = segments[1..].iter().map(RenderSegment::text).collect();
        prop_assert_eq!(rebuilt, answer);
    }

    #[test]
    fn prop_bold_extraction(a in arb_word(), b in arb_word(), c in arb_word()) {
        let segments = format(&raw("q", &format!("{a}**{b}**{c}")));
        prop_assert_eq!(segments, vec![
            RenderSegment::QueryLabel("q".to_string()),
            RenderSegment::Plain(a),
            RenderSegment::Bold(b),
            RenderSegment::Plain(c),
        ]);
    }

    #[test]
    fn prop_format_never_panics(s in any::<String>()) {
        let _ = format(&s);
        let _ = format(&raw("q", &s));
    }

    #[test]
    fn prop_marked_bodies_are_deterministic(answer in arb_marked_answer()) {
        let input = raw("q", &answer);
        prop_assert_eq!(format(&input), format(&input));
    }

    #[test]
    fn prop_no_empty_spans(answer in arb_marked_answer()) {
        for segment in format(&raw("q", &answer)) {
            match segment {
                RenderSegment::Plain(text)
                | RenderSegment::Bold(text)
                | RenderSegment::Highlight(text) => prop_assert!(!text.is_empty()),
                RenderSegment::BulletItem(_) | RenderSegment::QueryLabel(_) => {}
            }
        }
    }

    #[test]
    fn prop_bullet_text_has_no_surrounding_whitespace(answer in arb_marked_answer()) {
        for segment in format(&raw("q", &answer)) {
            if let RenderSegment::BulletItem(text) = segment {
                prop_assert_eq!(text.trim(), text.as_str());
            }
        }
    }
}
