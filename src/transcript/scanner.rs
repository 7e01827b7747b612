//! Inline markup scanner
//!
//! Walks the token stream with three states:
//!
//! | state       | `**`            | `***`                | other       |
//! |-------------|-----------------|----------------------|-------------|
//! | `Unmarked`  | open `Bold`     | open `Highlight`     | buffer      |
//! | `Bold`      | close, emit     | literal              | span text   |
//! | `Highlight` | literal         | close, emit          | span text   |
//!
//! Spans do not nest. An opener that never closes is dropped and scanning
//! resumes right after it, so its text is read again as unmarked content.

use super::lexer::{tokenize, Delimiter, Token};
use super::segment::RenderSegment;

/// Classify a response body into segments
pub(crate) fn scan(body: &str) -> Vec<RenderSegment> {
    let tokens = tokenize(body);
    let mut segments = Vec::new();
    let mut unmarked = String::new();
    let mut pos = 0;

    while let Some(token) = tokens.get(pos) {
        match token {
            Token::Text(text) => unmarked.push_str(text),
            Token::Newline => unmarked.push('\n'),
            Token::Delimiter(open) => {
                if let Some((span, close)) = closed_span(&tokens, pos, *open) {
                    emit_unmarked(&mut segments, &std::mem::take(&mut unmarked));
                    if !span.is_empty() {
                        segments.push(span_segment(*open, span));
                    }
                    pos = close + 1;
                    continue;
                }
            }
        }
        pos += 1;
    }

    emit_unmarked(&mut segments, &unmarked);
    segments
}

/// Collect the span opened at `open_at`, returning its text and the index of
/// the closing delimiter. `None` if the input ends first.
fn closed_span(tokens: &[Token], open_at: usize, open: Delimiter) -> Option<(String, usize)> {
    let mut span = String::new();
    for (pos, token) in tokens.iter().enumerate().skip(open_at + 1) {
        match token {
            Token::Delimiter(d) if *d == open => return Some((span, pos)),
            Token::Delimiter(d) => span.push_str(d.as_str()),
            Token::Text(text) => span.push_str(text),
            Token::Newline => span.push('\n'),
        }
    }
    None
}

fn span_segment(delimiter: Delimiter, text: String) -> RenderSegment {
    match delimiter {
        Delimiter::Double => RenderSegment::Bold(text),
        Delimiter::Triple => RenderSegment::Highlight(text),
    }
}

/// Emit an unmarked chunk line by line.
///
/// Lines whose trimmed content starts with `*` become bullets. Other lines
/// are plain, keeping their `'\n'` when another line of the chunk follows.
fn emit_unmarked(segments: &mut Vec<RenderSegment>, chunk: &str) {
    let mut lines = chunk.split('\n').peekable();
    while let Some(line) = lines.next() {
        let has_next = lines.peek().is_some();
        if let Some(item) = line.trim().strip_prefix('*') {
            segments.push(RenderSegment::BulletItem(item.trim().to_string()));
            continue;
        }
        let mut text = line.to_string();
        if has_next {
            text.push('\n');
        }
        if !text.is_empty() {
            segments.push(RenderSegment::Plain(text));
        }
    }
}
