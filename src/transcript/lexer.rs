//! Tokenizer for response bodies
//!
//! Asterisk runs are cut greedily from the left, three at a time and then
//! two. A single leftover `*` is ordinary text so bullet markers and stray
//! stars reach the scanner as content.

/// Span delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    /// `**`
    Double,
    /// `***`
    Triple,
}

impl Delimiter {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Double => "**",
            Self::Triple => "***",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Text(String),
    Newline,
    Delimiter(Delimiter),
}

pub(crate) fn tokenize(body: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                flush_text(&mut tokens, &mut text);
                tokens.push(Token::Newline);
            }
            '*' => {
                let mut run = 1;
                while chars.next_if_eq(&'*').is_some() {
                    run += 1;
                }
                if run == 1 {
                    text.push('*');
                    continue;
                }
                flush_text(&mut tokens, &mut text);
                while run >= 3 {
                    tokens.push(Token::Delimiter(Delimiter::Triple));
                    run -= 3;
                }
                match run {
                    2 => tokens.push(Token::Delimiter(Delimiter::Double)),
                    1 => text.push('*'),
                    _ => {}
                }
            }
            _ => text.push(c),
        }
    }

    flush_text(&mut tokens, &mut text);
    tokens
}

fn flush_text(tokens: &mut Vec<Token>, text: &mut String) {
    if !text.is_empty() {
        tokens.push(Token::Text(std::mem::take(text)));
    }
}
