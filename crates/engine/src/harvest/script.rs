use std::{iter::Peekable, str::Chars};

use crate::UsageIndex;

pub(crate) fn scan_script(script: &str, usage: &mut UsageIndex) {
    let mut chars = script.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' | '`' => {
                if let Some(literal) = read_literal(&mut chars, c) {
                    for word in literal
                        .split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':'))
                    {
                        usage.insert_class(word);
                    }
                }
            }
            '/' => {
                let next = chars.peek().copied();
                match next {
                    Some('/') => {
                        for c in chars.by_ref() {
                            if c == '\n' {
                                break;
                            }
                        }
                    }
                    Some('*') => {
                        chars.next();
                        let mut prev = '\0';
                        for c in chars.by_ref() {
                            if prev == '*' && c == '/' {
                                break;
                            }
                            prev = c;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// Reads a string literal after its opening quote, keeping escapes as
/// written. Returns `None` if the literal is never closed.
fn read_literal(chars: &mut Peekable<Chars>, quote: char) -> Option<String> {
    let mut literal = String::new();

    while let Some(c) = chars.next() {
        if c == quote {
            return Some(literal);
        }

        literal.push(c);

        if c == '\\' {
            literal.push(chars.next()?);
        }
    }

    None
}
