use std::sync::Arc;

use codemap::{File, Span};

/// A single source character. Line endings and form feeds are folded to `\n`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Token {
    pub kind: char,
    /// Byte offset of the character in the lexed text
    pos: u32,
}

#[derive(Debug, Clone, Copy)]
enum Origin {
    /// The tokens are a verbatim copy of a file and map back to it exactly
    File(Span),

    /// The tokens were derived from the source under this span, e.g. a
    /// prelude after whitespace folding. Offsets no longer line up with the
    /// file, so every position reports the whole span.
    Detached(Span),
}

#[derive(Debug, Clone)]
pub(crate) struct Lexer {
    tokens: Vec<Token>,
    cursor: usize,
    origin: Origin,
}

impl Lexer {
    pub fn new_from_file(file: &Arc<File>) -> Self {
        Self {
            tokens: tokenize(file.source()),
            cursor: 0,
            origin: Origin::File(file.span),
        }
    }

    /// Lexes text derived from the source covered by `span`
    pub fn new_detached(text: &str, span: Span) -> Self {
        Self {
            tokens: tokenize(text),
            cursor: 0,
            origin: Origin::Detached(span),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub fn peek(&self) -> Option<Token> {
        self.peek_n(0)
    }

    pub fn peek_n(&self, n: usize) -> Option<Token> {
        self.tokens.get(self.cursor + n).copied()
    }

    pub fn next_char_is(&self, c: char) -> bool {
        self.peek().map_or(false, |tok| tok.kind == c)
    }

    /// The characters consumed since `start`
    pub fn raw_text(&self, start: usize) -> String {
        self.tokens[start..self.cursor]
            .iter()
            .map(|tok| tok.kind)
            .collect()
    }

    /// The span of the next character, or of the last one once the input is
    /// exhausted
    pub fn current_span(&self) -> Span {
        self.span_of(self.cursor)
    }

    /// From the character at `start` through the last one consumed
    pub fn span_from(&self, start: usize) -> Span {
        let end = self.span_of(self.cursor.saturating_sub(1));

        self.span_of(start).merge(end)
    }

    fn span_of(&self, idx: usize) -> Span {
        let file_span = match self.origin {
            Origin::File(span) => span,
            Origin::Detached(span) => return span,
        };

        match self.tokens.get(idx).or_else(|| self.tokens.last()) {
            Some(tok) => {
                let start = u64::from(tok.pos);
                file_span.subspan(start, start + tok.kind.len_utf8() as u64)
            }
            None => file_span.subspan(0, 0),
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let tok = self.peek()?;
        self.cursor += 1;
        Some(tok)
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let kind = match c {
            '\r' => {
                chars.next_if(|&(_, next)| next == '\n');
                '\n'
            }
            '\x0C' => '\n',
            c => c,
        };

        tokens.push(Token {
            kind,
            pos: pos as u32,
        });
    }

    tokens
}
