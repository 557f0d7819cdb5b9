use codemap::CodeMap;

use crate::{
    lexer::{Lexer, Token},
    parse::BaseParser,
    UsageIndex,
};

/// Elements whose content is text rather than markup
const RAW_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "textarea", "title"];

pub(crate) fn scan_markup(markup: &str, usage: &mut UsageIndex) {
    let mut map = CodeMap::new();
    let file = map.add_file(String::new(), markup.to_owned());

    MarkupScanner {
        toks: Lexer::new_from_file(&file),
        usage,
    }
    .run();
}

/// A forgiving tag tokenizer. It never fails: anything it can't make sense
/// of is skipped.
struct MarkupScanner<'a> {
    toks: Lexer,
    usage: &'a mut UsageIndex,
}

impl BaseParser for MarkupScanner<'_> {
    fn toks(&self) -> &Lexer {
        &self.toks
    }

    fn toks_mut(&mut self) -> &mut Lexer {
        &mut self.toks
    }
}

impl MarkupScanner<'_> {
    fn run(&mut self) {
        while let Some(tok) = self.toks.next() {
            if tok.kind != '<' {
                continue;
            }

            if self.scan("!--") {
                self.skip_until("-->");
            } else if self.scan_char('!') || self.scan_char('?') || self.scan_char('/') {
                self.skip_until(">");
            } else if matches!(self.toks.peek(), Some(Token { kind, .. }) if kind.is_ascii_alphabetic())
            {
                self.scan_element();
            }
        }
    }

    fn scan_element(&mut self) {
        let name = self
            .take_while(|c| !c.is_whitespace() && c != '/' && c != '>')
            .to_ascii_lowercase();
        self.usage.insert_tag(&name);

        let is_self_closing = loop {
            self.whitespace_without_comments();

            match self.toks.peek() {
                Some(Token { kind: '>', .. }) => {
                    self.toks.next();
                    break false;
                }
                Some(Token { kind: '/', .. }) => {
                    self.toks.next();
                    if self.scan_char('>') {
                        break true;
                    }
                }
                Some(..) => self.scan_attribute(),
                None => return,
            }
        };

        if !is_self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            self.skip_raw_text(&name);
        }
    }

    fn scan_attribute(&mut self) {
        let name = self
            .take_while(|c| !c.is_whitespace() && !matches!(c, '=' | '>' | '/'))
            .to_ascii_lowercase();

        if name.is_empty() {
            self.toks.next();
            return;
        }

        self.whitespace_without_comments();

        let value = if self.scan_char('=') {
            self.whitespace_without_comments();

            match self.toks.peek() {
                Some(Token {
                    kind: quote @ ('"' | '\''),
                    ..
                }) => {
                    self.toks.next();
                    let value = self.take_while(|c| c != quote);
                    self.toks.next();
                    Some(value)
                }
                Some(..) => Some(self.take_while(|c| !c.is_whitespace() && c != '>')),
                None => Some(String::new()),
            }
        } else {
            None
        };

        self.usage.insert_attribute(&name, value.as_deref());

        if let ("class", Some(classes)) = (name.as_str(), value) {
            for class in classes.split_ascii_whitespace() {
                self.usage.insert_class(class);
            }
        }
    }

    /// Skips the content of an element like `<script>` up to and including
    /// its closing tag
    fn skip_raw_text(&mut self, name: &str) {
        while let Some(tok) = self.toks.next() {
            if tok.kind != '<' || !self.scan_char('/') {
                continue;
            }

            let start = self.toks.cursor();
            if self
                .take_while(|c| c.is_ascii_alphanumeric())
                .eq_ignore_ascii_case(name)
            {
                self.skip_until(">");
                return;
            }
            self.toks.set_cursor(start);
        }
    }

    fn skip_until(&mut self, terminator: &str) {
        while self.toks.peek().is_some() {
            if self.scan(terminator) {
                return;
            }
            self.toks.next();
        }
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut text = String::new();

        while let Some(Token { kind, .. }) = self.toks.peek() {
            if !predicate(kind) {
                break;
            }
            self.toks.next();
            text.push(kind);
        }

        text
    }
}
