use crate::{
    error::CssResult,
    lexer::{Lexer, Token},
    utils::{as_hex, hex_char_for, is_name, is_name_start, opposite_bracket},
};

pub(crate) trait BaseParser {
    fn toks(&self) -> &Lexer;
    fn toks_mut(&mut self) -> &mut Lexer;

    fn whitespace_without_comments(&mut self) {
        while matches!(
            self.toks().peek(),
            Some(Token {
                kind: ' ' | '\t' | '\n',
                ..
            })
        ) {
            self.toks_mut().next();
        }
    }

    fn whitespace(&mut self) -> CssResult<()> {
        loop {
            self.whitespace_without_comments();

            if !self.scan_comment()? {
                break;
            }
        }

        Ok(())
    }

    /// Plain CSS only has `/* */` comments
    fn scan_comment(&mut self) -> CssResult<bool> {
        if !self.next_matches("/*") {
            return Ok(false);
        }

        self.skip_loud_comment()?;

        Ok(true)
    }

    fn next_matches(&mut self, s: &str) -> bool {
        for (idx, c) in s.chars().enumerate() {
            match self.toks().peek_n(idx) {
                Some(Token { kind, .. }) if kind == c => {}
                _ => return false,
            }
        }

        true
    }

    fn skip_loud_comment(&mut self) -> CssResult<()> {
        debug_assert!(self.next_matches("/*"));
        self.toks_mut().next();
        self.toks_mut().next();

        while let Some(next) = self.toks_mut().next() {
            if next.kind != '*' {
                continue;
            }

            while self.scan_char('*') {}

            if self.scan_char('/') {
                return Ok(());
            }
        }

        Err(("expected more input.", self.toks().current_span()).into())
    }

    fn scan_char(&mut self, c: char) -> bool {
        if let Some(Token { kind, .. }) = self.toks().peek() {
            if kind == c {
                self.toks_mut().next();
                return true;
            }
        }

        false
    }

    fn scan(&mut self, s: &str) -> bool {
        let start = self.toks().cursor();
        for c in s.chars() {
            if !self.scan_char(c) {
                self.toks_mut().set_cursor(start);
                return false;
            }
        }

        true
    }

    fn parse_identifier(&mut self) -> CssResult<String> {
        let mut text = String::new();

        if self.scan_char('-') {
            text.push('-');

            if self.scan_char('-') {
                text.push('-');
                self.parse_identifier_body(&mut text)?;
                return Ok(text);
            }
        }

        match self.toks().peek() {
            Some(Token { kind, .. }) if is_name_start(kind) => {
                self.toks_mut().next();
                text.push(kind);
            }
            Some(Token { kind: '\\', .. }) => {
                text.push_str(&self.parse_escape(true)?);
            }
            Some(..) | None => {
                return Err(("Expected identifier.", self.toks().current_span()).into())
            }
        }

        self.parse_identifier_body(&mut text)?;

        Ok(text)
    }

    fn parse_identifier_body(&mut self, buffer: &mut String) -> CssResult<()> {
        while let Some(tok) = self.toks().peek() {
            if is_name(tok.kind) {
                self.toks_mut().next();
                buffer.push(tok.kind);
            } else if tok.kind == '\\' {
                buffer.push_str(&self.parse_escape(false)?);
            } else {
                break;
            }
        }

        Ok(())
    }

    fn parse_escape(&mut self, identifier_start: bool) -> CssResult<String> {
        let start = self.toks().cursor();
        self.expect_char('\\')?;
        let mut value = 0;
        let first = match self.toks().peek() {
            Some(t) => t,
            None => return Err(("Expected expression.", self.toks().current_span()).into()),
        };
        if first.kind == '\n' {
            return Err(("Expected escape sequence.", self.toks().current_span()).into());
        } else if first.kind.is_ascii_hexdigit() {
            for _ in 0..6 {
                let next = match self.toks().peek() {
                    Some(t) => t,
                    None => break,
                };
                if !next.kind.is_ascii_hexdigit() {
                    break;
                }
                value *= 16;
                value += as_hex(next.kind);
                self.toks_mut().next();
            }
            if matches!(
                self.toks().peek(),
                Some(Token {
                    kind: ' ' | '\n' | '\t',
                    ..
                })
            ) {
                self.toks_mut().next();
            }
        } else {
            value = first.kind as u32;
            self.toks_mut().next();
        }

        let c = std::char::from_u32(value)
            .ok_or_else(|| ("Invalid Unicode code point.", self.toks().span_from(start)))?;
        if (identifier_start && is_name_start(c) && !c.is_ascii_digit())
            || (!identifier_start && is_name(c))
        {
            Ok(c.to_string())
        } else if value <= 0x1F || value == 0x7F || (identifier_start && c.is_ascii_digit()) {
            let mut buf = String::with_capacity(4);
            buf.push('\\');
            if value > 0xF {
                buf.push(hex_char_for(value >> 4));
            }
            buf.push(hex_char_for(value & 0xF));
            buf.push(' ');
            Ok(buf)
        } else {
            Ok(format!("\\{}", c))
        }
    }

    fn expect_char(&mut self, c: char) -> CssResult<()> {
        match self.toks().peek() {
            Some(tok) if tok.kind == c => {
                self.toks_mut().next();
                Ok(())
            }
            Some(..) | None => {
                Err((format!("expected \"{}\".", c), self.toks().current_span()).into())
            }
        }
    }

    fn parse_string(&mut self) -> CssResult<String> {
        let quote = match self.toks_mut().next() {
            Some(Token {
                kind: q @ ('\'' | '"'),
                ..
            }) => q,
            Some(..) | None => return Err(("Expected string.", self.toks().current_span()).into()),
        };

        let mut buffer = String::new();

        let mut found_matching_quote = false;

        while let Some(next) = self.toks().peek() {
            if next.kind == quote {
                self.toks_mut().next();
                found_matching_quote = true;
                break;
            } else if next.kind == '\n' {
                break;
            } else if next.kind == '\\' {
                if matches!(self.toks().peek_n(1), Some(Token { kind: '\n', .. })) {
                    self.toks_mut().next();
                    self.toks_mut().next();
                } else {
                    buffer.push(self.consume_escaped_char()?);
                }
            } else {
                self.toks_mut().next();
                buffer.push(next.kind);
            }
        }

        if !found_matching_quote {
            return Err((
                format!("Expected {quote}.", quote = quote),
                self.toks().current_span(),
            )
                .into());
        }

        Ok(buffer)
    }

    fn consume_escaped_char(&mut self) -> CssResult<char> {
        self.expect_char('\\')?;

        match self.toks().peek() {
            None => Ok('\u{FFFD}'),
            Some(Token { kind: '\n', .. }) => {
                Err(("Expected escape sequence.", self.toks().current_span()).into())
            }
            Some(Token { kind, .. }) if kind.is_ascii_hexdigit() => {
                let mut value = 0;
                for _ in 0..6 {
                    let next = match self.toks().peek() {
                        Some(c) => c,
                        None => break,
                    };
                    if !next.kind.is_ascii_hexdigit() {
                        break;
                    }
                    self.toks_mut().next();
                    value = (value << 4) + as_hex(next.kind);
                }

                if matches!(self.toks().peek(), Some(tok) if tok.kind.is_ascii_whitespace()) {
                    self.toks_mut().next();
                }

                if value == 0 || (0xD800..=0xDFFF).contains(&value) || value >= 0x0010_FFFF {
                    Ok('\u{FFFD}')
                } else {
                    Ok(char::from_u32(value).unwrap_or('\u{FFFD}'))
                }
            }
            Some(Token { kind, .. }) => {
                self.toks_mut().next();
                Ok(kind)
            }
        }
    }

    /// Consumes text up to, but not including, the first character in `stop`
    /// that is not nested inside brackets or a string.
    ///
    /// Comments are dropped and every run of whitespace outside of strings
    /// becomes a single space, with none at either end.
    fn consume_raw_until(&mut self, stop: &[char]) -> CssResult<String> {
        let mut buffer = String::new();
        let mut brackets = Vec::new();
        let mut pending_space = false;
        let mut after_comment = false;

        while let Some(tok) = self.toks().peek() {
            match tok.kind {
                ' ' | '\t' | '\n' => {
                    self.toks_mut().next();
                    pending_space = true;
                    continue;
                }
                '/' if matches!(self.toks().peek_n(1), Some(Token { kind: '*', .. })) => {
                    self.skip_loud_comment()?;
                    after_comment = true;
                    continue;
                }
                c if brackets.is_empty() && stop.contains(&c) => break,
                _ => {}
            }

            // a comment still separates two names, so `1px/**/2px` must not
            // become `1px2px`
            let glued = after_comment
                && buffer.ends_with(is_name)
                && (is_name(tok.kind) || tok.kind == '\\');

            if (pending_space || glued) && !buffer.is_empty() {
                buffer.push(' ');
            }
            pending_space = false;
            after_comment = false;

            match tok.kind {
                '"' | '\'' => {
                    buffer.push_str(&self.fallible_raw_text(Self::parse_string)?);
                }
                '\\' => {
                    self.toks_mut().next();
                    buffer.push('\\');
                    if let Some(escaped) = self.toks_mut().next() {
                        buffer.push(escaped.kind);
                    }
                }
                '(' | '[' | '{' => {
                    self.toks_mut().next();
                    buffer.push(tok.kind);
                    brackets.push(opposite_bracket(tok.kind));
                }
                ')' | ']' | '}' => {
                    self.toks_mut().next();
                    buffer.push(tok.kind);
                    if brackets.last() == Some(&tok.kind) {
                        brackets.pop();
                    }
                }
                c => {
                    self.toks_mut().next();
                    buffer.push(c);
                }
            }
        }

        if let Some(last) = brackets.pop() {
            self.expect_char(last)?;
        }

        Ok(buffer)
    }

    /// Returns whether the scanner is immediately before a plain CSS identifier.
    ///
    /// This is based on [the CSS algorithm][], but it assumes all backslashes
    /// start escapes.
    ///
    /// [the CSS algorithm]: https://drafts.csswg.org/css-syntax-3/#would-start-an-identifier
    fn looking_at_identifier(&self) -> bool {
        match self.toks().peek() {
            Some(Token { kind, .. }) if is_name_start(kind) || kind == '\\' => return true,
            Some(Token { kind: '-', .. }) => {}
            Some(..) | None => return false,
        }

        match self.toks().peek_n(1) {
            Some(Token { kind, .. }) if is_name_start(kind) || kind == '-' || kind == '\\' => true,
            Some(..) | None => false,
        }
    }

    fn fallible_raw_text<T>(
        &mut self,
        func: impl Fn(&mut Self) -> CssResult<T>,
    ) -> CssResult<String> {
        let start = self.toks().cursor();
        func(self)?;
        Ok(self.toks().raw_text(start))
    }
}
