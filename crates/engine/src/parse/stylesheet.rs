use crate::{
    ast::{
        AtRule, AtRuleBody, BadStyleRule, Declaration, DeclarationBlock, Rule, RuleList,
        StyleRule,
    },
    error::CssResult,
    lexer::{Lexer, Token},
};

use super::{parse_declaration_list, parse_selector_list, BaseParser};

/// Parses plain CSS into a [`RuleList`].
///
/// At-rule bodies are kept as raw text; they are only parsed when a pass
/// needs to look inside them.
pub(crate) struct CssParser {
    pub toks: Lexer,
}

impl BaseParser for CssParser {
    fn toks(&self) -> &Lexer {
        &self.toks
    }

    fn toks_mut(&mut self) -> &mut Lexer {
        &mut self.toks
    }
}

impl CssParser {
    pub fn new(toks: Lexer) -> Self {
        Self { toks }
    }

    pub fn parse(mut self) -> CssResult<RuleList> {
        let mut rules = Vec::new();

        loop {
            self.skip_trivia()?;

            match self.toks.peek() {
                Some(Token { kind: '@', .. }) => rules.push(self.parse_at_rule()?),
                Some(Token { kind: '}', .. }) => {
                    return Err(("unmatched \"}\".", self.toks.current_span()).into())
                }
                Some(..) => rules.push(self.parse_qualified_rule()?),
                None => break,
            }
        }

        Ok(RuleList::new(rules))
    }

    /// Skips whitespace, comments, stray semicolons and the `<!--`/`-->`
    /// tokens that may surround a stylesheet embedded in HTML
    fn skip_trivia(&mut self) -> CssResult<()> {
        loop {
            self.whitespace()?;

            if !(self.scan_char(';') || self.scan("<!--") || self.scan("-->")) {
                return Ok(());
            }
        }
    }

    fn parse_at_rule(&mut self) -> CssResult<Rule> {
        self.expect_char('@')?;
        let name = self.parse_identifier()?;
        let prelude = self.consume_raw_until(&[';', '{', '}'])?;

        let body = match self.toks.peek() {
            Some(Token { kind: '{', .. }) => {
                self.toks.next();
                Some(AtRuleBody::Raw(self.parse_block_body()?))
            }
            Some(Token { kind: ';', .. }) => {
                self.toks.next();
                None
            }
            Some(..) | None => None,
        };

        Ok(Rule::AtRule(AtRule {
            name,
            prelude,
            body,
        }))
    }

    fn parse_qualified_rule(&mut self) -> CssResult<Rule> {
        let start = self.toks.cursor();
        let prelude = self.consume_raw_until(&['{', ';', '}'])?;
        let prelude_span = self.toks.span_from(start);

        if !self.scan_char('{') {
            return Err(("expected \"{\".", self.toks.current_span()).into());
        }

        let block_start = self.toks.cursor();
        let block = self.parse_block_body()?;
        let block_span = self.toks.span_from(block_start);

        Ok(match parse_selector_list(&prelude, prelude_span) {
            Ok(selectors) => Rule::Style(StyleRule {
                selectors,
                block: match parse_declaration_list(&block, block_span) {
                    Some(declarations) => DeclarationBlock::Parsed(declarations),
                    None => DeclarationBlock::Opaque(block),
                },
            }),
            Err(..) => Rule::BadStyle(BadStyleRule {
                selector_text: prelude,
                block,
            }),
        })
    }

    /// Consumes the text of a block and its closing brace, after the opening
    /// brace has been consumed
    fn parse_block_body(&mut self) -> CssResult<String> {
        let text = self.consume_raw_until(&['}'])?;

        if !self.scan_char('}') {
            return Err(("expected \"}\".", self.toks.current_span()).into());
        }

        Ok(text)
    }
}

/// Reads the body of a block as `name: value` pairs
pub(crate) struct DeclarationParser {
    pub toks: Lexer,
}

impl BaseParser for DeclarationParser {
    fn toks(&self) -> &Lexer {
        &self.toks
    }

    fn toks_mut(&mut self) -> &mut Lexer {
        &mut self.toks
    }
}

impl DeclarationParser {
    pub fn new(toks: Lexer) -> Self {
        Self { toks }
    }

    /// Returns `Ok(None)` when the block is well formed but isn't a flat list
    /// of declarations, for example because it contains nested rules
    pub fn parse(mut self) -> CssResult<Option<Vec<Declaration>>> {
        let mut declarations = Vec::new();

        loop {
            self.whitespace()?;
            while self.scan_char(';') {
                self.whitespace()?;
            }

            if self.toks.peek().is_none() {
                break;
            }

            let name = self.consume_raw_until(&[':', ';', '{', '}'])?;

            if name.is_empty() || name.contains(' ') || !self.scan_char(':') {
                return Ok(None);
            }

            let value = self.consume_raw_until(&[';', '{', '}'])?;

            match self.toks.peek() {
                Some(Token { kind: ';', .. }) => {
                    self.toks.next();
                }
                Some(..) => return Ok(None),
                None => {}
            }

            declarations.push(Declaration::new(name, &value));
        }

        Ok(Some(declarations))
    }
}
