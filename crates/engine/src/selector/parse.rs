use codemap::Span;

use crate::{
    error::CssResult,
    lexer::{Lexer, Token},
    parse::BaseParser,
};

use super::{Attribute, Combinator, Pseudo, SelectorChain, SelectorComponent, SelectorList};

/// Parses the prelude of a style rule into a [`SelectorList`].
///
/// Only plain CSS selectors are understood. Namespaces, nesting selectors and
/// anything else produce an error, which callers turn into a
/// [`crate::css_ast::BadStyleRule`].
pub(crate) struct SelectorParser {
    pub toks: Lexer,
    span: Span,
}

impl BaseParser for SelectorParser {
    fn toks(&self) -> &Lexer {
        &self.toks
    }

    fn toks_mut(&mut self) -> &mut Lexer {
        &mut self.toks
    }
}

impl SelectorParser {
    pub fn new(toks: Lexer, span: Span) -> Self {
        Self { toks, span }
    }

    pub fn parse(mut self) -> CssResult<SelectorList> {
        let list = self.parse_selector_list()?;
        if self.toks.peek().is_some() {
            return Err(("expected selector.", self.span).into());
        }
        Ok(list)
    }

    fn parse_selector_list(&mut self) -> CssResult<SelectorList> {
        let mut chains = vec![self.parse_selector_chain()?];

        while self.scan_char(',') {
            chains.push(self.parse_selector_chain()?);
        }

        Ok(SelectorList::new(chains))
    }

    /// Consumes whitespace and comments, returning whether there were any
    fn eat_whitespace(&mut self) -> CssResult<bool> {
        let start = self.toks.cursor();
        self.whitespace()?;
        Ok(self.toks.cursor() != start)
    }

    fn parse_selector_chain(&mut self) -> CssResult<SelectorChain> {
        let mut components: Vec<SelectorComponent> = Vec::new();

        loop {
            let had_whitespace = self.eat_whitespace()?;
            let after_compound = matches!(components.last(), Some(last) if !last.is_combinator());

            match self.toks.peek() {
                Some(Token { kind, .. }) if Combinator::from_char(kind).is_some() => {
                    if !after_compound {
                        return Err(("expected selector.", self.span).into());
                    }

                    self.toks.next();
                    if let Some(combinator) = Combinator::from_char(kind) {
                        components.push(SelectorComponent::Combinator(combinator));
                    }
                }
                Some(Token { kind: ',', .. }) | None => break,
                Some(Token { kind, .. })
                    if is_simple_selector_start(kind) || self.looking_at_identifier() =>
                {
                    if after_compound {
                        if !had_whitespace {
                            return Err(("expected selector.", self.span).into());
                        }

                        components.push(SelectorComponent::Combinator(Combinator::Descendant));
                    }

                    self.parse_compound_selector(&mut components)?;
                }
                Some(..) => return Err(("expected selector.", self.span).into()),
            }
        }

        match components.last() {
            Some(last) if !last.is_combinator() => Ok(SelectorChain::new(components)),
            Some(..) | None => Err(("expected selector.", self.span).into()),
        }
    }

    fn parse_compound_selector(
        &mut self,
        components: &mut Vec<SelectorComponent>,
    ) -> CssResult<()> {
        components.push(self.parse_simple_selector()?);

        while let Some(Token { kind, .. }) = self.toks.peek() {
            if !is_simple_selector_start(kind) {
                break;
            }

            components.push(self.parse_simple_selector()?);
        }

        Ok(())
    }

    fn parse_simple_selector(&mut self) -> CssResult<SelectorComponent> {
        match self.toks.peek() {
            Some(Token { kind: '[', .. }) => self.parse_attribute_selector(),
            Some(Token { kind: '.', .. }) => self.parse_class_selector(),
            Some(Token { kind: '#', .. }) => self.parse_id_selector(),
            Some(Token { kind: ':', .. }) => self.parse_pseudo_selector(),
            _ => self.parse_type_or_universal_selector(),
        }
    }

    fn parse_attribute_selector(&mut self) -> CssResult<SelectorComponent> {
        self.toks.next();
        Ok(SelectorComponent::Attribute(Box::new(
            Attribute::from_tokens(self)?,
        )))
    }

    fn parse_class_selector(&mut self) -> CssResult<SelectorComponent> {
        self.toks.next();
        Ok(SelectorComponent::Class(self.parse_identifier()?))
    }

    fn parse_id_selector(&mut self) -> CssResult<SelectorComponent> {
        self.toks.next();
        Ok(SelectorComponent::Id(self.parse_identifier()?))
    }

    fn parse_pseudo_selector(&mut self) -> CssResult<SelectorComponent> {
        self.toks.next();
        let element = self.scan_char(':');
        let name = self.parse_identifier()?;

        let argument = if self.scan_char('(') {
            let argument = self.consume_raw_until(&[')'])?;
            self.expect_char(')')?;
            Some(argument)
        } else {
            None
        };

        let is_element = element || is_fake_pseudo_element(&name);

        let pseudo = Pseudo {
            name,
            argument,
            is_syntactic_class: !element,
        };

        Ok(if is_element {
            SelectorComponent::PseudoElement(pseudo)
        } else {
            SelectorComponent::PseudoClass(pseudo)
        })
    }

    fn parse_type_or_universal_selector(&mut self) -> CssResult<SelectorComponent> {
        let component = if self.scan_char('*') {
            SelectorComponent::Element("*".to_owned())
        } else {
            SelectorComponent::Element(self.parse_identifier()?)
        };

        if self.toks.next_char_is('|') {
            return Err(("Namespaced selectors aren't supported.", self.span).into());
        }

        Ok(component)
    }
}

/// Returns whether `c` can start a simple selector other than a type
/// selector.
fn is_simple_selector_start(c: char) -> bool {
    matches!(c, '*' | '[' | '.' | '#' | ':')
}

/// Returns whether `name` is the name of a pseudo-element that can be written
/// with pseudo-class syntax (`:before`, `:after`, `:first-line`, or
/// `:first-letter`)
fn is_fake_pseudo_element(name: &str) -> bool {
    match name.as_bytes().first() {
        Some(b'a') | Some(b'A') => name.to_ascii_lowercase() == "after",
        Some(b'b') | Some(b'B') => name.to_ascii_lowercase() == "before",
        Some(b'f') | Some(b'F') => matches!(
            name.to_ascii_lowercase().as_str(),
            "first-line" | "first-letter"
        ),
        _ => false,
    }
}
