use std::sync::Arc;

use codemap::{CodeMap, File, Span};

use crate::{
    ast::{Declaration, RuleList},
    error::CssResult,
    lexer::Lexer,
    selector::{SelectorList, SelectorParser},
};

pub(crate) use base::BaseParser;
pub(crate) use stylesheet::{CssParser, DeclarationParser};

mod base;
mod stylesheet;

/// Parses an entire file of CSS into a rule tree
pub(crate) fn parse_rule_list(file: &Arc<File>) -> CssResult<RuleList> {
    CssParser::new(Lexer::new_from_file(file)).parse()
}

/// Parses free-standing CSS text that has no file of its own, such as a
/// block body being reformatted for output
pub(crate) fn parse_fragment(text: &str) -> CssResult<RuleList> {
    let mut map = CodeMap::new();
    let file = map.add_file(String::new(), text.to_owned());
    parse_rule_list(&file)
}

/// Reads block text as a flat list of declarations, returning `None` when the
/// block holds anything else
pub(crate) fn parse_declaration_list(text: &str, span: Span) -> Option<Vec<Declaration>> {
    DeclarationParser::new(Lexer::new_detached(text, span))
        .parse()
        .ok()
        .flatten()
}

pub(crate) fn parse_selector_list(text: &str, span: Span) -> CssResult<SelectorList> {
    SelectorParser::new(Lexer::new_detached(text, span), span).parse()
}

/// Like [`parse_declaration_list`], for text that has no file of its own
pub(crate) fn parse_declaration_fragment(text: &str) -> Option<Vec<Declaration>> {
    let mut map = CodeMap::new();
    let file = map.add_file(String::new(), text.to_owned());
    parse_declaration_list(text, file.span)
}
