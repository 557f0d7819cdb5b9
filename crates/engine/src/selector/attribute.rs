use crate::{error::CssResult, lexer::Token, parse::BaseParser};

use super::SelectorParser;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// The unquoted value, absent for `[name]`
    pub value: Option<String>,
    pub op: AttributeOp,
    pub modifier: Option<char>,
}

fn attribute_name(parser: &mut SelectorParser) -> CssResult<String> {
    match parser.toks.peek() {
        Some(Token { kind: '*' | '|', .. }) => {
            return Err((
                "Namespaced attribute selectors aren't supported.",
                parser.toks.current_span(),
            )
                .into())
        }
        Some(..) => {}
        None => return Err(("Expected identifier.", parser.toks.current_span()).into()),
    }

    let name = parser.parse_identifier()?;

    match (parser.toks.peek(), parser.toks.peek_n(1)) {
        (Some(Token { kind: '|', .. }), Some(Token { kind: '=', .. })) => Ok(name),
        (Some(Token { kind: '|', .. }), _) => Err((
            "Namespaced attribute selectors aren't supported.",
            parser.toks.current_span(),
        )
            .into()),
        _ => Ok(name),
    }
}

fn attribute_operator(parser: &mut SelectorParser) -> CssResult<AttributeOp> {
    let op = match parser.toks.next() {
        Some(Token { kind: '=', .. }) => return Ok(AttributeOp::Equals),
        Some(Token { kind: '~', .. }) => AttributeOp::Include,
        Some(Token { kind: '|', .. }) => AttributeOp::Dash,
        Some(Token { kind: '^', .. }) => AttributeOp::Prefix,
        Some(Token { kind: '$', .. }) => AttributeOp::Suffix,
        Some(Token { kind: '*', .. }) => AttributeOp::Contains,
        Some(..) | None => return Err(("Expected \"]\".", parser.toks.current_span()).into()),
    };

    parser.expect_char('=')?;

    Ok(op)
}

impl Attribute {
    /// Parses the remainder of an attribute selector, after the opening `[`
    pub(crate) fn from_tokens(parser: &mut SelectorParser) -> CssResult<Attribute> {
        parser.whitespace_without_comments();
        let name = attribute_name(parser)?;
        parser.whitespace_without_comments();

        if parser.scan_char(']') {
            return Ok(Attribute {
                name,
                value: None,
                op: AttributeOp::Any,
                modifier: None,
            });
        }

        let op = attribute_operator(parser)?;
        parser.whitespace_without_comments();

        let value = match parser.toks.peek() {
            Some(Token {
                kind: '\'' | '"', ..
            }) => parser.parse_string()?,
            Some(..) => parser.parse_identifier()?,
            None => return Err(("expected more input.", parser.toks.current_span()).into()),
        };
        parser.whitespace_without_comments();

        let modifier = match parser.toks.peek() {
            Some(Token {
                kind: c @ ('a'..='z' | 'A'..='Z'),
                ..
            }) => {
                parser.toks.next();
                parser.whitespace_without_comments();
                Some(c)
            }
            _ => None,
        };

        parser.expect_char(']')?;

        Ok(Attribute {
            name,
            value: Some(value),
            op,
            modifier,
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AttributeOp {
    /// \[attr\]
    ///
    /// Represents elements with an attribute name of `attr`
    Any,

    /// [attr=value]
    ///
    /// Represents elements with an attribute name of `attr`
    /// whose value is exactly `value`
    Equals,

    /// [attr~=value]
    ///
    /// Represents elements with an attribute name of `attr`
    /// whose value is a whitespace-separated list of words,
    /// one of which is exactly `value`
    Include,

    /// [attr|=value]
    ///
    /// Represents elements with an attribute name of `attr`
    /// whose value can be exactly value or can begin with
    /// `value` immediately followed by a hyphen (`-`)
    Dash,

    /// [attr^=value]
    Prefix,

    /// [attr$=value]
    Suffix,

    /// [attr*=value]
    ///
    /// Represents elements with an attribute name of `attr`
    /// whose value contains at least one occurrence of
    /// `value` within the string
    Contains,
}

impl From<AttributeOp> for &'static str {
    #[inline]
    fn from(op: AttributeOp) -> Self {
        match op {
            AttributeOp::Any => "",
            AttributeOp::Equals => "=",
            AttributeOp::Include => "~=",
            AttributeOp::Dash => "|=",
            AttributeOp::Prefix => "^=",
            AttributeOp::Suffix => "$=",
            AttributeOp::Contains => "*=",
        }
    }
}
