use crate::{selector::SelectorList, utils::unvendor};

/// At-rules whose blocks hold declarations rather than rules
const DECLARATION_AT_RULES: [&str; 6] = [
    "font-face",
    "page",
    "property",
    "counter-style",
    "font-palette-values",
    "viewport",
];

/// An ordered sequence of rules: the stylesheet root, or the materialized
/// body of an at-rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleList {
    pub rules: Vec<Rule>,
}

impl RuleList {
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub(crate) fn retain_mut(&mut self, f: impl FnMut(&mut Rule) -> bool) {
        self.rules.retain_mut(f);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    List(RuleList),
    Style(StyleRule),
    AtRule(AtRule),
    BadStyle(BadStyleRule),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selectors: SelectorList,
    pub block: DeclarationBlock,
}

impl StyleRule {
    pub const fn new(selectors: SelectorList, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors,
            block: DeclarationBlock::Parsed(declarations),
        }
    }
}

/// The body of a style rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationBlock {
    /// A flat list of declarations
    Parsed(Vec<Declaration>),

    /// Block text that could not be read as a flat declaration list, such as
    /// a block containing nested rules. Kept verbatim.
    Opaque(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    /// Builds a declaration, moving a trailing `!important` out of `value`
    pub fn new(name: impl Into<String>, value: &str) -> Self {
        let (value, important) = split_important(value.trim());

        Self {
            name: name.into(),
            value: value.to_owned(),
            important,
        }
    }

    pub fn is_custom_property(&self) -> bool {
        self.name.starts_with("--")
    }
}

fn split_important(value: &str) -> (&str, bool) {
    if let Some(idx) = value.rfind('!') {
        if value[idx + 1..].trim().eq_ignore_ascii_case("important") {
            return (value[..idx].trim_end(), true);
        }
    }

    (value, false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    /// The name, without the leading `@`
    pub name: String,
    pub prelude: String,
    pub body: Option<AtRuleBody>,
}

impl AtRule {
    pub fn is_keyframes(&self) -> bool {
        self.name.to_ascii_lowercase().ends_with("keyframes")
    }

    /// The animation name a keyframes rule declares
    pub fn keyframes_name(&self) -> Option<&str> {
        self.prelude.split_whitespace().next()
    }

    /// Whether the block holds declarations, as in `@font-face`
    pub fn has_declaration_body(&self) -> bool {
        let name = unvendor(&self.name).to_ascii_lowercase();

        DECLARATION_AT_RULES.contains(&name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtRuleBody {
    /// A structured body, as built by hand
    Rules(RuleList),

    /// Block text as it appeared between the braces, materialized into a
    /// [`RuleList`] only while a pass is working on it
    Raw(String),
}

/// A style rule whose selector could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadStyleRule {
    pub selector_text: String,
    pub block: String,
}
