use super::Attribute;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorComponent {
    /// `.name`
    Class(String),

    /// A type selector, or `*` for the universal selector
    Element(String),

    /// `#name`
    Id(String),

    Attribute(Box<Attribute>),

    PseudoClass(Pseudo),

    /// `::name`, or one of the legacy pseudo-elements written with a single
    /// colon such as `:before`
    PseudoElement(Pseudo),

    Combinator(Combinator),
}

impl SelectorComponent {
    pub fn is_combinator(&self) -> bool {
        matches!(self, SelectorComponent::Combinator(..))
    }

    pub fn is_universal(&self) -> bool {
        matches!(self, SelectorComponent::Element(name) if name == "*")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pseudo {
    /// The name of this selector, without any colons
    pub name: String,

    /// The text between the parentheses, if any
    pub argument: Option<String>,

    /// Whether this was written with a single colon
    pub is_syntactic_class: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Whitespace between two compounds
    Descendant,

    /// `>`
    Child,

    /// `+`
    NextSibling,

    /// `~`
    FollowingSibling,
}

impl Combinator {
    pub(crate) fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '>' => Self::Child,
            '+' => Self::NextSibling,
            '~' => Self::FollowingSibling,
            _ => return None,
        })
    }

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::FollowingSibling => "~",
        }
    }
}
