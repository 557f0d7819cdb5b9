use super::SelectorComponent;

/// A comma-separated list of selectors
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorList {
    /// The alternatives, in source order
    pub chains: Vec<SelectorChain>,
}

impl SelectorList {
    pub const fn new(chains: Vec<SelectorChain>) -> Self {
        Self { chains }
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }
}

/// A single alternative of a selector list, such as `nav > a.active`.
///
/// Compound selectors are flattened: adjacent non-combinator components
/// belong to the same compound, and a descendant combinator is stored
/// explicitly wherever whitespace separated two compounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorChain {
    pub components: Vec<SelectorComponent>,
}

impl SelectorChain {
    pub const fn new(components: Vec<SelectorComponent>) -> Self {
        Self { components }
    }
}
