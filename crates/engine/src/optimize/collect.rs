use indexmap::IndexSet;

use crate::{
    ast::{AtRule, AtRuleBody, Declaration, DeclarationBlock, Rule, RuleList},
    parse::parse_declaration_fragment,
};

use super::{Nested, Optimizer};

/// The custom properties and animations that surviving declarations refer to
#[derive(Debug, Clone, Default)]
pub(crate) struct DependencyClosure {
    /// Custom property names without the leading `--`
    variables: IndexSet<String>,
    animations: IndexSet<String>,
}

impl DependencyClosure {
    pub fn has_variable(&self, name: &str) -> bool {
        !name.is_empty() && self.variables.contains(name)
    }

    pub fn has_animation(&self, name: &str) -> bool {
        !name.is_empty() && self.animations.contains(name)
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    pub fn record_declaration(&mut self, name: &str, value: &str) {
        self.record_variables(value);

        if name == "animation" || name == "animation-name" {
            self.record_animations(value);
        }
    }

    /// Records everything referenced from block text that isn't a flat list
    /// of declarations
    pub fn record_text(&mut self, text: &str) {
        self.record_variables(text);

        for segment in text.split(|c| matches!(c, ';' | '{' | '}')) {
            if let Some((name, value)) = segment.split_once(':') {
                let name = name.trim();
                if name == "animation" || name == "animation-name" {
                    self.record_animations(value);
                }
            }
        }
    }

    /// Records the `NAME` of every `var(--NAME)`. The name runs up to the
    /// next `)`, so a fallback value becomes part of it.
    fn record_variables(&mut self, value: &str) {
        let mut rest = value;

        while let Some(idx) = rest.find("var(--") {
            rest = &rest[idx + "var(--".len()..];

            if let Some(end) = rest.find(')') {
                if end > 0 {
                    self.variables.insert(rest[..end].to_owned());
                }
            }
        }
    }

    /// Records every word of an `animation` value. This over-approximates:
    /// durations and timing functions are recorded as well.
    fn record_animations(&mut self, value: &str) {
        let value = match value.split_once(':') {
            Some((_, after)) => after,
            None => value,
        };

        for token in value.split(|c: char| c.is_whitespace() || c == ',' || c == ';') {
            if !token.is_empty() {
                self.animations.insert(token.to_owned());
            }
        }
    }
}

impl Optimizer<'_> {
    pub(super) fn collect_dependencies(&mut self, stylesheet: &mut RuleList) -> DependencyClosure {
        let mut closure = DependencyClosure::default();
        self.collect_rules(stylesheet, &mut closure);
        closure
    }

    fn collect_rules(&mut self, rules: &mut RuleList, closure: &mut DependencyClosure) {
        for rule in &mut rules.rules {
            match rule {
                Rule::Style(style) => match &style.block {
                    DeclarationBlock::Parsed(declarations) => {
                        record_declarations(declarations, closure);
                    }
                    DeclarationBlock::Opaque(text) => closure.record_text(text),
                },
                Rule::List(list) => self.collect_rules(list, closure),
                Rule::AtRule(at_rule) => self.collect_at_rule(at_rule, closure),
                Rule::BadStyle(bad) => closure.record_text(&bad.block),
            }
        }
    }

    fn collect_at_rule(&mut self, rule: &mut AtRule, closure: &mut DependencyClosure) {
        if rule.has_declaration_body() {
            if let Some(AtRuleBody::Raw(text)) = &rule.body {
                match parse_declaration_fragment(text) {
                    Some(declarations) => record_declarations(&declarations, closure),
                    None => closure.record_text(text),
                }
                return;
            }
        }

        let nested = self.with_nested_rules(rule, |this, list| this.collect_rules(list, closure));

        if let Nested::Untouched = nested {
            if let Some(AtRuleBody::Raw(text)) = &rule.body {
                closure.record_text(text);
            }
        }
    }
}

fn record_declarations(declarations: &[Declaration], closure: &mut DependencyClosure) {
    for declaration in declarations {
        closure.record_declaration(&declaration.name, &declaration.value);
    }
}
