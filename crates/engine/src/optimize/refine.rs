use crate::ast::{AtRule, DeclarationBlock, Rule, RuleList, StyleRule};

use super::{DependencyClosure, Nested, Optimizer};

impl Optimizer<'_> {
    /// Drops unused custom properties and keyframes, then every rule left
    /// without content. Returns whether any rule remains.
    pub(super) fn refine_rules(&mut self, rules: &mut RuleList, closure: &DependencyClosure) -> bool {
        rules.retain_mut(|rule| self.refine_rule(rule, closure));
        !rules.is_empty()
    }

    fn refine_rule(&mut self, rule: &mut Rule, closure: &DependencyClosure) -> bool {
        match rule {
            Rule::Style(style) => self.refine_style_rule(style, closure),
            Rule::List(list) => self.refine_rules(list, closure),
            Rule::AtRule(at_rule) => self.refine_at_rule(at_rule, closure),
            Rule::BadStyle(..) => true,
        }
    }

    fn refine_style_rule(&mut self, rule: &mut StyleRule, closure: &DependencyClosure) -> bool {
        let declarations = match &mut rule.block {
            DeclarationBlock::Parsed(declarations) => declarations,
            DeclarationBlock::Opaque(..) => return !rule.selectors.is_empty(),
        };

        declarations.retain(|declaration| {
            let keep = !declaration.is_custom_property()
                || closure.has_variable(&declaration.name[2..]);
            if !keep {
                self.debug(|| format!("removed unused custom property `{}`", declaration.name));
            }
            keep
        });

        !rule.selectors.is_empty() && !declarations.is_empty()
    }

    fn refine_at_rule(&mut self, rule: &mut AtRule, closure: &DependencyClosure) -> bool {
        if !rule.has_declaration_body() {
            let nested = self.with_nested_rules(rule, |this, list| this.refine_rules(list, closure));

            if let Nested::Visited { is_empty: true, .. } = nested {
                self.debug(|| format!("removed @{} {} as it became empty", rule.name, rule.prelude));
                return false;
            }
        }

        if rule.is_keyframes() && self.options.remove_unused_keyframes {
            let is_used = rule
                .keyframes_name()
                .map_or(false, |name| closure.has_animation(name));

            if !is_used {
                self.debug(|| format!("removed unused @{} {}", rule.name, rule.prelude));
            }

            return is_used;
        }

        true
    }
}
