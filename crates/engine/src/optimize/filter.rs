use crate::{
    ast::{AtRule, Rule, RuleList, StyleRule},
    selector::{SelectorChain, SelectorComponent},
    serializer::serialize_selector_chain,
    utils::{has_vendor_prefix, unescape_ident},
    Options, OutputStyle, ReductionMode, UsageIndex,
};

use super::{fallback, form_pseudo, Nested, Optimizer};

impl Optimizer<'_> {
    /// Removes every selector that cannot match the markup
    pub(super) fn filter_rules(&mut self, rules: &mut RuleList) {
        rules.retain_mut(|rule| self.filter_rule(rule));
    }

    fn filter_rule(&mut self, rule: &mut Rule) -> bool {
        match rule {
            Rule::Style(style) => self.filter_style_rule(style),
            Rule::AtRule(at_rule) => self.filter_at_rule(at_rule),
            Rule::List(list) => {
                self.filter_rules(list);
                true
            }
            Rule::BadStyle(bad) => {
                let keep = fallback::keep_raw_selector(&bad.selector_text, self.usage, self.options);
                if !keep {
                    self.debug(|| format!("removed unparsed selector `{}`", bad.selector_text));
                }
                keep
            }
        }
    }

    fn filter_style_rule(&mut self, rule: &mut StyleRule) -> bool {
        let usage = self.usage;
        let options = self.options;

        rule.selectors.chains.retain(|chain| {
            let keep = chain_is_matchable(chain, usage, options);
            if !keep {
                self.debug(|| {
                    format!(
                        "removed selector `{}`",
                        serialize_selector_chain(chain, OutputStyle::Compressed)
                    )
                });
            }
            keep
        });

        !rule.selectors.is_empty()
    }

    fn filter_at_rule(&mut self, rule: &mut AtRule) -> bool {
        if rule.is_keyframes() || rule.has_declaration_body() {
            return true;
        }

        match self.with_nested_rules(rule, Self::filter_rules) {
            Nested::Visited { is_empty, .. } => !is_empty,
            Nested::Untouched => true,
        }
    }
}

/// Whether every component of `chain` is accounted for by `usage`
///
/// Components are checked left to right. Outside of strict mode, reaching a
/// universal selector accepts the rest of the chain unchecked.
pub(crate) fn chain_is_matchable(
    chain: &SelectorChain,
    usage: &UsageIndex,
    options: &Options,
) -> bool {
    for component in &chain.components {
        if component.is_universal() && options.mode != ReductionMode::Strict {
            return true;
        }

        if !component_is_matchable(component, usage, options) {
            return false;
        }
    }

    true
}

fn component_is_matchable(
    component: &SelectorComponent,
    usage: &UsageIndex,
    options: &Options,
) -> bool {
    match component {
        SelectorComponent::Class(name) => usage.has_class(&unescape_ident(name)),
        SelectorComponent::Element(name) => !usage.has_tags() || usage.has_tag(name),
        SelectorComponent::Attribute(attr) => usage.has_attribute(&attr.name, attr.value.as_deref()),
        SelectorComponent::PseudoElement(pseudo) => {
            if options.mode == ReductionMode::Conservative && has_vendor_prefix(&pseudo.name) {
                return true;
            }

            !form_pseudo::should_remove(&pseudo.name, usage, options)
        }
        SelectorComponent::Id(..)
        | SelectorComponent::PseudoClass(..)
        | SelectorComponent::Combinator(..) => true,
    }
}

#[cfg(test)]
mod tests {
    use codemap::CodeMap;

    use crate::{parse::parse_selector_list, NullLogger, Options, ReductionMode, UsageIndex};

    use super::chain_is_matchable;

    fn matches(selector: &str, usage: &UsageIndex, options: &Options) -> Vec<bool> {
        let mut map = CodeMap::new();
        let file = map.add_file(String::new(), selector.to_owned());
        let list = parse_selector_list(selector, file.span).unwrap();

        list.chains
            .iter()
            .map(|chain| chain_is_matchable(chain, usage, options))
            .collect()
    }

    #[test]
    fn each_chain_is_judged_alone() {
        let usage = UsageIndex::new().classes(["a", "b"]);
        let options = Options::default().logger(&NullLogger);

        assert_eq!(
            matches(".a .b, .a .c, #id.a:hover", &usage, &options),
            [true, false, true]
        );
    }

    #[test]
    fn universal_depends_on_mode() {
        let tags = UsageIndex::new().tags(["div"]);
        let none = UsageIndex::new();
        let strict = Options::default().mode(ReductionMode::Strict);
        let safe = Options::default();

        assert_eq!(matches("*", &tags, &strict), [false]);
        assert_eq!(matches("*", &none, &strict), [true]);
        assert_eq!(matches("*", &tags, &safe), [true]);
        assert_eq!(matches("DIV > *", &tags, &safe), [true]);
    }

    #[test]
    fn universal_accepts_the_rest_of_the_chain() {
        let tags = UsageIndex::new().tags(["div"]);
        let strict = Options::default().mode(ReductionMode::Strict);
        let safe = Options::default();

        assert_eq!(matches("* > span, *.unused, .unused > *", &tags, &safe), [true, true, false]);
        assert_eq!(matches("* > span, *.unused", &tags, &strict), [false, false]);
    }

    #[test]
    fn attributes_match_exactly() {
        let usage = UsageIndex::new().attributes(["disabled", "type=file"]);
        let options = Options::default();

        assert_eq!(
            matches("[disabled], [type=file], [type=\"file\" i], [type=text], [type^=f]", &usage, &options),
            [true, true, true, false, false]
        );
    }

    #[test]
    fn vendor_pseudo_elements_survive_in_conservative_mode() {
        let usage = UsageIndex::new().tags(["input"]);
        let safe = Options::default();
        let conservative = Options::default().mode(ReductionMode::Conservative);

        assert_eq!(matches("input::-webkit-inner-spin-button", &usage, &safe), [false]);
        assert_eq!(
            matches("input::-webkit-inner-spin-button", &usage, &conservative),
            [true]
        );
        assert_eq!(matches("input::-moz-focus-inner", &usage, &safe), [true]);
    }
}
