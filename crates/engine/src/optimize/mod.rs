use std::collections::HashSet;

use codemap::{CodeMap, Span};

use crate::{
    ast::{AtRule, AtRuleBody, RuleList},
    parse::parse_rule_list,
    serializer::serialize_rule_list,
    Options, OutputStyle, UsageIndex,
};

pub(crate) use collect::DependencyClosure;
pub(crate) use fixup::fix_charset_semicolon;

mod collect;
mod fallback;
mod filter;
mod fixup;
mod form_pseudo;
mod refine;

/// The outcome of working on the body of an at-rule
pub(crate) enum Nested<T> {
    /// The body was parsed and visited. `is_empty` reports whether any rules
    /// remained afterwards.
    Visited { result: T, is_empty: bool },

    /// There was no body, or it was left as it was because it could not be
    /// parsed or is nested too deeply
    Untouched,
}

/// Runs the three pruning passes over one stylesheet.
///
/// 1. [`filter`](Optimizer::filter_rules) removes selectors that can't match
///    the [`UsageIndex`].
/// 2. [`collect`](Optimizer::collect_dependencies) records the custom
///    properties and animations the surviving declarations refer to.
/// 3. [`refine`](Optimizer::refine_rules) removes declarations of custom
///    properties and `@keyframes` nothing refers to, then any rule left
///    empty.
///
/// At-rule bodies stay as text between passes. Each pass that looks inside
/// one parses the text, works on the resulting rules, and writes them back.
pub(crate) struct Optimizer<'a> {
    usage: &'a UsageIndex,
    options: &'a Options<'a>,
    /// Owns the text of every block parsed during this run, so that
    /// warnings can point into it
    map: &'a mut CodeMap,
    file_name: &'a str,
    depth: usize,
    reported: HashSet<String>,
}

impl<'a> Optimizer<'a> {
    pub fn new(
        usage: &'a UsageIndex,
        options: &'a Options<'a>,
        map: &'a mut CodeMap,
        file_name: &'a str,
    ) -> Self {
        Self {
            usage,
            options,
            map,
            file_name,
            depth: 0,
            reported: HashSet::new(),
        }
    }

    pub fn run(&mut self, stylesheet: &mut RuleList) {
        self.filter_rules(stylesheet);

        let closure = self.collect_dependencies(stylesheet);
        self.debug(|| {
            format!(
                "{}: {} custom properties and {} animations in use",
                self.file_name,
                closure.variable_count(),
                closure.animation_count()
            )
        });

        self.refine_rules(stylesheet, &closure);
    }

    /// Calls `visit` on the rules inside `rule`, parsing them first if the
    /// body is still text and writing them back afterwards.
    fn with_nested_rules<T>(
        &mut self,
        rule: &mut AtRule,
        visit: impl FnOnce(&mut Self, &mut RuleList) -> T,
    ) -> Nested<T> {
        let AtRule { name, body, .. } = rule;

        let text = match body {
            Some(AtRuleBody::Rules(list)) => {
                if self.depth >= self.options.max_nesting_depth {
                    return Nested::Untouched;
                }

                self.depth += 1;
                let result = visit(self, list);
                self.depth -= 1;

                return Nested::Visited {
                    result,
                    is_empty: list.is_empty(),
                };
            }
            Some(AtRuleBody::Raw(text)) => text,
            None => return Nested::Untouched,
        };

        let file = self
            .map
            .add_file(format!("{} (@{})", self.file_name, name), text.clone());

        if self.depth >= self.options.max_nesting_depth {
            let message = format!(
                "@{} is nested more than {} levels deep and was left unchanged",
                name, self.options.max_nesting_depth
            );
            self.warn_once(text, file.span, &message);
            return Nested::Untouched;
        }

        let mut nested = match parse_rule_list(&file) {
            Ok(nested) => nested,
            Err(err) => {
                let (message, span) = err.raw();
                let message = format!("@{} was left unchanged: {}", name, message);
                self.warn_once(text, span, &message);
                return Nested::Untouched;
            }
        };

        self.depth += 1;
        let result = visit(self, &mut nested);
        self.depth -= 1;

        *text = serialize_rule_list(
            &nested,
            OutputStyle::Compressed,
            self.options.max_nesting_depth,
        );

        Nested::Visited {
            result,
            is_empty: nested.is_empty(),
        }
    }

    /// Warns about a block, unless this block was already reported by an
    /// earlier pass
    fn warn_once(&mut self, block: &str, span: Span, message: &str) {
        if self.options.quiet || !self.reported.insert(block.to_owned()) {
            return;
        }

        self.options
            .logger
            .warning(self.map.look_up_span(span), message);
    }

    fn debug(&self, message: impl FnOnce() -> String) {
        if self.options.verbose && !self.options.quiet {
            self.options.logger.debug(&message());
        }
    }
}
