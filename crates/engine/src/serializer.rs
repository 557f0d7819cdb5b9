use crate::{
    ast::{
        AtRule, AtRuleBody, BadStyleRule, Declaration, DeclarationBlock, Rule, RuleList,
        StyleRule,
    },
    parse::{parse_declaration_fragment, parse_fragment},
    selector::{Attribute, Combinator, Pseudo, SelectorChain, SelectorComponent, SelectorList},
    utils::{hex_char_for, is_ident},
    OutputStyle,
};

pub(crate) fn serialize_rule_list(list: &RuleList, style: OutputStyle, max_depth: usize) -> String {
    let mut serializer = Serializer::new(style, max_depth);

    serializer.visit_stylesheet(list);

    serializer.finish()
}

pub(crate) fn serialize_selector_chain(chain: &SelectorChain, style: OutputStyle) -> String {
    let mut serializer = Serializer::new(style, 0);

    serializer.write_selector_chain(chain);

    serializer.finish()
}

/// Writes a rule tree back out as CSS.
///
/// Raw block text is reformatted on the way out when it can be parsed,
/// either as nested rules or as declarations; anything else is written
/// verbatim.
pub(crate) struct Serializer {
    style: OutputStyle,
    indentation: usize,
    indent_width: usize,
    /// How many raw blocks are currently being reformatted
    depth: usize,
    max_depth: usize,
    buffer: Vec<u8>,
}

impl Serializer {
    pub fn new(style: OutputStyle, max_depth: usize) -> Self {
        Self {
            style,
            indentation: 0,
            indent_width: 2,
            depth: 0,
            max_depth,
            buffer: Vec::new(),
        }
    }

    fn is_compressed(&self) -> bool {
        matches!(self.style, OutputStyle::Compressed)
    }

    pub fn visit_stylesheet(&mut self, list: &RuleList) {
        let mut is_first = true;
        self.write_rules(&list.rules, true, &mut is_first);
    }

    fn write_rules(&mut self, rules: &[Rule], is_root: bool, is_first: &mut bool) {
        for rule in rules {
            if let Rule::List(list) = rule {
                self.write_rules(&list.rules, is_root, is_first);
                continue;
            }

            if is_root && !*is_first {
                self.write_optional_newline();
            }
            *is_first = false;

            self.write_indentation();

            match rule {
                Rule::Style(style) => self.write_style_rule(style),
                Rule::AtRule(at_rule) => self.write_at_rule(at_rule),
                Rule::BadStyle(bad) => self.write_bad_style_rule(bad),
                Rule::List(..) => {}
            }

            self.write_optional_newline();
        }
    }

    fn write_style_rule(&mut self, rule: &StyleRule) {
        self.write_selector_list(&rule.selectors);

        match &rule.block {
            DeclarationBlock::Parsed(declarations) => self.write_declaration_block(declarations),
            DeclarationBlock::Opaque(text) => self.write_raw_block(text),
        }
    }

    fn write_at_rule(&mut self, rule: &AtRule) {
        self.buffer.push(b'@');
        self.buffer.extend_from_slice(rule.name.as_bytes());

        if !rule.prelude.is_empty() {
            self.buffer.push(b' ');
            self.buffer.extend_from_slice(rule.prelude.as_bytes());
        }

        match &rule.body {
            Some(AtRuleBody::Raw(text)) => self.write_raw_block(text),
            Some(AtRuleBody::Rules(list)) => self.write_rule_block(&list.rules),
            None => self.buffer.push(b';'),
        }
    }

    fn write_bad_style_rule(&mut self, rule: &BadStyleRule) {
        self.buffer
            .extend_from_slice(rule.selector_text.as_bytes());
        self.write_raw_block(&rule.block);
    }

    fn write_declaration_block(&mut self, declarations: &[Declaration]) {
        if declarations.is_empty() {
            self.write_empty_block();
            return;
        }

        self.open_block();

        for (idx, declaration) in declarations.iter().enumerate() {
            if self.is_compressed() && idx > 0 {
                self.buffer.push(b';');
            }

            self.write_indentation();
            self.write_declaration(declaration);

            if !self.is_compressed() {
                self.buffer.extend_from_slice(b";\n");
            }
        }

        self.close_block();
    }

    fn write_declaration(&mut self, declaration: &Declaration) {
        self.buffer.extend_from_slice(declaration.name.as_bytes());
        self.buffer.push(b':');

        if !declaration.value.is_empty() {
            self.write_optional_space();
            self.buffer.extend_from_slice(declaration.value.as_bytes());
        }

        if declaration.important {
            self.write_optional_space();
            self.buffer.extend_from_slice(b"!important");
        }
    }

    fn write_rule_block(&mut self, rules: &[Rule]) {
        if rules.is_empty() {
            self.write_empty_block();
            return;
        }

        self.open_block();
        let mut is_first = true;
        self.write_rules(rules, false, &mut is_first);
        self.close_block();
    }

    fn write_raw_block(&mut self, text: &str) {
        if text.is_empty() {
            self.write_empty_block();
            return;
        }

        if self.depth < self.max_depth {
            if text.contains('{') {
                if let Ok(list) = parse_fragment(text) {
                    self.depth += 1;
                    self.write_rule_block(&list.rules);
                    self.depth -= 1;
                    return;
                }
            } else if let Some(declarations) = parse_declaration_fragment(text) {
                self.write_declaration_block(&declarations);
                return;
            }
        }

        self.open_block();
        self.write_indentation();
        self.buffer.extend_from_slice(text.as_bytes());
        self.write_optional_newline();
        self.close_block();
    }

    fn open_block(&mut self) {
        self.write_optional_space();
        self.buffer.push(b'{');
        self.write_optional_newline();
        self.indentation += self.indent_width;
    }

    fn close_block(&mut self) {
        self.indentation -= self.indent_width;
        self.write_indentation();
        self.buffer.push(b'}');
    }

    fn write_empty_block(&mut self) {
        self.write_optional_space();
        self.buffer.extend_from_slice(b"{}");
    }

    fn write_selector_list(&mut self, list: &SelectorList) {
        for (idx, chain) in list.chains.iter().enumerate() {
            if idx > 0 {
                self.buffer.push(b',');
                self.write_optional_space();
            }

            self.write_selector_chain(chain);
        }
    }

    fn write_selector_chain(&mut self, chain: &SelectorChain) {
        for component in &chain.components {
            match component {
                SelectorComponent::Class(name) => {
                    self.buffer.push(b'.');
                    self.buffer.extend_from_slice(name.as_bytes());
                }
                SelectorComponent::Id(name) => {
                    self.buffer.push(b'#');
                    self.buffer.extend_from_slice(name.as_bytes());
                }
                SelectorComponent::Element(name) => {
                    self.buffer.extend_from_slice(name.as_bytes());
                }
                SelectorComponent::Attribute(attr) => self.write_attribute(attr),
                SelectorComponent::PseudoClass(pseudo)
                | SelectorComponent::PseudoElement(pseudo) => self.write_pseudo_selector(pseudo),
                SelectorComponent::Combinator(Combinator::Descendant) => self.buffer.push(b' '),
                SelectorComponent::Combinator(combinator) => {
                    self.write_optional_space();
                    self.buffer
                        .extend_from_slice(combinator.as_str().as_bytes());
                    self.write_optional_space();
                }
            }
        }
    }

    fn write_pseudo_selector(&mut self, pseudo: &Pseudo) {
        self.buffer.push(b':');

        if !pseudo.is_syntactic_class {
            self.buffer.push(b':');
        }

        self.buffer.extend_from_slice(pseudo.name.as_bytes());

        if let Some(argument) = &pseudo.argument {
            self.buffer.push(b'(');
            self.buffer.extend_from_slice(argument.as_bytes());
            self.buffer.push(b')');
        }
    }

    fn write_attribute(&mut self, attr: &Attribute) {
        self.buffer.push(b'[');
        self.buffer.extend_from_slice(attr.name.as_bytes());

        if let Some(value) = &attr.value {
            let op: &'static str = attr.op.into();
            self.buffer.extend_from_slice(op.as_bytes());

            if is_ident(value) && !value.starts_with("--") {
                self.buffer.extend_from_slice(value.as_bytes());
            } else {
                self.write_quoted_string(value);
            }

            if let Some(modifier) = attr.modifier {
                self.buffer.push(b' ');
                let mut encoded = [0; 4];
                self.buffer
                    .extend_from_slice(modifier.encode_utf8(&mut encoded).as_bytes());
            }
        }

        self.buffer.push(b']');
    }

    fn write_quoted_string(&mut self, string: &str) {
        self.buffer.push(b'"');

        let mut iter = string.as_bytes().iter().copied().peekable();
        while let Some(c) = iter.next() {
            match c {
                b'"' | b'\\' => {
                    self.buffer.push(b'\\');
                    self.buffer.push(c);
                }
                b'\x00'..=b'\x08' | b'\x0A'..=b'\x1F' => {
                    self.buffer.push(b'\\');
                    if c as u32 > 0xF {
                        self.buffer.push(hex_char_for(c as u32 >> 4) as u8);
                    }
                    self.buffer.push(hex_char_for(c as u32 & 0xF) as u8);

                    let next = match iter.peek() {
                        Some(v) => *v,
                        None => break,
                    };

                    if next.is_ascii_hexdigit() || next == b' ' || next == b'\t' {
                        self.buffer.push(b' ');
                    }
                }
                _ => self.buffer.push(c),
            }
        }

        self.buffer.push(b'"');
    }

    fn write_indentation(&mut self) {
        if self.is_compressed() {
            return;
        }

        self.buffer.reserve(self.indentation);
        for _ in 0..self.indentation {
            self.buffer.push(b' ');
        }
    }

    fn write_optional_space(&mut self) {
        if !self.is_compressed() {
            self.buffer.push(b' ');
        }
    }

    fn write_optional_newline(&mut self) {
        if !self.is_compressed() {
            self.buffer.push(b'\n');
        }
    }

    pub fn finish(self) -> String {
        match String::from_utf8(self.buffer) {
            Ok(css) => css,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}
