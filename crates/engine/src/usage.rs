use std::path::Path;

use indexmap::IndexSet;

use crate::{
    error::CssResult,
    harvest::{self, SourceKind},
    Fs,
};

/// The classes, tags and attributes known to appear in live markup or script.
///
/// Attributes are recorded twice: once by name (`disabled`) and once as a
/// `name=value` pair (`type=file`) when the value is non-empty. Tags are
/// compared ASCII case-insensitively; everything else is exact. An empty
/// string is never a member.
///
/// ```
/// # use cssprune_engine as cssprune;
/// let usage = cssprune::UsageIndex::new()
///     .classes(["btn", "active"])
///     .tags(["BUTTON"])
///     .attributes(["type", "type=submit"]);
///
/// assert!(usage.has_class("btn"));
/// assert!(usage.has_tag("button"));
/// assert!(usage.has_attribute("type", Some("submit")));
/// assert!(!usage.has_attribute("type", Some("file")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageIndex {
    classes: IndexSet<String>,
    tags: IndexSet<String>,
    attributes: IndexSet<String>,
}

impl UsageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for class in classes {
            self.insert_class(class.as_ref());
        }
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.insert_tag(tag.as_ref());
        }
        self
    }

    /// Adds attribute tokens, each either a bare name or a `name=value` pair
    #[must_use]
    pub fn attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for attribute in attributes {
            self.insert_attribute_token(attribute.as_ref());
        }
        self
    }

    pub fn insert_class(&mut self, class: &str) {
        if !class.is_empty() {
            self.classes.insert(class.to_owned());
        }
    }

    pub fn insert_tag(&mut self, tag: &str) {
        if !tag.is_empty() {
            self.tags.insert(tag.to_ascii_lowercase());
        }
    }

    /// Records an attribute as it appears in markup: the name on its own,
    /// plus `name=value` whenever a value is written out, even an empty one.
    /// `<input value="">` matches `[value=""]`, while `<input disabled>` only
    /// matches `[disabled]`.
    pub fn insert_attribute(&mut self, name: &str, value: Option<&str>) {
        if name.is_empty() {
            return;
        }

        self.insert_attribute_token(name);

        if let Some(value) = value {
            self.insert_attribute_token(&format!("{}={}", name, value));
        }
    }

    fn insert_attribute_token(&mut self, token: &str) {
        if !token.is_empty() {
            self.attributes.insert(token.to_owned());
        }
    }

    pub fn has_class(&self, name: &str) -> bool {
        !name.is_empty() && self.classes.contains(name)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        !name.is_empty() && self.tags.contains(name.to_ascii_lowercase().as_str())
    }

    /// Whether any tags are known at all. Element selectors are only checked
    /// against a non-empty tag set.
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Whether `[name]`, or `[name=value]` when a value is given, appears in
    /// the markup
    pub fn has_attribute(&self, name: &str, value: Option<&str>) -> bool {
        match value {
            Some(value) => self.has_attribute_token(&format!("{}={}", name, value)),
            None => self.has_attribute_token(name),
        }
    }

    pub fn has_attribute_token(&self, token: &str) -> bool {
        !token.is_empty() && self.attributes.contains(token)
    }

    pub fn used_classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn used_tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn used_attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    /// Adds every entry of `other`
    pub fn extend(&mut self, other: UsageIndex) {
        self.classes.extend(other.classes);
        self.tags.extend(other.tags);
        self.attributes.extend(other.attributes);
    }

    /// Records the tags, attributes and classes of an HTML document
    pub fn scan_markup(&mut self, markup: &str) {
        harvest::scan_markup(markup, self);
    }

    /// Records every whitespace-separated word of every string literal in a
    /// script as a possible class name
    pub fn scan_script(&mut self, script: &str) {
        harvest::scan_script(script, self);
    }

    /// Reads `path` through `fs` and scans it as markup or script depending
    /// on its extension
    pub fn scan_path<P: AsRef<Path>>(&mut self, path: P, fs: &dyn Fs) -> CssResult<SourceKind> {
        let path = path.as_ref();
        let kind = SourceKind::for_path(path);
        let text = fs.read_to_string(path)?;

        match kind {
            SourceKind::Markup => self.scan_markup(&text),
            SourceKind::Script => self.scan_script(&text),
        }

        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needles_never_match() {
        let usage = UsageIndex::new()
            .classes(["", "a"])
            .tags([""])
            .attributes([""]);

        assert!(!usage.has_class(""));
        assert!(!usage.has_tag(""));
        assert!(!usage.has_tags());
        assert!(!usage.has_attribute_token(""));
        assert!(usage.has_class("a"));
    }

    #[test]
    fn tags_ignore_case() {
        let usage = UsageIndex::new().tags(["DiV"]);

        assert!(usage.has_tag("div"));
        assert!(usage.has_tag("DIV"));
        assert_eq!(usage.used_tags().collect::<Vec<_>>(), ["div"]);
    }

    #[test]
    fn attributes_are_exact() {
        let mut usage = UsageIndex::new();
        usage.insert_attribute("type", Some("file"));
        usage.insert_attribute("hidden", None);
        usage.insert_attribute("value", Some(""));
        usage.insert_attribute("", Some("x"));

        assert!(usage.has_attribute("type", None));
        assert!(usage.has_attribute("type", Some("file")));
        assert!(!usage.has_attribute("type", Some("FILE")));
        assert!(usage.has_attribute("hidden", None));
        assert!(!usage.has_attribute("hidden", Some("")));
        assert!(usage.has_attribute("value", None));
        assert!(usage.has_attribute("value", Some("")));
        assert!(!usage.has_attribute_token("=x"));
    }
}
