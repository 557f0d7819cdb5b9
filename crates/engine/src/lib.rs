/*!
This crate removes the rules of a stylesheet that cannot apply to a known set
of markup.

The classes, tags and attributes a site actually uses are collected into a
[`UsageIndex`], usually by scanning its HTML and JavaScript. The stylesheet is
then pruned in three passes:

1. Every selector is checked against the index, and selectors mentioning a
   class, tag or attribute that never appears are removed, along with rules
   left without a selector. Form-control pseudo-elements such as
   `::file-selector-button` are removed when no markup uses the control.
2. The surviving declarations are searched for `var(--name)` references and
   `animation` names.
3. Custom properties and `@keyframes` that nothing refers to are removed, and
   then every rule and at-rule left empty.

The contents of at-rules like `@media` and `@supports` are pruned the same way.

## Use as library
```
# use cssprune_engine as cssprune;
fn main() -> Result<(), Box<cssprune::Error>> {
    let usage = cssprune::UsageIndex::new().classes(["used"]);
    let css = cssprune::optimize(
        ".used { color: red; } .unused { color: blue; }",
        &usage,
        &cssprune::Options::default().style(cssprune::OutputStyle::Compressed),
    )?;
    assert_eq!(css, ".used{color:red}");
    Ok(())
}
```

## Use as binary
```bash
cargo install cssprune
cssprune --css site.css --html index.html app.js -o site.min.css
```
*/

#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match,
    clippy::new_without_default,
    clippy::single_match_else,
    clippy::multiple_crate_versions,
    clippy::wrong_self_convention,
    clippy::comparison_chain,
    clippy::unwrap_or_default,
    clippy::manual_unwrap_or_default,
    clippy::len_without_is_empty,
    unknown_lints,
)]

use std::path::Path;

#[cfg(feature = "wasm-exports")]
use wasm_bindgen::prelude::*;

use codemap::CodeMap;

pub use crate::error::{
    CssError as Error, CssResult as Result, PublicCssErrorKind as ErrorKind,
};
pub use crate::fs::{Fs, NullFs, StdFs};
pub use crate::harvest::SourceKind;
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::options::{Options, OutputStyle, ReductionMode};
pub use crate::usage::UsageIndex;
use crate::{
    ast::RuleList,
    optimize::{fix_charset_semicolon, Optimizer},
    serializer::serialize_rule_list,
};

/// The rule tree, for building or inspecting stylesheets directly
pub mod css_ast {
    pub use crate::ast::*;
    pub use crate::selector::{
        Attribute, AttributeOp, Combinator, Pseudo, SelectorChain, SelectorComponent,
        SelectorList,
    };
}

pub use codemap;

mod ast;
mod error;
mod fs;
mod harvest;
mod lexer;
mod logger;
mod optimize;
mod options;
mod parse;
mod selector;
mod serializer;
mod usage;
mod utils;

fn raw_to_parse_error(map: &CodeMap, err: Error, unicode: bool) -> Box<Error> {
    if !err.is_raw() {
        return Box::new(err);
    }

    let (message, span) = err.raw();
    Box::new(Error::from_loc(message, map.look_up_span(span), unicode))
}

/// Parse a stylesheet into a rule tree without pruning it
///
/// The bodies of at-rules are kept as raw text, see
/// [`css_ast::AtRuleBody::Raw`].
pub fn parse_stylesheet<P: AsRef<Path>>(
    input: String,
    file_name: P,
    options: &Options,
) -> Result<RuleList> {
    let mut map = CodeMap::new();
    let file = map.add_file(file_name.as_ref().to_string_lossy().into_owned(), input);

    match parse::parse_rule_list(&file) {
        Ok(stylesheet) => Ok(stylesheet),
        Err(e) => Err(raw_to_parse_error(&map, *e, options.unicode_error_messages)),
    }
}

/// Write a rule tree out as CSS in the output style of `options`
pub fn serialize_stylesheet(stylesheet: &RuleList, options: &Options) -> String {
    let mut css = serialize_rule_list(stylesheet, options.style, options.max_nesting_depth);
    fix_charset_semicolon(&mut css);
    css
}

/// Prune a rule tree in place
///
/// This runs the same passes as [`optimize`], for trees that were built or
/// modified programmatically.
pub fn optimize_stylesheet(stylesheet: &mut RuleList, usage: &UsageIndex, options: &Options) {
    let mut map = CodeMap::new();
    Optimizer::new(usage, options, &mut map, "stylesheet").run(stylesheet);
}

fn optimize_with_file_name(
    input: String,
    file_name: &str,
    usage: &UsageIndex,
    options: &Options,
) -> Result<String> {
    let mut map = CodeMap::new();
    let file = map.add_file(file_name.to_owned(), input);

    let mut stylesheet = match parse::parse_rule_list(&file) {
        Ok(v) => v,
        Err(e) => return Err(raw_to_parse_error(&map, *e, options.unicode_error_messages)),
    };

    Optimizer::new(usage, options, &mut map, file_name).run(&mut stylesheet);

    Ok(serialize_stylesheet(&stylesheet, options))
}

/// Prune the stylesheet at a path
///
/// The file is read through [`Options::fs`].
///
/// n.b. `cssprune` does not currently support files that are not valid UTF-8
///
/// ```no_run
/// # use cssprune_engine as cssprune;
/// fn main() -> Result<(), Box<cssprune::Error>> {
///     let mut usage = cssprune::UsageIndex::new();
///     usage.scan_path("index.html", &cssprune::StdFs)?;
///     let css = cssprune::optimize_path("site.css", &usage, &cssprune::Options::default())?;
///     Ok(())
/// }
/// ```
#[inline]
pub fn optimize_path<P: AsRef<Path>>(
    p: P,
    usage: &UsageIndex,
    options: &Options,
) -> Result<String> {
    let path = p.as_ref();
    let input = options.fs.read_to_string(path)?;

    optimize_with_file_name(input, &path.to_string_lossy(), usage, options)
}

/// Prune a stylesheet held in a string
///
/// Returns an empty string when no rule survives.
///
/// ```
/// # use cssprune_engine as cssprune;
/// fn main() -> Result<(), Box<cssprune::Error>> {
///     let usage = cssprune::UsageIndex::new().classes(["foo"]);
///     let css = cssprune::optimize(".foo{color:red}.bar{color:blue}", &usage, &cssprune::Options::default())?;
///     assert_eq!(css, ".foo {\n  color: red;\n}\n");
///     Ok(())
/// }
/// ```
#[inline]
pub fn optimize<S: Into<String>>(input: S, usage: &UsageIndex, options: &Options) -> Result<String> {
    optimize_with_file_name(input.into(), "stdin", usage, options)
}

/// Whether `input` is a stylesheet `cssprune` can parse
///
/// Empty input is not considered valid.
pub fn validate(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    let mut map = CodeMap::new();
    let file = map.add_file("stdin".to_owned(), input.to_owned());

    parse::parse_rule_list(&file).is_ok()
}

/// Prune a stylesheet against whitespace-separated lists of classes, tags
/// and attribute tokens
#[cfg(feature = "wasm-exports")]
#[wasm_bindgen(js_name = optimize)]
pub fn optimize_js(
    input: String,
    classes: String,
    tags: String,
    attributes: String,
) -> std::result::Result<String, String> {
    let usage = UsageIndex::new()
        .classes(classes.split_whitespace())
        .tags(tags.split_whitespace())
        .attributes(attributes.split_whitespace());

    optimize(input, &usage, &Options::default()).map_err(|e| e.to_string())
}
