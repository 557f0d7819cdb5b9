/*!
This crate removes CSS that a site can never use.

Given the classes, tags and attributes that appear in a site's HTML and
JavaScript, `cssprune` drops every selector that mentions something absent
from them, then every custom property and `@keyframes` that no surviving
declaration refers to, and finally every rule left empty. Rules nested in
`@media`, `@supports` and similar at-rules are pruned the same way.

Element selectors are only checked when at least one tag is known. The
[`ReductionMode`] decides the remaining edge cases:

- `Strict` checks the universal selector `*` against the known tags too.
- `Safe`, the default, always keeps `*`, along with whatever follows it in
  the selector.
- `Conservative` also keeps vendor-prefixed pseudo-elements such as
  `::-webkit-scrollbar`.

Selectors the parser does not understand are checked textually for the
classes and tags they mention.

## Use as library
```
fn main() -> Result<(), Box<cssprune::Error>> {
    let mut usage = cssprune::UsageIndex::new();
    usage.scan_markup(r#"<div class="card"><p>hello</p></div>"#);

    let css = cssprune::optimize(
        ".card p { margin: 0; } .modal { display: none; }".to_owned(),
        &usage,
        &cssprune::Options::default(),
    )?;
    assert_eq!(css, ".card p {\n  margin: 0;\n}\n");
    Ok(())
}
```

## Use as binary
```bash
cargo install cssprune
cssprune --css site.css --html index.html app.js
```
*/

#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    clippy::missing_docs_in_private_items,
    clippy::module_name_repetitions,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match,
    clippy::multiple_crate_versions,
    clippy::missing_errors_doc,
    clippy::uninlined_format_args,
    unknown_lints,
)]

pub use cssprune_engine::*;
