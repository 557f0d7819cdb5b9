use cssprune::{Options, OutputStyle, ReductionMode, UsageIndex};

use macros::compressed;


test!(
    unused_class_rule_is_removed,
    ".foo{color:red}.bar{color:blue}",
    ".foo{color:red}",
    UsageIndex::new().classes(["foo"]),
    compressed()
);
test!(
    unused_keyframes_are_removed,
    "@keyframes slide{from{opacity:0}} @keyframes unused{from{opacity:1}} .used{animation:slide 1s}",
    "@keyframes slide{from{opacity:0}}.used{animation:slide 1s}",
    UsageIndex::new().classes(["used"]),
    compressed()
);
test!(
    unused_custom_property_is_removed,
    ":root{--a:blue;--b:red} .x{color:var(--a)}",
    ":root{--a:blue}.x{color:var(--a)}",
    UsageIndex::new().classes(["x"]),
    compressed()
);
test!(
    strict_mode_checks_tags,
    "div::before{content:''} span::after{color:blue}",
    "div::before{content:''}",
    UsageIndex::new().tags(["div"]),
    compressed().mode(ReductionMode::Strict)
);
test!(
    file_selector_button_kept_with_file_input,
    "::file-selector-button{font:inherit}",
    "::file-selector-button{font:inherit}",
    UsageIndex::new().tags(["input"]).attributes(["type=file"]),
    compressed()
);
test!(
    file_selector_button_removed_without_file_input,
    "::file-selector-button{font:inherit}",
    "",
    UsageIndex::new().tags(["input"]),
    compressed()
);
test!(
    expanded_output,
    ".foo { color: red; }\n.bar { color: blue; }\n.baz { margin: 0; }",
    ".foo {\n  color: red;\n}\n\n.baz {\n  margin: 0;\n}\n",
    UsageIndex::new().classes(["foo", "baz"])
);
test!(empty_input, "", "");
test!(only_comments, "/* nothing */", "");
test!(
    everything_removed_is_empty_not_error,
    ".a{color:red}",
    ""
);

const SITE: &str = "
:root { --brand: #f00; --unused: #00f; }
@keyframes pulse { from { opacity: 0 } to { opacity: 1 } }
@keyframes spin { to { transform: rotate(1turn) } }
.btn { color: var(--brand); animation: pulse 2s; }
.modal { display: none; animation: spin 1s; }
.btn:hover, .modal .btn { opacity: .5 }
@media (max-width: 600px) { .btn { padding: 0 } .modal { margin: 0 } }
";

fn site_usage() -> UsageIndex {
    let mut usage = UsageIndex::new();
    usage.scan_markup(r#"<main><button class="btn" type="button">Go</button></main>"#);
    usage
}

#[test]
fn never_keeps_unused_classes() {
    let css = cssprune::optimize(SITE, &site_usage(), &compressed()).unwrap();

    assert!(css.contains(".btn"));
    assert!(!css.contains(".modal"));
}

#[test]
fn never_keeps_unreferenced_custom_properties_or_keyframes() {
    let css = cssprune::optimize(SITE, &site_usage(), &compressed()).unwrap();

    assert!(css.contains("--brand:#f00"));
    assert!(!css.contains("--unused"));
    assert!(css.contains("@keyframes pulse"));
    assert!(!css.contains("@keyframes spin"));
}

#[test]
fn declaration_order_is_preserved() {
    let css = cssprune::optimize(SITE, &site_usage(), &compressed()).unwrap();

    assert!(css.contains(".btn{color:var(--brand);animation:pulse 2s}"));
    assert!(css.contains("@media (max-width: 600px){.btn{padding:0}}"));
}

#[test]
fn optimizing_twice_changes_nothing() {
    for options in [compressed(), Options::default()] {
        let once = cssprune::optimize(SITE, &site_usage(), &options).unwrap();
        let twice = cssprune::optimize(once.clone(), &site_usage(), &options).unwrap();

        assert_eq!(once, twice);
    }
}

#[test]
fn used_selectors_survive_unchanged() {
    let css = cssprune::optimize(
        ".btn:hover,.modal .btn{opacity:.5}",
        &site_usage(),
        &Options::default().style(OutputStyle::Compressed),
    )
    .unwrap();

    assert_eq!(css, ".btn:hover{opacity:.5}");
}
