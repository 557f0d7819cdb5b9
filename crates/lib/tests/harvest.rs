use std::io::Write;

use cssprune::{SourceKind, UsageIndex};

use macros::{compressed, TestFs};


#[test]
fn markup_feeds_the_index() {
    let mut usage = UsageIndex::new();
    usage.scan_markup(
        r#"<!doctype html>
<html>
  <head><title>.not-a-class</title><style>.also-not { color: red }</style></head>
  <body class="home dark">
    <!-- <div class="commented"> -->
    <form><input type="file" disabled><button class=primary>Send</button></form>
  </body>
</html>"#,
    );

    for class in ["home", "dark", "primary"] {
        assert!(usage.has_class(class), "{}", class);
    }
    assert!(!usage.has_class("commented"));
    assert!(!usage.has_class("not-a-class"));
    assert!(!usage.has_class("also-not"));

    for tag in ["html", "head", "title", "style", "body", "form", "input", "button"] {
        assert!(usage.has_tag(tag), "{}", tag);
    }
    assert!(!usage.has_tag("div"));

    assert!(usage.has_attribute("type", Some("file")));
    assert!(usage.has_attribute("disabled", None));
    assert!(usage.has_attribute("class", Some("primary")));
}

#[test]
fn script_literals_are_classes() {
    let mut usage = UsageIndex::new();
    usage.scan_script("el.classList.add('is-open'); const x = `modal modal--wide`;");

    assert!(usage.has_class("is-open"));
    assert!(usage.has_class("modal"));
    assert!(usage.has_class("modal--wide"));
    assert!(!usage.has_class("el"));
}

#[test]
fn paths_are_routed_by_extension() {
    let mut fs = TestFs::new();
    fs.add_file("index.html", r#"<p class="from-markup">"#);
    fs.add_file("app.tsx", r#"const c = "from-script";"#);

    let mut usage = UsageIndex::new();
    assert_eq!(usage.scan_path("index.html", &fs).unwrap(), SourceKind::Markup);
    assert_eq!(usage.scan_path("app.tsx", &fs).unwrap(), SourceKind::Script);

    assert!(usage.has_class("from-markup"));
    assert!(usage.has_class("from-script"));
    assert!(usage.has_tag("p"));
}

#[test]
fn scan_path_reads_from_disk() {
    tempfile!("__harvest_disk.html", "<section class=\"hero\"></section>");

    let mut usage = UsageIndex::new();
    usage
        .scan_path("__harvest_disk.html", &cssprune::StdFs)
        .unwrap();

    assert!(usage.has_class("hero"));
    assert!(usage.has_tag("section"));
}

#[test]
fn missing_file_is_an_error() {
    let mut usage = UsageIndex::new();

    assert!(usage.scan_path("__does_not_exist.html", &cssprune::NullFs).is_err());
}

#[test]
fn empty_attribute_values_are_recorded() {
    let mut usage = UsageIndex::new();
    usage.scan_markup(r#"<input value="" readonly>"#);

    assert!(usage.has_attribute("value", Some("")));
    assert!(usage.has_attribute("readonly", None));
    assert!(!usage.has_attribute("readonly", Some("")));

    let css = cssprune::optimize(
        "[value=\"\"]{a:b}[readonly=\"\"]{c:d}",
        &usage,
        &compressed(),
    )
    .unwrap();
    assert_eq!(css, "[value=\"\"]{a:b}");
}

#[test]
fn indexes_can_be_merged() {
    let mut usage = UsageIndex::new().classes(["a"]);
    usage.extend(UsageIndex::new().classes(["b"]).tags(["p"]));

    assert_eq!(usage.used_classes().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(usage.used_tags().collect::<Vec<_>>(), ["p"]);
}

#[test]
fn harvested_markup_prunes_a_stylesheet() {
    let mut usage = UsageIndex::new();
    usage.scan_markup(r#"<nav class="menu"><a href="/" class="menu__link">Home</a></nav>"#);
    usage.scan_script(r#"nav.classList.toggle("menu--open")"#);

    let css = cssprune::optimize(
        "nav.menu{display:flex}.menu--open{display:block}.menu__link[href]{color:red}.footer{margin:0}ul li{padding:0}",
        &usage,
        &compressed(),
    )
    .unwrap();

    assert_eq!(
        css,
        "nav.menu{display:flex}.menu--open{display:block}.menu__link[href]{color:red}"
    );
}
