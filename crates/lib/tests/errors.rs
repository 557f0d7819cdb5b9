use cssprune::{Options, UsageIndex};


error!(unmatched_close_brace, "a{b:c}}", "Error: unmatched \"}\".");
error!(missing_block, ".a", "Error: expected \"{\".");
error!(qualified_rule_ended_by_semicolon, ".a;", "Error: expected \"{\".");
error!(unterminated_block, ".a{color:red", "Error: expected \"}\".");
error!(unterminated_nested_block, "@media print{.a{color:red}", "Error: expected \"}\".");
error!(unterminated_comment, ".a{b:c} /* x", "Error: expected more input.");
error!(unterminated_string, ".a{content:\"x}", "Error: Expected \".");
error!(at_rule_without_name, "@{}", "Error: Expected identifier.");

#[test]
fn error_points_at_the_location() {
    let err = cssprune::optimize("a{b:c}}", &UsageIndex::new(), &Options::default()).unwrap_err();

    assert!(err.to_string().ends_with("  stdin 1:7\n"), "{}", err);
}

#[test]
fn ascii_error_messages() {
    let err = cssprune::optimize(
        "a{b:c}}",
        &UsageIndex::new(),
        &Options::default().unicode_error_messages(false),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error: unmatched \"}\".\n  ,\n1 | a{b:c}}\n  |       ^\n  '\n  stdin 1:7\n"
    );
}

#[test]
fn error_kind_is_a_parse_error() {
    let err = cssprune::optimize(".a", &UsageIndex::new(), &Options::default()).unwrap_err();

    match err.kind() {
        cssprune::ErrorKind::ParseError { message, loc, .. } => {
            assert_eq!(message, "expected \"{\".");
            assert_eq!(loc.begin.line, 0);
        }
        e => panic!("wrong error kind: {:?}", e),
    }
}

#[test]
fn nested_parse_errors_are_not_fatal() {
    assert!(cssprune::optimize(
        "@media print{a;}",
        &UsageIndex::new(),
        &Options::default().logger(&cssprune::NullLogger),
    )
    .is_ok());
}
