use cssprune::{ReductionMode, UsageIndex};

use macros::compressed;


test!(
    chains_are_judged_separately,
    ".a .b, .a .c { color: red; }",
    ".a .b{color:red}",
    UsageIndex::new().classes(["a", "b"]),
    compressed()
);
test!(
    compound_needs_every_class,
    ".a.b{color:red}.a{color:blue}",
    ".a{color:blue}",
    UsageIndex::new().classes(["a"]),
    compressed()
);
test!(
    child_combinator_compressed,
    ".a > .b{x:y}",
    ".a>.b{x:y}",
    UsageIndex::new().classes(["a", "b"]),
    compressed()
);
test!(
    combinators_expanded,
    ".a>.b+.c~.d{x:y}",
    ".a > .b + .c ~ .d {\n  x: y;\n}\n",
    UsageIndex::new().classes(["a", "b", "c", "d"])
);
test!(
    tags_unchecked_without_tag_set,
    "span{color:red}",
    "span{color:red}",
    UsageIndex::new(),
    compressed()
);
test!(
    unused_tag_removed,
    "span{color:red}div{color:blue}",
    "div{color:blue}",
    UsageIndex::new().tags(["div"]),
    compressed()
);
test!(
    tags_compare_case_insensitively,
    "DIV{color:red}",
    "DIV{color:red}",
    UsageIndex::new().tags(["div"]),
    compressed()
);
test!(
    universal_kept_in_safe_mode,
    "*{margin:0}",
    "*{margin:0}",
    UsageIndex::new().tags(["div"]),
    compressed()
);
test!(
    universal_keeps_whole_chain_in_safe_mode,
    "*.unused{color:red}* > span{color:blue}.unused *{color:green}",
    "*.unused{color:red}*>span{color:blue}",
    UsageIndex::new().tags(["div"]),
    compressed()
);
test!(
    universal_checked_in_strict_mode,
    "*{margin:0}",
    "",
    UsageIndex::new().tags(["div"]),
    compressed().mode(ReductionMode::Strict)
);
test!(
    universal_kept_in_strict_mode_without_tags,
    "*{margin:0}",
    "*{margin:0}",
    UsageIndex::new(),
    compressed().mode(ReductionMode::Strict)
);
test!(
    attribute_value_must_match_exactly,
    "[type=\"file\"]{a:b}[type=\"date\"]{c:d}",
    "[type=file]{a:b}",
    UsageIndex::new().attributes(["type", "type=file"]),
    compressed()
);
test!(
    bare_attribute_matches_name,
    "[disabled]{opacity:.5}[hidden]{display:none}",
    "[disabled]{opacity:.5}",
    UsageIndex::new().attributes(["disabled"]),
    compressed()
);
test!(
    attribute_operator_is_not_evaluated,
    "[class~=\"btn\"]{a:b}[href^=\"https\"]{c:d}",
    "[class~=btn]{a:b}",
    UsageIndex::new().attributes(["class=btn", "href=https://example.com"]),
    compressed()
);
test!(
    attribute_value_needing_quotes,
    "[data-x=\"a b\" i]{a:b}",
    "[data-x=\"a b\" i]{a:b}",
    UsageIndex::new().attributes(["data-x=a b"]),
    compressed()
);
test!(
    ids_and_pseudo_classes_always_match,
    "#main:hover{a:b}:not(.hidden){c:d}",
    "#main:hover{a:b}:not(.hidden){c:d}",
    UsageIndex::new(),
    compressed()
);
test!(
    legacy_pseudo_element_syntax,
    "a:before{content:'x'}",
    "a:before{content:'x'}",
    UsageIndex::new().tags(["a"]),
    compressed()
);
test!(
    vendor_form_pseudo_removed_in_safe_mode,
    "::-webkit-file-upload-button{a:b}",
    "",
    UsageIndex::new(),
    compressed()
);
test!(
    vendor_pseudo_kept_in_conservative_mode,
    "::-webkit-file-upload-button{a:b}",
    "::-webkit-file-upload-button{a:b}",
    UsageIndex::new(),
    compressed().mode(ReductionMode::Conservative)
);
test!(
    form_pseudo_removal_can_be_disabled,
    "::file-selector-button{a:b}",
    "::file-selector-button{a:b}",
    UsageIndex::new(),
    compressed().remove_form_pseudoelements(false)
);
test!(
    focus_ring_needs_button_or_input,
    "button::-moz-focus-inner{border:0}",
    "button::-moz-focus-inner{border:0}",
    UsageIndex::new().tags(["button"]),
    compressed()
);
test!(
    focus_ring_removed_without_controls,
    "button::-moz-focus-inner{border:0}",
    "",
    UsageIndex::new(),
    compressed()
);
test!(
    date_picker_needs_a_date_input,
    "::-webkit-calendar-picker-indicator{a:b}",
    "::-webkit-calendar-picker-indicator{a:b}",
    UsageIndex::new().attributes(["type=datetime-local"]),
    compressed()
);
test!(
    other_pseudo_elements_untouched,
    "::selection{color:red}",
    "::selection{color:red}",
    UsageIndex::new(),
    compressed()
);
test!(
    important_is_kept,
    ".a{color:red !important}",
    ".a {\n  color: red !important;\n}\n",
    UsageIndex::new().classes(["a"])
);
test!(
    important_compressed,
    ".a{color:red ! IMPORTANT}",
    ".a{color:red!important}",
    UsageIndex::new().classes(["a"]),
    compressed()
);
