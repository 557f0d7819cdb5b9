use cssprune::UsageIndex;

use macros::compressed;


test!(
    kept_when_a_class_is_used,
    "ns|div .card{a:b}",
    "ns|div .card{a:b}",
    UsageIndex::new().classes(["card"]),
    compressed()
);
test!(
    removed_when_no_class_is_used,
    "ns|div .card{a:b}",
    "",
    UsageIndex::new().classes(["other"]),
    compressed()
);
test!(
    nesting_selector_with_class,
    "&.card{a:b}&.gone{c:d}",
    "&.card{a:b}",
    UsageIndex::new().classes(["card"]),
    compressed()
);
test!(
    tag_before_colon_is_checked,
    "ns|rect:hover{a:b}ns|circle:hover{c:d}",
    "ns|rect:hover{a:b}",
    UsageIndex::new().tags(["rect"]),
    compressed()
);
test!(
    tag_before_colon_unchecked_without_tags,
    "ns|rect:hover{a:b}",
    "ns|rect:hover{a:b}",
    UsageIndex::new(),
    compressed()
);
test!(
    nothing_recognizable_is_kept,
    "ns|*{a:b}",
    "ns|*{a:b}",
    UsageIndex::new().classes(["x"]).tags(["div"]),
    compressed()
);
test!(
    unused_form_pseudo_element,
    "ns|input::-webkit-inner-spin-button{a:b}",
    "",
    UsageIndex::new(),
    compressed()
);
test!(
    used_form_pseudo_element,
    "ns|input::-webkit-inner-spin-button{a:b}",
    "ns|input::-webkit-inner-spin-button{a:b}",
    UsageIndex::new().attributes(["type=number"]),
    compressed()
);
test!(
    references_in_unparsed_rules_are_kept,
    ":root{--a:red;--b:blue}ns|p{color:var(--a)}",
    ":root{--a:red}ns|p{color:var(--a)}",
    UsageIndex::new(),
    compressed()
);
test!(
    expanded,
    "ns|p{color:red}",
    "ns|p {\n  color: red;\n}\n"
);
