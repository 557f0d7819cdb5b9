use cssprune::UsageIndex;

use macros::compressed;


test!(
    unused_custom_property_in_used_rule,
    ".x{--unused:1;color:red}",
    ".x{color:red}",
    UsageIndex::new().classes(["x"]),
    compressed()
);
test!(
    rule_with_only_unused_custom_properties_is_removed,
    ":root{--a:red;--b:blue}.x{color:green}",
    ".x{color:green}",
    UsageIndex::new().classes(["x"]),
    compressed()
);
test!(
    referenced_only_by_removed_rule,
    ":root{--a:red}.gone{color:var(--a)}",
    "",
    UsageIndex::new(),
    compressed()
);
test!(
    referenced_by_another_custom_property,
    ":root{--a:red;--b:var(--a)}.x{color:var(--b)}",
    ":root{--a:red;--b:var(--a)}.x{color:var(--b)}",
    UsageIndex::new().classes(["x"]),
    compressed()
);
test!(
    referenced_from_media_query,
    ":root{--gap:4px}@media (min-width: 10px){.a{margin:var(--gap)}}",
    ":root{--gap:4px}@media (min-width: 10px){.a{margin:var(--gap)}}",
    UsageIndex::new().classes(["a"]),
    compressed()
);
test!(
    declared_inside_media_query,
    "@media print{:root{--ink:black;--paper:white}}.a{color:var(--ink)}",
    "@media print{:root{--ink:black}}.a{color:var(--ink)}",
    UsageIndex::new().classes(["a"]),
    compressed()
);
test!(
    referenced_from_font_face,
    ":root{--family:Foo}@font-face{font-family:var(--family)}",
    ":root{--family:Foo}@font-face{font-family:var(--family)}",
    UsageIndex::new(),
    compressed()
);
// the name of a `var()` reference runs up to the first `)`, so a fallback
// value hides the property it falls back from
test!(
    fallback_value_hides_reference,
    ":root{--a:red}.x{color:var(--a, blue)}",
    ".x{color:var(--a, blue)}",
    UsageIndex::new().classes(["x"]),
    compressed()
);
test!(
    nested_fallback_reference,
    ":root{--a:red;--b:blue}.x{color:var(--a, var(--b))}",
    ":root{--b:blue}.x{color:var(--a, var(--b))}",
    UsageIndex::new().classes(["x"]),
    compressed()
);
test!(
    custom_property_value_whitespace_is_collapsed,
    ":root { --shadow: 0 0 1px  rgba(0,0,0,.5) , 0 1px 2px red; }\n.x { box-shadow: var(--shadow); }",
    ":root {\n  --shadow: 0 0 1px rgba(0,0,0,.5) , 0 1px 2px red;\n}\n\n.x {\n  box-shadow: var(--shadow);\n}\n",
    UsageIndex::new().classes(["x"])
);
