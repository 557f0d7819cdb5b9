use cssprune::UsageIndex;

use macros::compressed;


test!(
    charset_expanded,
    "@charset \"UTF-8\";\n.a { b: c; }",
    "@charset \"UTF-8\";\n\n.a {\n  b: c;\n}\n",
    UsageIndex::new().classes(["a"])
);
test!(
    charset_compressed,
    "@charset \"UTF-8\";.a{b:c}",
    "@charset \"UTF-8\";.a{b:c}",
    UsageIndex::new().classes(["a"]),
    compressed()
);
test!(
    charset_without_semicolon,
    "@charset \"UTF-8\"",
    "@charset \"UTF-8\";",
    UsageIndex::new(),
    compressed()
);
test!(
    charset_survives_when_everything_else_is_removed,
    "@charset \"UTF-8\";.gone{b:c}",
    "@charset \"UTF-8\";\n"
);
