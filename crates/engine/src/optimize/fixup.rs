/// Makes sure the first `@charset "..."` is terminated by a semicolon
pub(crate) fn fix_charset_semicolon(css: &mut String) {
    let at = match css.find("@charset") {
        Some(at) => at,
        None => return,
    };

    let open = match css[at..].find('"') {
        Some(idx) => at + idx,
        None => return,
    };

    let close = match css[open + 1..].find('"') {
        Some(idx) => open + 1 + idx,
        None => return,
    };

    let rest = css[close + 1..].trim_start_matches(|c| c == ' ' || c == '\t');

    if !rest.starts_with(';') {
        css.insert(close + 1, ';');
    }
}

#[cfg(test)]
mod tests {
    use super::fix_charset_semicolon;

    fn fixed(css: &str) -> String {
        let mut css = css.to_owned();
        fix_charset_semicolon(&mut css);
        css
    }

    #[test]
    fn inserts_missing_semicolon() {
        assert_eq!(fixed("@charset \"UTF-8\"\na{}"), "@charset \"UTF-8\";\na{}");
        assert_eq!(fixed("@charset \"UTF-8\""), "@charset \"UTF-8\";");
    }

    #[test]
    fn leaves_terminated_charset_alone() {
        assert_eq!(fixed("@charset \"UTF-8\" \t;a{}"), "@charset \"UTF-8\" \t;a{}");
        assert_eq!(fixed("@charset \"UTF-8\";"), "@charset \"UTF-8\";");
    }

    #[test]
    fn ignores_other_input() {
        assert_eq!(fixed("a{content:\"x\"}"), "a{content:\"x\"}");
        assert_eq!(fixed("@charset 'UTF-8'"), "@charset 'UTF-8'");
        assert_eq!(fixed("@charset \"UTF-8"), "@charset \"UTF-8");
    }
}
