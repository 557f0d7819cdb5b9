use std::borrow::Cow;

use super::{as_hex, is_name, is_name_start};

/// Whether `text` can be written unquoted as a CSS identifier
pub(crate) fn is_ident(text: &str) -> bool {
    let mut chars = text.chars();

    match chars.next() {
        Some('-') => match chars.next() {
            Some('-') => return chars.all(is_name),
            Some(c) if is_name_start(c) => {}
            Some(..) | None => return false,
        },
        Some(c) if is_name_start(c) => {}
        Some(..) | None => return false,
    }

    chars.all(is_name)
}

/// Resolves the escapes in an identifier as written in a stylesheet, so
/// `sm\:flex` becomes `sm:flex`
pub(crate) fn unescape_ident(name: &str) -> Cow<str> {
    if !name.contains('\\') {
        return Cow::Borrowed(name);
    }

    let mut buffer = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            buffer.push(c);
            continue;
        }

        match chars.peek() {
            Some(next) if next.is_ascii_hexdigit() => {
                let mut value = 0;
                for _ in 0..6 {
                    match chars.peek() {
                        Some(&digit) if digit.is_ascii_hexdigit() => {
                            value = value * 16 + as_hex(digit);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                if chars.peek() == Some(&' ') {
                    chars.next();
                }

                buffer.push(std::char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            Some(..) => buffer.extend(chars.next()),
            None => buffer.push('\\'),
        }
    }

    Cow::Owned(buffer)
}

/// Strips a leading vendor prefix such as `-webkit-` from `name`
pub(crate) fn unvendor(name: &str) -> &str {
    let bytes = name.as_bytes();

    if bytes.len() < 2 || bytes[0] != b'-' || bytes[1] == b'-' {
        return name;
    }

    match name[1..].find('-') {
        Some(idx) => &name[idx + 2..],
        None => name,
    }
}

/// Whether `name` (with or without leading colons) starts with one of the
/// vendor prefixes browsers ship pseudo-elements under
pub(crate) fn has_vendor_prefix(name: &str) -> bool {
    let name = name.trim_start_matches(':').to_ascii_lowercase();

    ["-webkit-", "-moz-", "-ms-", "-o-"]
        .iter()
        .any(|prefix| name.starts_with(prefix))
}
