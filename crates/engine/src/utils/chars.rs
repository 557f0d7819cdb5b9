pub(crate) fn opposite_bracket(b: char) -> char {
    debug_assert!(matches!(b, '(' | '{' | '[' | ')' | '}' | ']'));
    match b {
        '(' => ')',
        '{' => '}',
        '[' => ']',
        ')' => '(',
        '}' => '{',
        ']' => '[',
        _ => unreachable!(),
    }
}

pub(crate) fn is_name(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}

pub(crate) fn is_name_start(c: char) -> bool {
    // NOTE: in CSS Syntax Level 3, non-ASCII characters are those with code points
    // greater than or equal to U+0080; U+007F (DEL) is not included
    c == '_' || c.is_alphabetic() || c as u32 >= 0x0080
}

pub(crate) fn as_hex(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='F' => 10 + c as u32 - 'A' as u32,
        'a'..='f' => 10 + c as u32 - 'a' as u32,
        _ => panic!(),
    }
}

pub(crate) fn hex_char_for(number: u32) -> char {
    debug_assert!(number < 0x10);
    std::char::from_u32(if number < 0xA {
        0x30 + number
    } else {
        0x61 - 0xA + number
    })
    .unwrap_or('0')
}

/// Whether `c` may continue an identifier in the byte-level scanners used
/// for raw selector text and markup.
pub(crate) fn is_ascii_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}
