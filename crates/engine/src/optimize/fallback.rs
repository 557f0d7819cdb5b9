//! Keep/drop decisions for selectors that could not be parsed.
//!
//! Rather than understanding the selector, the text is searched for things
//! that look like class names (`.name`) and tag names (`name:`), and the rule
//! is kept if the markup could plausibly match them. Anything with neither is
//! kept.

use crate::{utils::is_ascii_ident_byte, Options, UsageIndex};

use super::form_pseudo;

pub(crate) fn keep_raw_selector(text: &str, usage: &UsageIndex, options: &Options) -> bool {
    if text.is_empty() {
        return false;
    }

    if options.remove_form_pseudoelements && has_unused_form_pseudo(text, usage, options) {
        return false;
    }

    let bytes = text.as_bytes();

    let mut found_class = false;
    let mut used_class = false;
    let mut found_tag = false;
    let mut used_tag = false;

    let mut idx = 0;
    while idx < bytes.len() {
        let at_class = bytes[idx] == b'.'
            && bytes
                .get(idx + 1)
                .map_or(false, |&b| b.is_ascii_alphabetic() || b == b'_' || b == b'-');

        if at_class {
            let start = idx + 1;
            let end = ident_end(bytes, start);
            found_class = true;
            used_class |= usage.has_class(&text[start..end]);
            idx = end;
            continue;
        }

        let at_word_start = idx == 0 || !is_ascii_ident_byte(bytes[idx - 1]);

        if at_word_start && bytes[idx].is_ascii_alphabetic() {
            let end = ident_end(bytes, idx);
            if bytes.get(end) == Some(&b':') {
                found_tag = true;
                used_tag |= usage.has_tag(&text[idx..end]);
            }
            idx = end;
            continue;
        }

        idx += 1;
    }

    if found_class && !used_class {
        return false;
    }

    if found_tag && usage.has_tags() && !used_tag {
        return false;
    }

    true
}

/// Whether any `::name` in `text` is a form-control pseudo-element for a
/// control the markup doesn't use
fn has_unused_form_pseudo(text: &str, usage: &UsageIndex, options: &Options) -> bool {
    let bytes = text.as_bytes();

    text.match_indices("::").any(|(idx, _)| {
        let start = idx + 2;
        let end = ident_end(bytes, start);

        end > start && form_pseudo::should_remove(&text[start..end], usage, options)
    })
}

fn ident_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && is_ascii_ident_byte(bytes[end]) {
        end += 1;
    }
    end
}
