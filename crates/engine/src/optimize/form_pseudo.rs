use phf::phf_map;

use crate::{Options, UsageIndex};

/// The markup that makes a form-control pseudo-element reachable
struct FormControl {
    attributes: &'static [&'static str],
    tags: &'static [&'static str],
}

impl FormControl {
    fn is_present(&self, usage: &UsageIndex) -> bool {
        self.attributes
            .iter()
            .any(|token| usage.has_attribute_token(token))
            || self.tags.iter().any(|tag| usage.has_tag(tag))
    }
}

const FILE_INPUT: FormControl = FormControl {
    attributes: &["type=file"],
    tags: &[],
};

const NUMBER_INPUT: FormControl = FormControl {
    attributes: &["type=number"],
    tags: &[],
};

const DATE_INPUT: FormControl = FormControl {
    attributes: &["type=date", "type=time", "type=datetime-local"],
    tags: &[],
};

const FOCUS_RING: FormControl = FormControl {
    attributes: &[],
    tags: &["button", "input"],
};

const SEARCH_INPUT: FormControl = FormControl {
    attributes: &["type=search"],
    tags: &[],
};

const COLOR_INPUT: FormControl = FormControl {
    attributes: &["type=color"],
    tags: &[],
};

/// Keyed by lowercase name, without colons
static FORM_PSEUDO_ELEMENTS: phf::Map<&'static str, FormControl> = phf_map! {
    "file-selector-button" => FILE_INPUT,
    "-webkit-file-upload-button" => FILE_INPUT,
    "-webkit-inner-spin-button" => NUMBER_INPUT,
    "-webkit-calendar-picker-indicator" => DATE_INPUT,
    "-webkit-datetime-edit-day-field" => DATE_INPUT,
    "-moz-focus-inner" => FOCUS_RING,
    "-webkit-search-decoration" => SEARCH_INPUT,
    "-webkit-color-swatch-wrapper" => COLOR_INPUT,
};

/// Whether the pseudo-element `name` styles a form control that the markup
/// never uses. Names outside the table are never removed.
pub(crate) fn should_remove(name: &str, usage: &UsageIndex, options: &Options) -> bool {
    if !options.remove_form_pseudoelements {
        return false;
    }

    let name = name.trim_start_matches(':').to_ascii_lowercase();

    match FORM_PSEUDO_ELEMENTS.get(name.as_str()) {
        Some(control) => !control.is_present(usage),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::{Options, UsageIndex};

    use super::should_remove;

    #[test]
    fn spellings_are_case_insensitive() {
        let usage = UsageIndex::new();
        let options = Options::default();

        assert!(should_remove("::FILE-SELECTOR-BUTTON", &usage, &options));
        assert!(should_remove("-webkit-file-upload-button", &usage, &options));
        assert!(!should_remove("::before", &usage, &options));
    }

    #[test]
    fn qualifying_markup_keeps_the_pseudo_element() {
        let options = Options::default();
        let file = UsageIndex::new().attributes(["type=file"]);
        let time = UsageIndex::new().attributes(["type=time"]);
        let button = UsageIndex::new().tags(["BUTTON"]);
        let bare_type = UsageIndex::new().attributes(["type"]);

        assert!(!should_remove("::file-selector-button", &file, &options));
        assert!(!should_remove("::-webkit-calendar-picker-indicator", &time, &options));
        assert!(!should_remove("::-moz-focus-inner", &button, &options));
        assert!(should_remove("::-moz-focus-inner", &file, &options));
        assert!(should_remove("::-webkit-color-swatch-wrapper", &bare_type, &options));
    }

    #[test]
    fn disabled_policy_keeps_everything() {
        let options = Options::default().remove_form_pseudoelements(false);

        assert!(!should_remove(
            "::-webkit-search-decoration",
            &UsageIndex::new(),
            &options
        ));
    }
}
