use std::{
    fmt::{self, Display},
    path::Path,
};

pub(crate) use markup::scan_markup;
pub(crate) use script::scan_script;

mod markup;
mod script;

const SCRIPT_EXTENSIONS: [&str; 6] = ["js", "jsx", "ts", "tsx", "mjs", "cjs"];

/// How a usage file is read
///
/// See [`crate::UsageIndex::scan_path`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// HTML and HTML-like templates
    Markup,

    /// JavaScript or TypeScript source
    Script,
}

impl SourceKind {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if SCRIPT_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)) => {
                Self::Script
            }
            Some(..) | None => Self::Markup,
        }
    }
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup => f.write_str("markup"),
            Self::Script => f.write_str("script"),
        }
    }
}
