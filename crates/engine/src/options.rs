use crate::{Fs, Logger, StdFs, StdLogger};

/// Configuration for stylesheet pruning
///
/// The simplest usage is `cssprune::Options::default()`; however, a builder pattern
/// is also exposed to offer more control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) fs: &'a dyn Fs,
    pub(crate) logger: &'a dyn Logger,
    pub(crate) mode: ReductionMode,
    pub(crate) style: OutputStyle,
    pub(crate) remove_unused_keyframes: bool,
    pub(crate) remove_form_pseudoelements: bool,
    pub(crate) max_nesting_depth: usize,
    pub(crate) verbose: bool,
    pub(crate) quiet: bool,
    pub(crate) unicode_error_messages: bool,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            fs: &StdFs,
            logger: &StdLogger,
            mode: ReductionMode::Safe,
            style: OutputStyle::Expanded,
            remove_unused_keyframes: true,
            remove_form_pseudoelements: true,
            max_nesting_depth: 32,
            verbose: false,
            quiet: false,
            unicode_error_messages: true,
        }
    }
}

impl<'a> Options<'a> {
    /// This option allows you to control the file system that stylesheets
    /// and markup files are read from.
    ///
    /// By default, it uses [`StdFs`], which is backed by [`std::fs`],
    /// allowing direct, unfettered access to the local file system.
    #[must_use]
    #[inline]
    pub fn fs(mut self, fs: &'a dyn Fs) -> Self {
        self.fs = fs;
        self
    }

    /// This option allows you to define how log events should be handled
    ///
    /// Be default, [`StdLogger`] is used, which writes all events to standard error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// How aggressively selectors are pruned
    ///
    /// See [`ReductionMode`] for the differences between modes. By default,
    /// [`ReductionMode::Safe`] is used.
    #[must_use]
    #[inline]
    pub const fn mode(mut self, mode: ReductionMode) -> Self {
        self.mode = mode;
        self
    }

    /// `cssprune` currently offers 2 different output styles
    ///
    ///  - [`OutputStyle::Expanded`] writes each selector and declaration on its own line.
    ///  - [`OutputStyle::Compressed`] removes as many extra characters as possible
    ///    and writes the entire stylesheet on a single line.
    ///
    /// By default, output is expanded.
    #[must_use]
    #[inline]
    pub const fn style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// Whether `@keyframes` rules whose name is never referenced by an
    /// `animation` or `animation-name` declaration are removed.
    ///
    /// By default, this value is `true`.
    #[must_use]
    #[inline]
    pub const fn remove_unused_keyframes(mut self, remove_unused_keyframes: bool) -> Self {
        self.remove_unused_keyframes = remove_unused_keyframes;
        self
    }

    /// Whether form-control pseudo-elements such as `::file-selector-button`
    /// are removed when no markup uses the matching control.
    ///
    /// By default, this value is `true`.
    #[must_use]
    #[inline]
    pub const fn remove_form_pseudoelements(mut self, remove_form_pseudoelements: bool) -> Self {
        self.remove_form_pseudoelements = remove_form_pseudoelements;
        self
    }

    /// The deepest level of nested at-rule blocks that will be pruned.
    ///
    /// Blocks nested deeper than this are kept verbatim. By default, this
    /// value is `32`.
    #[must_use]
    #[inline]
    pub const fn max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }

    /// Emit a summary of every removal through [`Logger::debug`].
    ///
    /// By default, this value is `false`.
    #[must_use]
    #[inline]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// This flag stops all logs from reaching the [`crate::Logger`], including
    /// warnings about nested blocks that could not be parsed.
    ///
    /// By default, this value is `false` and warnings are emitted.
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// This flag tells `cssprune` only to emit ASCII characters as
    /// part of error messages.
    ///
    /// By default non-ASCII characters are emitted for these messages.
    ///
    /// This flag does not affect the CSS output.
    #[must_use]
    #[inline]
    pub const fn unicode_error_messages(mut self, unicode_error_messages: bool) -> Self {
        self.unicode_error_messages = unicode_error_messages;
        self
    }
}

/// How aggressively selectors are pruned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReductionMode {
    /// Every component must be accounted for, including `*` once any tags
    /// are known.
    Strict,

    /// The universal selector is always kept, together with the rest of the
    /// chain after it.
    Safe,

    /// Like [`ReductionMode::Safe`], and vendor-prefixed pseudo-elements are
    /// never removed.
    Conservative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputStyle {
    /// The default style, this mode writes each
    /// selector and declaration on its own line.
    Expanded,
    /// Ideal for release builds, this mode removes
    /// as many extra characters as possible and
    /// writes the entire stylesheet on a single line.
    Compressed,
}
