use std::{
    error::Error,
    fmt::{self, Display},
    io,
    string::FromUtf8Error,
    sync::Arc,
};

use codemap::{Span, SpanLoc};

pub type CssResult<T> = Result<T, Box<CssError>>;

/// `CssError`s can be either a structured error specific to `cssprune` or an
/// `io::Error`.
///
/// In the former case, the best way to interact with the error is to simply print
/// it to the user. The `Display` implementation renders the offending line of
/// the stylesheet with a caret under the failing span.
#[derive(Debug, Clone)]
pub struct CssError {
    kind: CssErrorKind,
}

impl CssError {
    pub(crate) fn raw(self) -> (String, Span) {
        match self.kind {
            CssErrorKind::Raw(string, span) => (string, span),
            e => unreachable!("unable to get raw of {:?}", e),
        }
    }

    pub(crate) fn is_raw(&self) -> bool {
        matches!(self.kind, CssErrorKind::Raw(..))
    }

    pub(crate) fn from_loc(message: String, loc: SpanLoc, unicode: bool) -> Self {
        CssError {
            kind: CssErrorKind::ParseError {
                message,
                loc,
                unicode,
            },
        }
    }

    #[must_use]
    pub fn kind(self) -> PublicCssErrorKind {
        match self.kind {
            CssErrorKind::ParseError {
                message,
                loc,
                unicode,
            } => PublicCssErrorKind::ParseError {
                message,
                loc,
                unicode,
            },
            CssErrorKind::FromUtf8Error(s) => PublicCssErrorKind::FromUtf8Error(s),
            CssErrorKind::IoError(io) => PublicCssErrorKind::IoError(io),
            CssErrorKind::Raw(..) => unreachable!("raw errors should not be accessible by users"),
        }
    }

    /// The bare message of this error, without any source location
    #[must_use]
    pub fn message(&self) -> String {
        match &self.kind {
            CssErrorKind::Raw(message, ..) | CssErrorKind::ParseError { message, .. } => {
                message.clone()
            }
            CssErrorKind::IoError(error) => error.to_string(),
            CssErrorKind::FromUtf8Error(message) => message.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum PublicCssErrorKind {
    ParseError {
        /// The message of the error
        message: String,

        /// The location of the error inside the stylesheet
        loc: SpanLoc,

        /// Whether or not the user allows unicode characters to be emitted in
        /// error messages.
        ///
        /// This is configurable with [`crate::Options::unicode_error_messages`]
        unicode: bool,
    },

    /// This error kind is returned when a stylesheet or markup file cannot be
    /// read
    ///
    /// The error is wrapped in an `Arc` to allow for cloning
    IoError(Arc<io::Error>),

    /// The stylesheet contains invalid UTF-8
    FromUtf8Error(String),
}

#[derive(Debug, Clone)]
enum CssErrorKind {
    /// A raw error with no additional metadata
    /// It contains only a `String` message and
    /// a span
    Raw(String, Span),
    ParseError {
        message: String,
        loc: SpanLoc,
        unicode: bool,
    },
    IoError(Arc<io::Error>),
    FromUtf8Error(String),
}

impl Display for CssError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (message, loc, unicode) = match &self.kind {
            CssErrorKind::ParseError {
                message,
                loc,
                unicode,
            } => (message, loc, *unicode),
            CssErrorKind::FromUtf8Error(..) => return writeln!(f, "Error: Invalid UTF-8."),
            CssErrorKind::IoError(s) => return writeln!(f, "Error: {}", s),
            CssErrorKind::Raw(message, ..) => return writeln!(f, "Error: {}", message),
        };

        let first_bar = if unicode { '╷' } else { ',' };
        let middle_bar = if unicode { '│' } else { '|' };
        let last_bar = if unicode { '╵' } else { '\'' };

        let line = loc.begin.line + 1;
        let col = loc.begin.column + 1;
        writeln!(f, "Error: {}", message)?;
        let padding = " ".repeat(format!("{}", line).len() + 1);
        writeln!(f, "{}{}", padding, first_bar)?;
        writeln!(
            f,
            "{} {} {}",
            line,
            middle_bar,
            loc.file.source_line(loc.begin.line)
        )?;

        let carets = if loc.begin.line == loc.end.line {
            loc.end.column.saturating_sub(loc.begin.column).max(1)
        } else {
            loc.file
                .source_line(loc.begin.line)
                .len()
                .saturating_sub(loc.begin.column)
                .max(1)
        };

        writeln!(
            f,
            "{}{} {}{}",
            padding,
            middle_bar,
            " ".repeat(loc.begin.column),
            "^".repeat(carets)
        )?;
        writeln!(f, "{}{}", padding, last_bar)?;
        writeln!(f, "  {} {}:{}", loc.file.name(), line, col)?;
        Ok(())
    }
}

impl From<io::Error> for Box<CssError> {
    #[inline]
    fn from(error: io::Error) -> Box<CssError> {
        Box::new(CssError {
            kind: CssErrorKind::IoError(Arc::new(error)),
        })
    }
}

impl From<FromUtf8Error> for Box<CssError> {
    #[inline]
    fn from(error: FromUtf8Error) -> Box<CssError> {
        let bad_byte = error.as_bytes().get(error.utf8_error().valid_up_to());

        Box::new(CssError {
            kind: CssErrorKind::FromUtf8Error(match bad_byte {
                Some(byte) => format!("Invalid UTF-8 character \"\\x{:X?}\"", byte),
                None => "Invalid UTF-8.".to_owned(),
            }),
        })
    }
}

impl From<(&str, Span)> for Box<CssError> {
    #[inline]
    fn from(error: (&str, Span)) -> Box<CssError> {
        Box::new(CssError {
            kind: CssErrorKind::Raw(error.0.to_owned(), error.1),
        })
    }
}

impl From<(String, Span)> for Box<CssError> {
    #[inline]
    fn from(error: (String, Span)) -> Box<CssError> {
        Box::new(CssError {
            kind: CssErrorKind::Raw(error.0, error.1),
        })
    }
}

impl Error for CssError {
    #[inline]
    fn description(&self) -> &'static str {
        "CSS parsing error"
    }
}
