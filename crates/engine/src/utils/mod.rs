pub(crate) use chars::*;
pub(crate) use strings::*;

mod chars;
mod strings;
