pub use attribute::{Attribute, AttributeOp};
pub use list::{SelectorChain, SelectorList};
pub(crate) use parse::SelectorParser;
pub use simple::{Combinator, Pseudo, SelectorComponent};

mod attribute;
mod list;
mod parse;
mod simple;
