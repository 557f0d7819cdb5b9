pub use stmt::*;

mod stmt;
