pub mod parser;
pub mod types;

pub use parser::*;
pub use types::*;

use crate::error::SyntaxError;

#[cfg(test)]
use mockall::automock;

/// Language front-end: turns one file's text into its top-level declarations.
///
/// Implementations are constructed once and shared by reference across every
/// parse call.
#[cfg_attr(test, automock)]
pub trait FrontEnd {
    fn parse(&self, text: &str) -> Result<Vec<Declaration>, SyntaxError>;
}
