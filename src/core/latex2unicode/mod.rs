//! LaTeX-like markup to Unicode converter
//!
//! Input is parsed into a [`Formula`](latex_input_ast::Formula) by the
//! recursive-descent [`parser`], then rendered by a [`UnicodeConverter`]
//! that threads a [`FontContext`] through the tree and resolves every
//! character against the Unicode tables.

pub mod context;
pub mod parser;
mod render;
mod utils;

pub use context::{FontAxis, FontContext, UnicodeConverter};
pub use parser::{is_allowed_char, is_escapable_char, parse, Parser};
pub use utils::apply_text_substitutions;
