//! latex-input - LaTeX-like markup to precomposed Unicode
//!
//! Converts short markup such as `\mathbb{R}^2` or `\b{\mathcal{F}}` into a
//! plain Unicode string (`ℝ²`, `𝓕`) using the superscript, subscript and
//! font-variant decompositions of the Unicode Character Database.
//!
//! ```
//! use latex_input::{convert, FontContext};
//!
//! assert_eq!(convert("\\mathbb{N}_0", FontContext::new()).unwrap(), "ℕ₀");
//! assert_eq!(convert("x^2", FontContext::math_mode()).unwrap(), "𝑥²");
//! ```

pub mod core;
pub mod data;
pub mod utils;

pub use latex_input_ast as ast;

pub use crate::core::latex2unicode::{parse, FontAxis, FontContext, UnicodeConverter};
pub use data::{build_tables, symbols, CharacterVariant, TableStats, Tables};
pub use utils::{
    BuildError, ConversionError, ConversionOutput, ConversionResult, ConversionWarning,
    WarningKind,
};

/// Returned by [`latex_to_unicode`] in place of any failed conversion.
///
/// U+FFFD is never accepted as input, so the sentinel cannot be produced by
/// a successful conversion.
pub const FAILURE_SENTINEL: &str = "\u{FFFD}ERROR\u{FFFD}";

/// Convert `text` using the builtin tables.
pub fn convert(text: &str, context: FontContext) -> ConversionResult<String> {
    convert_with_tables(text, context, Tables::builtin())
}

/// Convert `text` using caller-provided tables.
pub fn convert_with_tables(
    text: &str,
    context: FontContext,
    tables: &Tables,
) -> ConversionResult<String> {
    convert_with_report(text, context, tables).map(|output| output.content)
}

/// Convert `text` and report every character that had to be kept unchanged.
pub fn convert_with_report(
    text: &str,
    context: FontContext,
    tables: &Tables,
) -> ConversionResult<ConversionOutput> {
    let formula = parse(text)?;
    let mut converter = UnicodeConverter::new(tables);
    let content = converter.render(&formula, context)?;
    Ok(ConversionOutput::with_warnings(
        content,
        converter.take_warnings(),
    ))
}

/// Host-facing conversion: any failure yields [`FAILURE_SENTINEL`].
pub fn latex_to_unicode(text: &str, context: FontContext, tables: &Tables) -> String {
    match convert_with_tables(text, context, tables) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("Failed to convert {:?}: {}", text, err);
            FAILURE_SENTINEL.to_string()
        }
    }
}
