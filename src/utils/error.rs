//! Error handling for latex-input conversions
//!
//! This module provides the error, warning and result types shared by the
//! parser, the renderer and the Unicode table builder.

use serde::Serialize;
use std::fmt;

/// Conversion error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A `{` group was still open at the end of the input
    UnterminatedGroup { position: usize },
    /// `^`, `_` or `\` without a valid continuation
    DanglingOperator { operator: char, position: usize },
    /// A character that cannot start an expression (e.g. a stray `}`)
    UnexpectedCharacter { found: char, position: usize },
    /// Groups nested deeper than `max_depth`; `position` is the offending `{`
    RecursionLimitExceeded { max_depth: usize, position: usize },
    /// A braced operand was given to a name that is not a known function
    UnsupportedMacro { name: String },
    /// A control word that is not in the symbol catalog
    UnsupportedSymbol { name: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::UnterminatedGroup { position } => {
                write!(f, "Unterminated group opened at byte {}", position)
            }
            ConversionError::DanglingOperator { operator, position } => {
                write!(
                    f,
                    "Dangling '{}' at byte {}: expected an operand",
                    operator, position
                )
            }
            ConversionError::UnexpectedCharacter { found, position } => {
                write!(f, "Unexpected character '{}' at byte {}", found, position)
            }
            ConversionError::RecursionLimitExceeded {
                max_depth,
                position,
            } => write!(
                f,
                "Group at byte {} exceeds the maximum nesting depth ({})",
                position, max_depth
            ),
            ConversionError::UnsupportedMacro { name } => {
                write!(f, "Unsupported macro '\\{}'", name)
            }
            ConversionError::UnsupportedSymbol { name } => {
                write!(f, "Unsupported symbol '\\{}'", name)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn unterminated(position: usize) -> Self {
        ConversionError::UnterminatedGroup { position }
    }

    pub fn dangling(operator: char, position: usize) -> Self {
        ConversionError::DanglingOperator { operator, position }
    }

    pub fn unexpected(found: char, position: usize) -> Self {
        ConversionError::UnexpectedCharacter { found, position }
    }

    pub fn recursion_limit(max_depth: usize, position: usize) -> Self {
        ConversionError::RecursionLimitExceeded {
            max_depth,
            position,
        }
    }

    pub fn unsupported_macro(name: impl Into<String>) -> Self {
        ConversionError::UnsupportedMacro { name: name.into() }
    }

    pub fn unsupported_symbol(name: impl Into<String>) -> Self {
        ConversionError::UnsupportedSymbol { name: name.into() }
    }

    /// Whether the error was raised while parsing, as opposed to rendering.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, ConversionError::UnsupportedSymbol { .. })
    }
}

/// Table construction error. Fatal: there is no degraded mode without tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A record did not have the 15 fields of the UnicodeData.txt layout
    MalformedRecord { line: usize, fields: usize },
    /// A code point field was not valid hexadecimal or not a Unicode scalar
    InvalidCodepoint { line: usize, value: String },
    /// The database could not be read
    Io { message: String },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MalformedRecord { line, fields } => write!(
                f,
                "Malformed Unicode data record at line {}: expected 15 fields, found {}",
                line, fields
            ),
            BuildError::InvalidCodepoint { line, value } => {
                write!(f, "Invalid code point '{}' at line {}", value, line)
            }
            BuildError::Io { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::Io {
            message: err.to_string(),
        }
    }
}

/// Kind of per-character fallback recorded during rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// No superscript form exists for the character
    MissingSuperscript,
    /// No subscript form exists for the character
    MissingSubscript,
    /// No variant matches the requested font axes
    MissingVariant,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::MissingSuperscript => write!(f, "missing superscript"),
            WarningKind::MissingSubscript => write!(f, "missing subscript"),
            WarningKind::MissingVariant => write!(f, "missing variant"),
        }
    }
}

/// Conversion warnings (non-fatal issues): the character was kept unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionWarning {
    pub kind: WarningKind,
    pub character: char,
    pub message: String,
}

impl ConversionWarning {
    pub fn new(kind: WarningKind, character: char, message: impl Into<String>) -> Self {
        Self {
            kind,
            character,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning [{}] '{}' (U+{:04X}): {}",
            self.kind, self.character, self.character as u32, self.message
        )
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionOutput {
    /// The converted content
    pub content: String,
    /// Characters that fell back to themselves during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn with_warnings(content: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
