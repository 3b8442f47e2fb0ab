//! Unicode lookup tables built from UnicodeData.txt records
//!
//! Three tables are derived from the decomposition field of the Unicode
//! Character Database:
//! - `<super>` records give the superscript form of a base character
//! - `<sub>` records give the subscript form
//! - `<font>` records give styled variants (bold, script, double-struck, ...)
//!
//! The builtin tables are built once from a bundled snapshot and shared for
//! the lifetime of the process.

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use std::io::BufRead;
use std::str::FromStr;

use super::symbols;
use crate::core::latex2unicode::FontContext;
use crate::utils::BuildError;

/// UnicodeData.txt (14.0.0) restricted to `<super>`, `<sub>` and `<font>` records.
const BUNDLED_UNICODE_DATA: &str = include_str!("../../data/UnicodeData-variants.txt");

const FIELD_COUNT: usize = 15;

/// Superscripts whose database decomposition points at a Latin look-alike
/// (e.g. U+1D45 decomposes to LATIN SMALL LETTER ALPHA, not GREEK SMALL LETTER ALPHA).
const SUPERSCRIPT_OVERRIDES: [(char, char); 4] = [
    ('\u{03B1}', '\u{1D45}'), // α -> ᵅ
    ('\u{03F5}', '\u{1D4B}'), // ϵ -> ᵋ
    ('\u{03B9}', '\u{1DA5}'), // ι -> ᶥ
    ('\u{03D5}', '\u{1DB2}'), // ϕ -> ᶲ
];

lazy_static! {
    static ref BUILTIN_TABLES: Tables = Tables::from_str(BUNDLED_UNICODE_DATA)
        .expect("bundled Unicode data is well-formed");
}

/// One precomposed glyph for a base character, classified from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterVariant {
    pub glyph: char,
    pub bold: bool,
    pub double_struck: bool,
    pub fraktur: bool,
    pub italic: bool,
    /// Named "MATHEMATICAL ..."; preferred when several variants match
    pub mathematical: bool,
    pub monospace: bool,
    pub sans_serif: bool,
    pub script: bool,
}

impl CharacterVariant {
    /// Classify a glyph by the words of its character name.
    pub fn from_name(glyph: char, name: &str) -> Self {
        let mut variant = CharacterVariant {
            glyph,
            ..Default::default()
        };
        for word in name.split(' ') {
            match word {
                "BOLD" => variant.bold = true,
                "DOUBLE-STRUCK" => variant.double_struck = true,
                "FRAKTUR" | "BLACK-LETTER" => variant.fraktur = true,
                "ITALIC" => variant.italic = true,
                "MATHEMATICAL" => variant.mathematical = true,
                "MONOSPACE" => variant.monospace = true,
                "SANS-SERIF" => variant.sans_serif = true,
                "SCRIPT" => variant.script = true,
                _ => {}
            }
        }
        variant
    }

    /// Whether the styling axes equal those requested by `context`.
    ///
    /// Subscript and superscript are not variant axes and are ignored.
    pub fn matches(&self, context: &FontContext) -> bool {
        self.bold == context.bold
            && self.double_struck == context.double_struck
            && self.fraktur == context.fraktur
            && self.italic == context.italic
            && self.sans_serif == context.sans_serif
            && self.script == context.script
    }
}

/// Entry counts, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub superscripts: usize,
    pub subscripts: usize,
    pub variant_bases: usize,
    pub variants: usize,
    pub symbols: usize,
}

/// Immutable lookup tables used by the renderer.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    superscripts: FxHashMap<char, char>,
    subscripts: FxHashMap<char, char>,
    variants: FxHashMap<char, Vec<CharacterVariant>>,
}

impl Tables {
    /// Tables built from the bundled Unicode data, shared process-wide.
    pub fn builtin() -> &'static Tables {
        &BUILTIN_TABLES
    }

    /// Superscript form of `base`, if the database has one.
    pub fn superscript(&self, base: char) -> Option<char> {
        self.superscripts.get(&base).copied()
    }

    /// Subscript form of `base`, if the database has one.
    pub fn subscript(&self, base: char) -> Option<char> {
        self.subscripts.get(&base).copied()
    }

    /// Styled variants of `base`, in database order.
    pub fn variants(&self, base: char) -> &[CharacterVariant] {
        self.variants.get(&base).map_or(&[], Vec::as_slice)
    }

    /// Pick the variant of `base` whose styling matches `context`.
    ///
    /// Among several matches the first "MATHEMATICAL" glyph wins, otherwise
    /// the first in database order.
    pub fn select_variant(&self, base: char, context: &FontContext) -> Option<char> {
        let mut candidates = self
            .variants(base)
            .iter()
            .filter(|variant| variant.matches(context));
        let first = candidates.next()?;
        if first.mathematical {
            return Some(first.glyph);
        }
        let preferred = candidates.find(|variant| variant.mathematical);
        Some(preferred.unwrap_or(first).glyph)
    }

    /// Symbol catalog lookup.
    pub fn symbol(&self, name: &str) -> Option<char> {
        symbols::lookup(name)
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            superscripts: self.superscripts.len(),
            subscripts: self.subscripts.len(),
            variant_bases: self.variants.len(),
            variants: self.variants.values().map(Vec::len).sum(),
            symbols: symbols::SYMBOLS.len(),
        }
    }
}

impl FromStr for Tables {
    type Err = BuildError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let mut builder = TableBuilder::default();
        for (index, line) in data.lines().enumerate() {
            builder.push_record(index + 1, line)?;
        }
        Ok(builder.finish())
    }
}

/// Build the tables from a reader over UnicodeData.txt.
pub fn build_tables<R: BufRead>(reader: R) -> Result<Tables, BuildError> {
    let mut builder = TableBuilder::default();
    for (index, line) in reader.lines().enumerate() {
        builder.push_record(index + 1, &line?)?;
    }
    Ok(builder.finish())
}

/// The fields of a UnicodeData.txt record that table construction needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UnicodeRecord<'a> {
    codepoint: u32,
    name: &'a str,
    decomposition: &'a str,
}

impl<'a> UnicodeRecord<'a> {
    fn parse(line_number: usize, line: &'a str) -> Result<Self, BuildError> {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() != FIELD_COUNT {
            return Err(BuildError::MalformedRecord {
                line: line_number,
                fields: fields.len(),
            });
        }
        Ok(UnicodeRecord {
            codepoint: parse_hex(line_number, fields[0])?,
            name: fields[1],
            decomposition: fields[5],
        })
    }
}

fn parse_hex(line_number: usize, value: &str) -> Result<u32, BuildError> {
    u32::from_str_radix(value.trim(), 16).map_err(|_| BuildError::InvalidCodepoint {
        line: line_number,
        value: value.to_string(),
    })
}

fn parse_scalar(line_number: usize, value: &str) -> Result<char, BuildError> {
    char::from_u32(parse_hex(line_number, value)?).ok_or_else(|| BuildError::InvalidCodepoint {
        line: line_number,
        value: value.to_string(),
    })
}

#[derive(Debug, Default)]
struct TableBuilder {
    tables: Tables,
}

impl TableBuilder {
    fn push_record(&mut self, line_number: usize, line: &str) -> Result<(), BuildError> {
        if line.is_empty() {
            return Ok(());
        }
        let record = UnicodeRecord::parse(line_number, line)?;
        if record.decomposition.is_empty() {
            return Ok(());
        }

        let (tag, base_sequence) = if record.decomposition.starts_with('<') {
            match record.decomposition.split_once(' ') {
                Some((tag, rest)) => (Some(tag), rest),
                None => (Some(record.decomposition), ""),
            }
        } else {
            (None, record.decomposition)
        };

        // Only 1 -> 1 mappings are modeled
        let mut bases = base_sequence.split_whitespace();
        let (Some(base), None) = (bases.next(), bases.next()) else {
            return Ok(());
        };

        let Some(tag) = tag else {
            return Ok(());
        };
        if !matches!(tag, "<super>" | "<sub>" | "<font>") {
            log::trace!("ignoring {} decomposition of U+{:04X}", tag, record.codepoint);
            return Ok(());
        }

        let base = parse_scalar(line_number, base)?;
        let glyph = char::from_u32(record.codepoint).ok_or_else(|| BuildError::InvalidCodepoint {
            line: line_number,
            value: format!("{:04X}", record.codepoint),
        })?;

        // Later records overwrite earlier ones
        match tag {
            "<super>" => {
                self.tables.superscripts.insert(base, glyph);
            }
            "<sub>" => {
                self.tables.subscripts.insert(base, glyph);
            }
            _ => {
                self.tables
                    .variants
                    .entry(base)
                    .or_default()
                    .push(CharacterVariant::from_name(glyph, record.name));
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Tables {
        for (base, glyph) in SUPERSCRIPT_OVERRIDES {
            self.tables.superscripts.insert(base, glyph);
        }
        let stats = self.tables.stats();
        log::debug!(
            "built Unicode tables: {} superscripts, {} subscripts, {} variants over {} base characters",
            stats.superscripts,
            stats.subscripts,
            stats.variants,
            stats.variant_bases
        );
        self.tables
    }
}
