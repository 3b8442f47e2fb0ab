//! Font context and converter state
//!
//! A [`FontContext`] is a plain value: every function derives the context of
//! its operands by copying the parent and flipping a subset of axes.

use serde::Serialize;
use std::fmt;

use latex_input_ast::FunctionKind;

use crate::data::Tables;
use crate::utils::ConversionWarning;

// =============================================================================
// Font context
// =============================================================================

/// One independent boolean axis of a [`FontContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontAxis {
    Bold,
    DoubleStruck,
    Fraktur,
    Italic,
    SansSerif,
    Script,
    Subscript,
    Superscript,
}

impl FontAxis {
    pub const ALL: [FontAxis; 8] = [
        FontAxis::Bold,
        FontAxis::DoubleStruck,
        FontAxis::Fraktur,
        FontAxis::Italic,
        FontAxis::SansSerif,
        FontAxis::Script,
        FontAxis::Subscript,
        FontAxis::Superscript,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontAxis::Bold => "bold",
            FontAxis::DoubleStruck => "double-struck",
            FontAxis::Fraktur => "fraktur",
            FontAxis::Italic => "italic",
            FontAxis::SansSerif => "sans-serif",
            FontAxis::Script => "script",
            FontAxis::Subscript => "subscript",
            FontAxis::Superscript => "superscript",
        }
    }
}

/// Axes set and cleared by a function, applied in that order
struct Transition {
    sets: &'static [FontAxis],
    clears: &'static [FontAxis],
}

fn transition(kind: FunctionKind) -> Transition {
    use FontAxis::*;

    match kind {
        FunctionKind::Superscript => Transition { sets: &[Superscript], clears: &[] },
        FunctionKind::Subscript => Transition { sets: &[Subscript], clears: &[] },
        FunctionKind::Vector => Transition { sets: &[], clears: &[] },
        FunctionKind::DoubleStruck => Transition { sets: &[DoubleStruck], clears: &[Italic, Bold] },
        FunctionKind::Calligraphic => Transition { sets: &[Script], clears: &[Italic] },
        FunctionKind::Fraktur => Transition { sets: &[Fraktur], clears: &[Italic] },
        FunctionKind::Bold => Transition { sets: &[Bold], clears: &[DoubleStruck] },
        FunctionKind::Italic => Transition {
            sets: &[Italic],
            clears: &[Fraktur, Script, DoubleStruck],
        },
        FunctionKind::BoldItalic => Transition {
            sets: &[Bold, Italic],
            clears: &[DoubleStruck, Fraktur, Script],
        },
        FunctionKind::SansSerif => Transition {
            sets: &[SansSerif],
            clears: &[DoubleStruck, Fraktur, Script],
        },
        FunctionKind::Roman => Transition {
            sets: &[],
            clears: &[Bold, DoubleStruck, Fraktur, Italic, SansSerif, Script],
        },
    }
}

/// Styling requested for the characters being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct FontContext {
    pub bold: bool,
    pub double_struck: bool,
    pub fraktur: bool,
    pub italic: bool,
    pub sans_serif: bool,
    pub script: bool,
    pub subscript: bool,
    pub superscript: bool,
}

impl FontContext {
    /// All axes off: text is passed through unstyled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Math mode: letters default to italic.
    pub fn math_mode() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    pub fn get(&self, axis: FontAxis) -> bool {
        match axis {
            FontAxis::Bold => self.bold,
            FontAxis::DoubleStruck => self.double_struck,
            FontAxis::Fraktur => self.fraktur,
            FontAxis::Italic => self.italic,
            FontAxis::SansSerif => self.sans_serif,
            FontAxis::Script => self.script,
            FontAxis::Subscript => self.subscript,
            FontAxis::Superscript => self.superscript,
        }
    }

    fn axis_mut(&mut self, axis: FontAxis) -> &mut bool {
        match axis {
            FontAxis::Bold => &mut self.bold,
            FontAxis::DoubleStruck => &mut self.double_struck,
            FontAxis::Fraktur => &mut self.fraktur,
            FontAxis::Italic => &mut self.italic,
            FontAxis::SansSerif => &mut self.sans_serif,
            FontAxis::Script => &mut self.script,
            FontAxis::Subscript => &mut self.subscript,
            FontAxis::Superscript => &mut self.superscript,
        }
    }

    /// Copy of this context with `axis` set to `value`.
    pub fn with(mut self, axis: FontAxis, value: bool) -> Self {
        *self.axis_mut(axis) = value;
        self
    }

    pub fn with_bold(self, value: bool) -> Self {
        self.with(FontAxis::Bold, value)
    }

    pub fn with_double_struck(self, value: bool) -> Self {
        self.with(FontAxis::DoubleStruck, value)
    }

    pub fn with_fraktur(self, value: bool) -> Self {
        self.with(FontAxis::Fraktur, value)
    }

    pub fn with_italic(self, value: bool) -> Self {
        self.with(FontAxis::Italic, value)
    }

    pub fn with_sans_serif(self, value: bool) -> Self {
        self.with(FontAxis::SansSerif, value)
    }

    pub fn with_script(self, value: bool) -> Self {
        self.with(FontAxis::Script, value)
    }

    /// True iff every axis is off.
    pub fn is_trivial(&self) -> bool {
        FontAxis::ALL.iter().all(|&axis| !self.get(axis))
    }

    /// Context for the operands of `kind` nested inside this one.
    pub fn apply(self, kind: FunctionKind) -> Self {
        let Transition { sets, clears } = transition(kind);
        let mut next = self;
        for &axis in sets {
            *next.axis_mut(axis) = true;
        }
        for &axis in clears {
            *next.axis_mut(axis) = false;
        }
        next
    }
}

impl fmt::Display for FontContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_trivial() {
            return f.write_str("plain");
        }
        let names: Vec<&str> = FontAxis::ALL
            .iter()
            .filter(|&&axis| self.get(axis))
            .map(|axis| axis.name())
            .collect();
        f.write_str(&names.join("+"))
    }
}

// =============================================================================
// Converter
// =============================================================================

/// Renders formulas against a set of tables, collecting fallback warnings.
///
/// Rendering lives in `render.rs`.
pub struct UnicodeConverter<'t> {
    pub(crate) tables: &'t Tables,
    pub(crate) warnings: Vec<ConversionWarning>,
}

impl<'t> UnicodeConverter<'t> {
    pub fn new(tables: &'t Tables) -> Self {
        UnicodeConverter {
            tables,
            warnings: Vec::new(),
        }
    }

    /// Warnings collected so far, leaving the converter empty.
    pub fn take_warnings(&mut self) -> Vec<ConversionWarning> {
        std::mem::take(&mut self.warnings)
    }
}
