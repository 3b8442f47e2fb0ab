//! Syntax tree for LaTeX-like input markup.

use std::fmt;

/// A parsed input: the top-level sequence of expressions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Formula {
    pub nodes: Vec<Node>,
}

impl Formula {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A run of plain characters, with escapes already resolved.
    Literal(String),
    /// A control word without a braced operand, such as `\alpha`.
    Symbol(String),
    /// A function applied to the expressions of its operand group.
    Function {
        kind: FunctionKind,
        operands: Vec<Node>,
    },
}

impl Node {
    pub fn literal(s: impl Into<String>) -> Self {
        Node::Literal(s.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Node::Symbol(name.into())
    }

    pub fn function(kind: FunctionKind, operands: Vec<Node>) -> Self {
        Node::Function { kind, operands }
    }
}

/// Every function the converter knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `^`
    Superscript,
    /// `_`
    Subscript,
    /// `\vec`
    Vector,
    /// `\mathbb`
    DoubleStruck,
    /// `\mathcal`
    Calligraphic,
    /// `\mathfrak`
    Fraktur,
    /// `\b`, `\mathbf`
    Bold,
    /// `\i`, `\mathit`
    Italic,
    /// `\bi`, `\ib`
    BoldItalic,
    /// `\mathsf`
    SansSerif,
    /// `\mathrm`
    Roman,
}

impl FunctionKind {
    /// Resolve a control word (without the backslash) to a function.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "vec" => FunctionKind::Vector,
            "mathbb" => FunctionKind::DoubleStruck,
            "mathcal" => FunctionKind::Calligraphic,
            "mathfrak" => FunctionKind::Fraktur,
            "b" | "mathbf" => FunctionKind::Bold,
            "i" | "mathit" => FunctionKind::Italic,
            "bi" | "ib" => FunctionKind::BoldItalic,
            "mathsf" => FunctionKind::SansSerif,
            "mathrm" => FunctionKind::Roman,
            _ => return None,
        })
    }

    /// Resolve a script operator character to a function.
    pub fn from_operator(op: char) -> Option<Self> {
        match op {
            '^' => Some(FunctionKind::Superscript),
            '_' => Some(FunctionKind::Subscript),
            _ => None,
        }
    }

    /// The canonical spelling, as written in the input.
    pub fn name(self) -> &'static str {
        match self {
            FunctionKind::Superscript => "^",
            FunctionKind::Subscript => "_",
            FunctionKind::Vector => "vec",
            FunctionKind::DoubleStruck => "mathbb",
            FunctionKind::Calligraphic => "mathcal",
            FunctionKind::Fraktur => "mathfrak",
            FunctionKind::Bold => "b",
            FunctionKind::Italic => "i",
            FunctionKind::BoldItalic => "bi",
            FunctionKind::SansSerif => "mathsf",
            FunctionKind::Roman => "mathrm",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionKind::Superscript | FunctionKind::Subscript => f.write_str(self.name()),
            _ => write!(f, "\\{}", self.name()),
        }
    }
}
