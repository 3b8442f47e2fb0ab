//! Recursive-descent parser for the input markup
//!
//! ```text
//! Latex   -> Expr*
//! Expr    -> TextRun | Macro
//! Macro   -> ('^' | '_') (Char | '{' Expr* '}')
//!          | '\' Name ('{' Expr* '}')?
//! TextRun -> (AllowedChar | '\' EscapableChar)+
//! Name    -> Alphanumeric*
//! ```
//!
//! Positions in errors are byte offsets into the input.

use std::iter::Peekable;
use std::str::CharIndices;

use latex_input_ast::{Formula, FunctionKind, Node};

use crate::utils::{ConversionError, ConversionResult};

/// Punctuation allowed in text runs besides alphanumerics and space
const ALLOWED_PUNCTUATION: &str = "=!-+()[]<>/',.:;|*?";

/// Whether `c` may appear unescaped in a text run.
pub fn is_allowed_char(c: char) -> bool {
    c.is_alphanumeric() || c == ' ' || ALLOWED_PUNCTUATION.contains(c)
}

/// Whether `\c` is an escape for a literal `c`.
pub fn is_escapable_char(c: char) -> bool {
    matches!(c, '\\' | '^' | '_' | '{' | '}')
}

/// Deepest `{` nesting accepted; parsing and rendering recurse once per group.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parse `input` into a formula.
pub fn parse(input: &str) -> ConversionResult<Formula> {
    Parser::new(input).parse()
}

pub struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
    /// Byte offsets of `\{` escapes not yet closed by a `\}`
    open_escapes: Vec<usize>,
    /// Number of `{` groups currently open
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            chars: input.char_indices().peekable(),
            open_escapes: Vec::new(),
            depth: 0,
        }
    }

    pub fn parse(mut self) -> ConversionResult<Formula> {
        let nodes = self.parse_sequence(None)?;
        if let Some(&position) = self.open_escapes.first() {
            return Err(ConversionError::unterminated(position));
        }
        Ok(Formula::new(nodes))
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    /// The character after the next one
    fn peek_second(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next().map(|(_, c)| c)
    }

    fn next_char(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    /// Parse expressions until end of input, or until the `}` closing the
    /// group opened at `group`.
    fn parse_sequence(&mut self, group: Option<usize>) -> ConversionResult<Vec<Node>> {
        let mut nodes = Vec::new();
        loop {
            let Some((position, c)) = self.peek() else {
                return match group {
                    Some(open) => Err(ConversionError::unterminated(open)),
                    None => Ok(nodes),
                };
            };

            match c {
                '}' if group.is_some() => {
                    self.next_char();
                    return Ok(nodes);
                }
                '^' | '_' => {
                    self.next_char();
                    nodes.push(self.parse_script(c, position)?);
                }
                '\\' if !self.peek_second().is_some_and(is_escapable_char) => {
                    self.next_char();
                    nodes.push(self.parse_control_word(position)?);
                }
                '\\' => nodes.push(self.parse_text_run()?),
                c if is_allowed_char(c) => nodes.push(self.parse_text_run()?),
                c => return Err(ConversionError::unexpected(c, position)),
            }
        }
    }

    /// The `{` at `open` has been consumed.
    fn parse_group(&mut self, open: usize) -> ConversionResult<Vec<Node>> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ConversionError::recursion_limit(MAX_NESTING_DEPTH, open));
        }
        self.depth += 1;
        let nodes = self.parse_sequence(Some(open));
        self.depth -= 1;
        nodes
    }

    fn parse_text_run(&mut self) -> ConversionResult<Node> {
        let mut text = String::new();
        while let Some((position, c)) = self.peek() {
            if c == '\\' {
                let Some(escaped) = self.peek_second().filter(|&e| is_escapable_char(e)) else {
                    break;
                };
                self.next_char();
                self.next_char();
                self.track_escaped_brace(escaped, position)?;
                text.push(escaped);
            } else if is_allowed_char(c) {
                self.next_char();
                text.push(c);
            } else {
                break;
            }
        }
        Ok(Node::Literal(text))
    }

    /// Escaped braces must balance over the whole input.
    fn track_escaped_brace(&mut self, escaped: char, position: usize) -> ConversionResult<()> {
        match escaped {
            '{' => self.open_escapes.push(position),
            '}' => {
                if self.open_escapes.pop().is_none() {
                    return Err(ConversionError::unexpected('}', position + 1));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// `^` or `_` has been consumed at `position`.
    fn parse_script(&mut self, operator: char, position: usize) -> ConversionResult<Node> {
        let kind = FunctionKind::from_operator(operator)
            .ok_or_else(|| ConversionError::unexpected(operator, position))?;

        match self.peek() {
            Some((open, '{')) => {
                self.next_char();
                let operands = self.parse_group(open)?;
                Ok(Node::function(kind, operands))
            }
            // Shorthand form: exactly one character, no escapes
            Some((_, c)) if is_allowed_char(c) => {
                self.next_char();
                Ok(Node::function(kind, vec![Node::Literal(c.to_string())]))
            }
            _ => Err(ConversionError::dangling(operator, position)),
        }
    }

    /// `\` has been consumed at `position` and does not start an escape.
    fn parse_control_word(&mut self, position: usize) -> ConversionResult<Node> {
        let mut name = String::new();
        while let Some((_, c)) = self.peek() {
            if !c.is_alphanumeric() {
                break;
            }
            name.push(c);
            self.next_char();
        }

        match self.peek() {
            Some((open, '{')) => {
                let kind = FunctionKind::from_name(&name)
                    .ok_or_else(|| ConversionError::unsupported_macro(name.as_str()))?;
                self.next_char();
                let operands = self.parse_group(open)?;
                Ok(Node::function(kind, operands))
            }
            None if name.is_empty() => Err(ConversionError::dangling('\\', position)),
            _ => Ok(Node::Symbol(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nodes(input: &str) -> Vec<Node> {
        parse(input).unwrap().nodes
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_text_run_is_one_literal() {
        assert_eq!(nodes("a + b = c?"), vec![Node::literal("a + b = c?")]);
    }

    #[test]
    fn test_script_shorthand_takes_one_char() {
        assert_eq!(
            nodes("^ab"),
            vec![
                Node::function(FunctionKind::Superscript, vec![Node::literal("a")]),
                Node::literal("b"),
            ]
        );
    }

    #[test]
    fn test_script_group() {
        assert_eq!(
            nodes("_{al}"),
            vec![Node::function(FunctionKind::Subscript, vec![Node::literal("al")])]
        );
        assert_eq!(
            nodes("^{}"),
            vec![Node::function(FunctionKind::Superscript, vec![])]
        );
    }

    #[test]
    fn test_symbol_and_function() {
        assert_eq!(
            nodes("\\alpha\\mathbb{R}"),
            vec![
                Node::symbol("alpha"),
                Node::function(FunctionKind::DoubleStruck, vec![Node::literal("R")]),
            ]
        );
    }

    #[test]
    fn test_name_is_greedy_alphanumeric() {
        assert_eq!(
            nodes("\\alpha2 x"),
            vec![Node::symbol("alpha2"), Node::literal(" x")]
        );
        assert_eq!(
            nodes("\\pi+1"),
            vec![Node::symbol("pi"), Node::literal("+1")]
        );
    }

    #[test]
    fn test_nested_functions() {
        assert_eq!(
            nodes("\\b{\\mathcal{M}x}"),
            vec![Node::function(
                FunctionKind::Bold,
                vec![
                    Node::function(FunctionKind::Calligraphic, vec![Node::literal("M")]),
                    Node::literal("x"),
                ]
            )]
        );
    }

    #[test]
    fn test_escapes_inside_text_run() {
        assert_eq!(nodes("\\{\\}"), vec![Node::literal("{}")]);
        assert_eq!(nodes("\\\\"), vec![Node::literal("\\")]);
        assert_eq!(nodes("a\\^b\\_c"), vec![Node::literal("a^b_c")]);
    }

    #[test]
    fn test_escaped_braces_may_span_groups() {
        assert_eq!(
            nodes("\\{^2\\}"),
            vec![
                Node::literal("{"),
                Node::function(FunctionKind::Superscript, vec![Node::literal("2")]),
                Node::literal("}"),
            ]
        );
    }

    #[test]
    fn test_unbalanced_escaped_braces() {
        assert_eq!(parse("\\{"), Err(ConversionError::unterminated(0)));
        assert_eq!(parse("\\}"), Err(ConversionError::unexpected('}', 1)));
        assert_eq!(parse("\\{}"), Err(ConversionError::unexpected('}', 2)));
    }

    #[test]
    fn test_dangling_operators() {
        assert_eq!(parse("^"), Err(ConversionError::dangling('^', 0)));
        assert_eq!(parse("a_"), Err(ConversionError::dangling('_', 1)));
        assert_eq!(parse("\\"), Err(ConversionError::dangling('\\', 0)));
        assert_eq!(parse("^\\alpha"), Err(ConversionError::dangling('^', 0)));
    }

    #[test]
    fn test_unterminated_group() {
        assert_eq!(parse("^{7654"), Err(ConversionError::unterminated(1)));
        assert_eq!(parse("\\vec{ab"), Err(ConversionError::unterminated(4)));
    }

    #[test]
    fn test_unknown_function_name() {
        assert_eq!(
            parse("\\invalid{abc}"),
            Err(ConversionError::unsupported_macro("invalid"))
        );
        assert_eq!(
            parse("\\invalid{}"),
            Err(ConversionError::unsupported_macro("invalid"))
        );
    }

    #[test]
    fn test_unknown_symbol_is_deferred() {
        assert_eq!(nodes("\\invalid"), vec![Node::symbol("invalid")]);
    }

    #[test]
    fn test_unexpected_characters() {
        assert_eq!(parse("a}"), Err(ConversionError::unexpected('}', 1)));
        assert_eq!(parse("{a}"), Err(ConversionError::unexpected('{', 0)));
        assert_eq!(parse("a&b"), Err(ConversionError::unexpected('&', 1)));
    }

    #[test]
    fn test_control_word_without_name() {
        assert_eq!(nodes("\\ x"), vec![Node::symbol(""), Node::literal(" x")]);
        assert_eq!(
            nodes("a\\+"),
            vec![Node::literal("a"), Node::symbol(""), Node::literal("+")]
        );
        assert_eq!(parse("\\&"), Err(ConversionError::unexpected('&', 1)));
    }

    fn nested(levels: usize) -> String {
        format!("{}a{}", "^{".repeat(levels), "}".repeat(levels))
    }

    #[test]
    fn test_nesting_up_to_limit() {
        let formula = parse(&nested(MAX_NESTING_DEPTH)).unwrap();
        assert_eq!(formula.nodes.len(), 1);
    }

    #[test]
    fn test_nesting_beyond_limit() {
        // The group that crosses the limit is the (MAX + 1)th `{`
        let position = 2 * MAX_NESTING_DEPTH + 1;
        assert_eq!(
            parse(&nested(MAX_NESTING_DEPTH + 1)),
            Err(ConversionError::recursion_limit(MAX_NESTING_DEPTH, position))
        );
        assert_eq!(
            parse(&nested(100_000)),
            Err(ConversionError::recursion_limit(MAX_NESTING_DEPTH, position))
        );
    }

    #[test]
    fn test_positions_are_byte_offsets() {
        assert_eq!(parse("αβ}"), Err(ConversionError::unexpected('}', 4)));
    }
}
