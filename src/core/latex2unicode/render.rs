//! Rendering of a parsed formula under a font context

use latex_input_ast::{Formula, FunctionKind, Node};

use super::context::{FontContext, UnicodeConverter};
use super::utils::apply_text_substitutions;
use crate::utils::{ConversionError, ConversionResult, ConversionWarning, WarningKind};

/// Appended after the operands of `\vec`
const COMBINING_RIGHT_ARROW_ABOVE: char = '\u{20D7}';

impl<'t> UnicodeConverter<'t> {
    /// Render `formula` with `context` as the initial context.
    pub fn render(&mut self, formula: &Formula, context: FontContext) -> ConversionResult<String> {
        let mut output = String::new();
        self.render_nodes(&formula.nodes, context, &mut output)?;
        Ok(output)
    }

    fn render_nodes(
        &mut self,
        nodes: &[Node],
        context: FontContext,
        output: &mut String,
    ) -> ConversionResult<()> {
        for node in nodes {
            self.render_node(node, context, output)?;
        }
        Ok(())
    }

    fn render_node(
        &mut self,
        node: &Node,
        context: FontContext,
        output: &mut String,
    ) -> ConversionResult<()> {
        match node {
            Node::Literal(text) => {
                for c in apply_text_substitutions(text).chars() {
                    self.render_char(c, context, output);
                }
            }
            Node::Symbol(name) => {
                let glyph = self
                    .tables
                    .symbol(name)
                    .ok_or_else(|| ConversionError::unsupported_symbol(name.as_str()))?;
                self.render_char(glyph, context, output);
            }
            Node::Function {
                kind: FunctionKind::Vector,
                operands,
            } => {
                self.render_nodes(operands, context, output)?;
                output.push(COMBINING_RIGHT_ARROW_ABOVE);
            }
            Node::Function { kind, operands } => {
                self.render_nodes(operands, context.apply(*kind), output)?;
            }
        }
        Ok(())
    }

    /// Superscript takes precedence over subscript, which takes precedence
    /// over font variants.
    fn render_char(&mut self, c: char, context: FontContext, output: &mut String) {
        if c.is_whitespace() || context.is_trivial() {
            output.push(c);
            return;
        }

        let styled = if context.superscript {
            self.tables
                .superscript(c)
                .ok_or((WarningKind::MissingSuperscript, "no superscript form"))
        } else if context.subscript {
            self.tables
                .subscript(c)
                .ok_or((WarningKind::MissingSubscript, "no subscript form"))
        } else {
            self.tables
                .select_variant(c, &context)
                .ok_or((WarningKind::MissingVariant, "no matching variant"))
        };

        match styled {
            Ok(glyph) => output.push(glyph),
            Err((kind, reason)) => {
                let message = format!("{} for {}", reason, context);
                log::debug!("keeping '{}' unchanged: {}", c, message);
                self.warnings.push(ConversionWarning::new(kind, c, message));
                output.push(c);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::latex2unicode::parse;
    use crate::data::Tables;
    use pretty_assertions::assert_eq;

    fn render(input: &str, context: FontContext) -> (String, Vec<ConversionWarning>) {
        let formula = parse(input).unwrap();
        let mut converter = UnicodeConverter::new(Tables::builtin());
        let output = converter.render(&formula, context).unwrap();
        (output, converter.take_warnings())
    }

    fn plain(input: &str) -> String {
        render(input, FontContext::new()).0
    }

    #[test]
    fn test_trivial_context_passes_through() {
        assert_eq!(plain("abc 123"), "abc 123");
    }

    #[test]
    fn test_superscript_and_subscript() {
        assert_eq!(plain("r^e^{al} _t_{al}_{k}"), "rᵉᵃˡ ₜₐₗₖ");
        assert_eq!(plain("x^{+-=()}"), "x⁺⁻⁼⁽⁾");
        assert_eq!(plain("x_{+-=()}"), "x₊₋₌₍₎");
    }

    #[test]
    fn test_superscript_wins_over_subscript() {
        assert_eq!(plain("_{^{2}}"), "²");
    }

    #[test]
    fn test_symbols_take_scripts_and_variants() {
        assert_eq!(plain("^{\\alpha}"), "ᵅ");
        assert_eq!(plain("_{\\beta\\rho}"), "ᵦᵨ");
        assert_eq!(plain("\\b{\\alpha}"), "𝛂");
        assert_eq!(plain("\\mathbb{\\pi}"), "ℼ");
    }

    #[test]
    fn test_vector_appends_arrow_after_operands() {
        assert_eq!(plain("\\vec{v}"), "v\u{20D7}");
        assert_eq!(plain("\\vec{ab}"), "ab\u{20D7}");
        assert_eq!(plain("\\vec{}"), "\u{20D7}");
        assert_eq!(render("\\vec{x}", FontContext::math_mode()).0, "𝑥\u{20D7}");
    }

    #[test]
    fn test_fonts() {
        assert_eq!(plain("\\mathbb{EasyRCNZ1}"), "𝔼𝕒𝕤𝕪ℝℂℕℤ𝟙");
        assert_eq!(plain("\\mathfrak{ABCHIRZa}"), "𝔄𝔅ℭℌℑℜℨ𝔞");
        assert_eq!(plain("\\mathcal{ABEHegol}"), "𝒜ℬℰℋℯℊℴ𝓁");
        assert_eq!(plain("\\b{x1}"), "𝐱𝟏");
        assert_eq!(plain("\\bi{x}"), "𝒙");
        assert_eq!(plain("\\mathsf{A}"), "𝖠");
        assert_eq!(plain("\\b{\\mathsf{A}}"), "𝗔");
    }

    #[test]
    fn test_math_mode_italic_with_fallbacks() {
        let (output, warnings) = render("xyh\\alpha\\partial\\epsilon", FontContext::math_mode());
        assert_eq!(output, "𝑥𝑦h𝛼𝜕𝜖");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::MissingVariant);
        assert_eq!(warnings[0].character, 'h');
    }

    #[test]
    fn test_roman_undoes_math_italic() {
        assert_eq!(render("x\\mathrm{d}x", FontContext::math_mode()).0, "𝑥d𝑥");
    }

    #[test]
    fn test_missing_forms_warn() {
        let (output, warnings) = render("\\mathfrak{1}^{X}_{q}", FontContext::new());
        assert_eq!(output, "1Xq");
        let kinds: Vec<_> = warnings.iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![
                WarningKind::MissingVariant,
                WarningKind::MissingSuperscript,
                WarningKind::MissingSubscript,
            ]
        );
        assert!(warnings[0].message.contains("fraktur"));
    }

    #[test]
    fn test_whitespace_is_never_styled_or_reported() {
        let (output, warnings) = render("\\mathbb{a b}^{ }", FontContext::new());
        assert_eq!(output, "𝕒 𝕓 ");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_substitutions_before_styling() {
        assert_eq!(plain("f''"), "f″");
        assert_eq!(plain("^{-1}"), "⁻¹");
        assert_eq!(plain("a--b"), "a–b");
    }

    #[test]
    fn test_unknown_symbol() {
        let formula = parse("a\\invalid").unwrap();
        let mut converter = UnicodeConverter::new(Tables::builtin());
        assert_eq!(
            converter.render(&formula, FontContext::new()),
            Err(ConversionError::unsupported_symbol("invalid"))
        );
    }
}
