//! Named symbols available as `\name` control words.

use phf::phf_map;

/// Control word (without the backslash) to Unicode scalar.
pub static SYMBOLS: phf::Map<&'static str, char> = phf_map! {
    // Greek letters
    "Alpha" => '\u{0391}',
    "Beta" => '\u{0392}',
    "Gamma" => '\u{0393}',
    "Delta" => '\u{0394}',
    "Epsilon" => '\u{0395}',
    "Zeta" => '\u{0396}',
    "Eta" => '\u{0397}',
    "Theta" => '\u{0398}',
    "Iota" => '\u{0399}',
    "Kappa" => '\u{039A}',
    "Lambda" => '\u{039B}',
    "Mu" => '\u{039C}',
    "Nu" => '\u{039D}',
    "Xi" => '\u{039E}',
    "Omicron" => '\u{039F}',
    "Pi" => '\u{03A0}',
    "Rho" => '\u{03A1}',
    "Sigma" => '\u{03A3}',
    "Tau" => '\u{03A4}',
    "Upsilon" => '\u{03A5}',
    "Phi" => '\u{03A6}',
    "Chi" => '\u{03A7}',
    "Psi" => '\u{03A8}',
    "Omega" => '\u{03A9}',
    "alpha" => '\u{03B1}',
    "beta" => '\u{03B2}',
    "gamma" => '\u{03B3}',
    "delta" => '\u{03B4}',
    // Lunate form; \varepsilon is the reversed-3 form
    "epsilon" => '\u{03F5}',
    "zeta" => '\u{03B6}',
    "eta" => '\u{03B7}',
    "theta" => '\u{03B8}',
    "iota" => '\u{03B9}',
    "kappa" => '\u{03BA}',
    "lambda" => '\u{03BB}',
    "mu" => '\u{03BC}',
    "nu" => '\u{03BD}',
    "xi" => '\u{03BE}',
    "omicron" => '\u{03BF}',
    "pi" => '\u{03C0}',
    "rho" => '\u{03C1}',
    "sigma" => '\u{03C3}',
    "tau" => '\u{03C4}',
    "upsilon" => '\u{03C5}',
    // Closed form; \varphi is the open form
    "phi" => '\u{03D5}',
    "chi" => '\u{03C7}',
    "psi" => '\u{03C8}',
    "omega" => '\u{03C9}',

    // Greek letter variants
    "varepsilon" => '\u{03B5}', // ε
    "vartheta" => '\u{03D1}',   // ϑ
    "varpi" => '\u{03D6}',      // ϖ
    "varrho" => '\u{03F1}',     // ϱ
    "varsigma" => '\u{03C2}',   // ς
    "varphi" => '\u{03C6}',     // φ

    // Hebrew cardinality symbols
    "aleph" => '\u{2135}', // ℵ
    "beth" => '\u{2136}',  // ℶ
    "gimel" => '\u{2137}', // ℷ
    "dalet" => '\u{2138}', // ℸ

    // Math and logic
    "neg" => '\u{00AC}',        // ¬
    "pm" => '\u{00B1}',         // ±
    "mp" => '\u{2213}',         // ∓
    "times" => '\u{00D7}',      // ×
    "div" => '\u{00F7}',        // ÷
    "forall" => '\u{2200}',     // ∀
    "partial" => '\u{2202}',    // ∂
    "exists" => '\u{2203}',     // ∃
    "varnothing" => '\u{2205}', // ∅
    "nabla" => '\u{2207}',      // ∇
    "in" => '\u{2208}',         // ∈
    "infty" => '\u{221E}',      // ∞
    "land" => '\u{2227}',       // ∧
    "lor" => '\u{2228}',        // ∨
    "int" => '\u{222B}',        // ∫
    "iint" => '\u{222C}',       // ∬
    "iiint" => '\u{222D}',      // ∭
    "oint" => '\u{222E}',       // ∮
    "oiint" => '\u{222F}',      // ∯
    "oiiint" => '\u{2230}',     // ∰
    "therefore" => '\u{2234}',  // ∴
    "because" => '\u{2235}',    // ∵
    "approx" => '\u{2248}',     // ≈
    "neq" => '\u{2260}',        // ≠
    "equiv" => '\u{2261}',      // ≡
    "oplus" => '\u{2295}',      // ⊕
    "otimes" => '\u{2297}',     // ⊗
    "true" => '\u{22A4}',       // ⊤
    "false" => '\u{22A5}',      // ⊥
    "models" => '\u{22A8}',     // ⊨
    "nmodels" => '\u{22AD}',    // ⊭
    "cdot" => '\u{22C5}',       // ⋅
    "langle" => '\u{27E8}',     // ⟨
    "rangle" => '\u{27E9}',     // ⟩
    "implies" => '\u{27F9}',    // ⟹
    "iff" => '\u{27FA}',        // ⟺

    // Number set shorthands (non-standard)
    "Complex" => '\u{2102}', // ℂ
    "N" => '\u{2115}',       // ℕ
    "Q" => '\u{211A}',       // ℚ
    "R" => '\u{211D}',       // ℝ
    "Z" => '\u{2124}',       // ℤ

    "Im" => '\u{2111}', // ℑ
    "Re" => '\u{211C}', // ℜ

    // Shapes
    "square" => '\u{25A1}', // □

    // Music
    "flat" => '\u{266D}',     // ♭
    "natural" => '\u{266E}',  // ♮
    "sharp" => '\u{266F}',    // ♯
    "segno" => '\u{1D10B}',   // 𝄋 (non-standard)
    "coda" => '\u{1D10C}',    // 𝄌 (non-standard)
};

/// Look up a control word in the catalog.
pub fn lookup(name: &str) -> Option<char> {
    SYMBOLS.get(name).copied()
}

/// All catalog entries, sorted by name.
pub fn entries() -> Vec<(&'static str, char)> {
    let mut entries: Vec<_> = SYMBOLS.entries().map(|(k, v)| (*k, *v)).collect();
    entries.sort_unstable_by_key(|(name, _)| *name);
    entries
}

/// All control words in the catalog, sorted.
pub fn names() -> Vec<&'static str> {
    entries().into_iter().map(|(name, _)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_lookup() {
        assert_eq!(lookup("alpha"), Some('α'));
        assert_eq!(lookup("Omega"), Some('Ω'));
        assert_eq!(lookup("epsilon"), Some('ϵ'));
        assert_eq!(lookup("varepsilon"), Some('ε'));
        assert_eq!(lookup("phi"), Some('ϕ'));
        assert_eq!(lookup("varphi"), Some('φ'));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("R"), Some('ℝ'));
        assert_eq!(lookup("r"), None);
        assert_eq!(lookup("ALPHA"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_astral_symbols() {
        assert_eq!(lookup("segno"), Some('\u{1D10B}'));
        assert_eq!(lookup("coda"), Some('\u{1D10C}'));
    }

    #[test]
    fn test_names_sorted_and_complete() {
        let names = names();
        assert_eq!(names.len(), SYMBOLS.len());
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert!(names.contains(&"iff"));
    }
}
