//! Text substitutions applied to literal runs before styling

use std::borrow::Cow;

/// Applied in order; longer quote and dash runs come first.
const TEXT_SUBSTITUTIONS: [(&str, &str); 8] = [
    ("''''", "\u{2057}"), // ⁗
    ("'''", "\u{2034}"),  // ‴
    ("''", "\u{2033}"),   // ″
    ("'", "\u{2032}"),    // ′
    ("---", "\u{2014}"),  // —
    ("--", "\u{2013}"),   // –
    ("-", "\u{2212}"),    // −
    ("/", "\u{2044}"),    // ⁄
];

/// Replace quote runs with primes, dashes with their typographic forms and
/// `/` with the fraction slash.
pub fn apply_text_substitutions(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '\'' | '-' | '/')) {
        return Cow::Borrowed(text);
    }
    let mut result = text.to_string();
    for (from, to) in TEXT_SUBSTITUTIONS {
        if result.contains(from) {
            result = result.replace(from, to);
        }
    }
    Cow::Owned(result)
}
