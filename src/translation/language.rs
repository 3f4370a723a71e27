//! Translation target languages.

use crate::ui::Style;

/// Target language codes the translate prompt accepts, with display names.
pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("fr", "French"),
    ("es", "Spanish"),
    ("it", "Italian"),
];

/// Prints the supported target languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported translation targets"));
    for (code, name) in TARGET_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Returns `true` if the given code is a supported translation target.
pub fn is_supported_language(code: &str) -> bool {
    TARGET_LANGUAGES.iter().any(|(c, _)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages() {
        assert!(is_supported_language("fr"));
        assert!(is_supported_language("es"));
        assert!(is_supported_language("it"));
    }

    #[test]
    fn test_unsupported_languages() {
        assert!(!is_supported_language("de"));
        assert!(!is_supported_language("FR")); // callers lowercase first
        assert!(!is_supported_language(""));
    }
}
