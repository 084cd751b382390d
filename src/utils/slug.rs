use std::sync::OnceLock;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new("[^a-z0-9]+").expect("valid slug separator pattern"))
}

/// Derive a URL-friendly slug from a display name.
///
/// Accents are stripped by decomposing (NFD) and dropping combining marks. Anything
/// still outside `[a-z0-9]` after lowercasing acts as a separator, and each run of
/// separators becomes a single `-`.
pub fn generate_slug(input: &str) -> String {
    let lowered = input.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>();
    separators()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(generate_slug("Graphic Tees"), "graphic-tees");
        assert_eq!(generate_slug("  Shoes & Boots  "), "shoes-boots");
    }

    #[test]
    fn collapses_separator_runs_and_trims_edges() {
        assert_eq!(generate_slug("--Men's   Wear!!"), "men-s-wear");
        assert_eq!(generate_slug("100% Cotton / Organic"), "100-cotton-organic");
    }

    #[test]
    fn empty_and_symbol_only_input_gives_empty_slug() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("   "), "");
        assert_eq!(generate_slug("&&&"), "");
    }

    #[test]
    fn accents_are_stripped() {
        assert_eq!(generate_slug("Café Crème"), "cafe-creme");
        assert_eq!(generate_slug("Über Größe"), "uber-gro-e");
    }

    #[test]
    fn letters_without_decomposition_still_separate_words() {
        assert_eq!(generate_slug("Łódź Shop"), "odz-shop");
    }
}
