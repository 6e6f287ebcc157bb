//! Strict URL fragment slugs.
//!
//! The algorithm:
//! - Spell out a few symbols (`&` becomes `and`, `<` becomes `less`, ...)
//! - Transliterate non-ASCII characters to ASCII (`é` becomes `e`)
//! - Keep ASCII letters and digits, lowercased
//! - Treat runs of whitespace and hyphens as a single `-`
//! - Drop every other character
//! - Never emit a leading or trailing `-`

use deunicode::deunicode_char;

/// Spelled-out replacements for symbols that would otherwise be dropped.
const SYMBOL_WORDS: &[(char, &str)] = &[
    ('&', "and"),
    ('$', "dollar"),
    ('%', "percent"),
    ('<', "less"),
    ('>', "greater"),
    ('|', "or"),
];

/// Generates a strict, lowercase slug from heading text.
///
/// Returns an empty string when nothing slug-safe remains.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in transliterate(text).chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
    }

    slug
}

/// Maps text onto ASCII, spelling out the symbols in [`SYMBOL_WORDS`].
fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some((_, word)) = SYMBOL_WORDS.iter().find(|(symbol, _)| *symbol == c) {
            out.push_str(word);
        } else if c.is_ascii() {
            out.push(c);
        } else if let Some(ascii) = deunicode_char(c) {
            out.push_str(ascii);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_heading() {
        assert_eq!(slugify("Overview"), "overview");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("What's new?"), "whats-new");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(slugify("Chapter 1: Introduction"), "chapter-1-introduction");
        assert_eq!(slugify("Nuxt 3.10"), "nuxt-310");
    }

    #[test]
    fn test_diacritics_transliterated() {
        assert_eq!(slugify("Héllo Wörld"), "hello-world");
        assert_eq!(slugify("Straße"), "strasse");
    }

    #[test]
    fn test_symbols_spelled_out() {
        assert_eq!(slugify("Nuxt & Vite"), "nuxt-and-vite");
        assert_eq!(slugify("100% static"), "100percent-static");
    }

    #[test]
    fn test_underscores_removed() {
        assert_eq!(slugify("my_function_name"), "myfunctionname");
    }

    #[test]
    fn test_hyphen_runs_collapse() {
        assert_eq!(slugify("  Hello  --  World  "), "hello-world");
        assert_eq!(slugify("-leading and trailing-"), "leading-and-trailing");
    }

    #[test]
    fn test_inline_code_names() {
        assert_eq!(slugify("useAsyncData"), "useasyncdata");
        assert_eq!(slugify("nuxt.config.ts"), "nuxtconfigts");
    }

    #[test]
    fn test_nothing_left() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!@#*()"), "");
        assert_eq!(slugify("---"), "");
    }
}
