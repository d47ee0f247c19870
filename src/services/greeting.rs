//! Greeting text and name validation.
//!
//! Every function here is total: absent, empty and whitespace-only inputs
//! all map to a defined result.

pub const GUEST: &str = "Guest";
pub const MAX_NAME_LENGTH: usize = 100;

// Blank means only space and control characters up to U+0020.
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim_matches(|c: char| c <= ' ').is_empty())
}

/// `"Hello, <name>!"`, or `"Hello, Guest!"` when `name` is blank.
///
/// The name is used verbatim; trimming only decides blankness.
pub fn greet(name: Option<&str>) -> String {
    match name {
        Some(name) if !is_blank(Some(name)) => format!("Hello, {}!", name),
        _ => format!("Hello, {}!", GUEST),
    }
}

/// `"Hello, <title> <name>!"`. A blank name wins over any title; a blank
/// title falls back to [`greet`].
pub fn greet_formal(name: Option<&str>, title: Option<&str>) -> String {
    let name = match name {
        Some(name) if !is_blank(Some(name)) => name,
        _ => return greet(None),
    };
    match title {
        Some(title) if !is_blank(Some(title)) => format!("Hello, {} {}!", title, name),
        _ => greet(Some(name)),
    }
}

/// Length is checked on the untrimmed input, in UTF-16 code units.
pub fn is_valid_name(name: Option<&str>) -> bool {
    match name {
        Some(name) => !is_blank(Some(name)) && name.encode_utf16().count() <= MAX_NAME_LENGTH,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_with_valid_name() {
        assert_eq!(greet(Some("John")), "Hello, John!");
    }

    #[test]
    fn greet_keeps_name_verbatim() {
        assert_eq!(greet(Some("  Ada  ")), "Hello,   Ada  !");
        assert_eq!(greet(Some("Jean Luc")), "Hello, Jean Luc!");
    }

    #[test]
    fn greet_blank_names_fall_back_to_guest() {
        assert_eq!(greet(None), "Hello, Guest!");
        assert_eq!(greet(Some("")), "Hello, Guest!");
        assert_eq!(greet(Some("   ")), "Hello, Guest!");
        assert_eq!(greet(Some("\t\n")), "Hello, Guest!");
    }

    #[test]
    fn greet_formal_with_name_and_title() {
        assert_eq!(greet_formal(Some("Doe"), Some("Mr")), "Hello, Mr Doe!");
    }

    #[test]
    fn greet_formal_without_title_matches_greet() {
        for name in [Some("John"), Some(""), Some("  "), None, Some("Mary Ann")] {
            assert_eq!(greet_formal(name, None), greet(name));
        }
    }

    #[test]
    fn greet_formal_blank_name_ignores_title() {
        assert_eq!(greet_formal(None, Some("Dr")), "Hello, Guest!");
        assert_eq!(greet_formal(Some(" "), Some("Dr")), "Hello, Guest!");
        assert_eq!(greet_formal(None, None), "Hello, Guest!");
    }

    #[test]
    fn greet_formal_blank_title() {
        assert_eq!(greet_formal(Some("John"), Some("")), "Hello, John!");
        assert_eq!(greet_formal(Some("John"), Some("   ")), "Hello, John!");
    }

    #[test]
    fn is_valid_name_rejects_blank() {
        assert!(!is_valid_name(None));
        assert!(!is_valid_name(Some("")));
        assert!(!is_valid_name(Some("   ")));
    }

    #[test]
    fn is_valid_name_length_limit() {
        assert!(is_valid_name(Some("John")));
        assert!(is_valid_name(Some(&"a".repeat(100))));
        assert!(!is_valid_name(Some(&"a".repeat(101))));
    }

    #[test]
    fn is_valid_name_counts_padding() {
        let padded = format!(" {} ", "a".repeat(99));
        assert!(!is_valid_name(Some(&padded)));
    }

    #[test]
    fn greet_nbsp_is_not_blank() {
        assert_eq!(greet(Some("\u{00A0}")), "Hello, \u{00A0}!");
        assert!(is_valid_name(Some("\u{00A0}")));
    }

    #[test]
    fn greet_control_characters_are_blank() {
        assert_eq!(greet(Some("\u{0001}")), "Hello, Guest!");
        assert_eq!(greet_formal(Some("\u{0001}"), Some("Dr")), "Hello, Guest!");
        assert!(!is_valid_name(Some("\u{0001}\u{001F}")));
    }

    #[test]
    fn is_valid_name_counts_astral_characters_twice() {
        assert!(is_valid_name(Some(&"😀".repeat(50))));
        assert!(!is_valid_name(Some(&"😀".repeat(51))));
        assert!(!is_valid_name(Some(&"😀".repeat(60))));
    }
}
