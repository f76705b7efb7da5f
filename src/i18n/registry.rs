//! Culture registry: display metadata for the cultures the sample ships with.
//!
//! The registry is a static table. It does not decide which cultures are
//! supported (that is `LocalizationOptions`); it only supplies names for
//! listing them, and the default culture list used when none is configured.

/// Metadata for a known culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CultureInfo {
    /// Culture identifier (e.g., "en", "pt-br")
    pub code: &'static str,

    /// English name of the culture (e.g., "English", "Portuguese (Brazil)")
    pub name: &'static str,

    /// Native name of the culture (e.g., "English", "Português (Brasil)")
    pub native_name: &'static str,
}

const fn info(code: &'static str, name: &'static str, native_name: &'static str) -> CultureInfo {
    CultureInfo {
        code,
        name,
        native_name,
    }
}

/// Built-in cultures, in configuration order.
static KNOWN_CULTURES: [CultureInfo; 22] = [
    info("en", "English", "English"),
    info("ar", "Arabic", "العربية"),
    info("cs", "Czech", "čeština"),
    info("de", "German", "Deutsch"),
    info("es", "Spanish", "español"),
    info("fa", "Persian", "فارسی"),
    info("fr", "French", "français"),
    info("hi", "Hindi", "हिन्दी"),
    info("hu", "Hungarian", "magyar"),
    info("it", "Italian", "italiano"),
    info("ja", "Japanese", "日本語"),
    info("ko", "Korean", "한국어"),
    info("nl", "Dutch", "Nederlands"),
    info("pl", "Polish", "polski"),
    info("pt", "Portuguese", "português"),
    info("pt-br", "Portuguese (Brazil)", "português (Brasil)"),
    info("ru", "Russian", "русский"),
    info("sv", "Swedish", "svenska"),
    info("tr", "Turkish", "Türkçe"),
    info("uk", "Ukrainian", "українська"),
    info("vi", "Vietnamese", "Tiếng Việt"),
    info("zh", "Chinese", "中文"),
];

/// Identifier of the default request culture.
pub const DEFAULT_CULTURE: &str = "en";

/// Identifiers of the built-in cultures, used when no list is configured.
pub fn default_culture_codes() -> Vec<&'static str> {
    KNOWN_CULTURES.iter().map(|c| c.code).collect()
}

/// Look up metadata by identifier (case-insensitive).
///
/// # Returns
/// * `Some(&CultureInfo)` for a built-in culture
/// * `None` for anything else; callers fall back to showing the code itself
pub fn lookup(code: &str) -> Option<&'static CultureInfo> {
    KNOWN_CULTURES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::culture::is_valid_identifier;

    #[test]
    fn test_default_list_has_22_cultures() {
        assert_eq!(default_culture_codes().len(), 22);
    }

    #[test]
    fn test_default_list_starts_with_english() {
        assert_eq!(default_culture_codes()[0], DEFAULT_CULTURE);
    }

    #[test]
    fn test_known_codes_are_valid_and_unique() {
        let codes = default_culture_codes();
        for code in &codes {
            assert!(is_valid_identifier(code), "invalid code {}", code);
        }
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert!(!a.eq_ignore_ascii_case(b), "duplicate code {}", a);
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let info = lookup("PT-BR").expect("Should find pt-br");
        assert_eq!(info.code, "pt-br");
        assert_eq!(info.name, "Portuguese (Brazil)");
    }

    #[test]
    fn test_lookup_does_not_fall_back_to_family() {
        assert_eq!(lookup("pt").unwrap().code, "pt");
        assert!(lookup("es-mx").is_none());
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("xx").is_none());
    }
}
