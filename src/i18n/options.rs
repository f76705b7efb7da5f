//! Localization options: the validated, immutable configuration record.
//!
//! Built once at startup and shared read-only with every request.

use crate::i18n::culture::Culture;
use thiserror::Error;

/// Cookie used to persist a user's culture choice.
pub const DEFAULT_COOKIE_NAME: &str = ".AspNetCore.Culture";

/// Directory holding localization resources.
pub const DEFAULT_RESOURCES_PATH: &str = "LocalizationResources";

/// Reasons a localization configuration is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("supported culture list is empty")]
    NoCultures,

    #[error("invalid culture identifier: '{0}'")]
    InvalidCulture(String),

    #[error("culture '{0}' is listed more than once")]
    DuplicateCulture(String),

    #[error("default culture '{0}' is not in the supported culture list")]
    DefaultNotSupported(String),

    #[error("resources path must not be empty")]
    EmptyResourcesPath,

    #[error("culture cookie name must not be empty")]
    EmptyCookieName,
}

/// The ordered set of supported cultures.
#[derive(Debug, Clone)]
pub struct SupportedCultures {
    cultures: Vec<Culture>,
}

impl SupportedCultures {
    /// Validate and build a culture set from identifiers.
    pub fn new<I>(codes: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut cultures: Vec<Culture> = Vec::new();
        for code in codes {
            let code = code.as_ref();
            let culture =
                Culture::parse(code).ok_or_else(|| OptionsError::InvalidCulture(code.to_string()))?;
            if cultures.contains(&culture) {
                return Err(OptionsError::DuplicateCulture(culture.code().to_string()));
            }
            cultures.push(culture);
        }

        if cultures.is_empty() {
            return Err(OptionsError::NoCultures);
        }
        Ok(Self { cultures })
    }

    /// Find the configured culture matching a raw candidate.
    ///
    /// Matching is exact apart from ASCII case: "pt" never matches "pt-br".
    pub fn find(&self, candidate: &str) -> Option<&Culture> {
        self.cultures.iter().find(|c| c.matches(candidate))
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.find(candidate).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Culture> {
        self.cultures.iter()
    }

    pub fn len(&self) -> usize {
        self.cultures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cultures.is_empty()
    }
}

/// Validated localization configuration.
///
/// Fields are private; the only way to obtain a value is through
/// [`LocalizationOptions::builder`] followed by `build()`, which validates.
#[derive(Debug, Clone)]
pub struct LocalizationOptions {
    resources_path: String,
    supported: SupportedCultures,
    default_culture: Culture,
    use_all_providers: bool,
    cookie_name: String,
    max_accept_language_values: Option<usize>,
}

impl LocalizationOptions {
    pub fn builder<I>(supported: I, default_culture: &str) -> OptionsBuilder
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        OptionsBuilder {
            resources_path: DEFAULT_RESOURCES_PATH.to_string(),
            supported: supported
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            default_culture: default_culture.to_string(),
            use_all_providers: true,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            max_accept_language_values: None,
        }
    }

    pub fn resources_path(&self) -> &str {
        &self.resources_path
    }

    pub fn supported(&self) -> &SupportedCultures {
        &self.supported
    }

    /// The default culture, in its configured spelling.
    pub fn default_culture(&self) -> &Culture {
        &self.default_culture
    }

    /// When false only the route segment is consulted.
    pub fn use_all_providers(&self) -> bool {
        self.use_all_providers
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Cap on Accept-Language entries tried; `None` tries them all.
    pub fn max_accept_language_values(&self) -> Option<usize> {
        self.max_accept_language_values
    }
}

/// Unvalidated options under construction.
#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    resources_path: String,
    supported: Vec<String>,
    default_culture: String,
    use_all_providers: bool,
    cookie_name: String,
    max_accept_language_values: Option<usize>,
}

impl OptionsBuilder {
    pub fn resources_path(mut self, path: impl Into<String>) -> Self {
        self.resources_path = path.into();
        self
    }

    pub fn use_all_providers(mut self, enabled: bool) -> Self {
        self.use_all_providers = enabled;
        self
    }

    pub fn cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn max_accept_language_values(mut self, max: Option<usize>) -> Self {
        self.max_accept_language_values = max;
        self
    }

    /// Validate and freeze the options.
    pub fn build(self) -> Result<LocalizationOptions, OptionsError> {
        if self.resources_path.trim().is_empty() {
            return Err(OptionsError::EmptyResourcesPath);
        }
        if self.cookie_name.trim().is_empty() {
            return Err(OptionsError::EmptyCookieName);
        }

        let supported = SupportedCultures::new(&self.supported)?;
        let default_culture = supported
            .find(&self.default_culture)
            .cloned()
            .ok_or_else(|| OptionsError::DefaultNotSupported(self.default_culture.clone()))?;

        Ok(LocalizationOptions {
            resources_path: self.resources_path,
            supported,
            default_culture,
            use_all_providers: self.use_all_providers,
            cookie_name: self.cookie_name,
            max_accept_language_values: self.max_accept_language_values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::registry::default_culture_codes;

    #[test]
    fn test_build_with_defaults() {
        let options = LocalizationOptions::builder(&default_culture_codes(), "en")
            .build()
            .expect("Should build");

        assert_eq!(options.supported().len(), 22);
        assert_eq!(options.default_culture().code(), "en");
        assert_eq!(options.resources_path(), "LocalizationResources");
        assert_eq!(options.cookie_name(), ".AspNetCore.Culture");
        assert!(options.use_all_providers());
        assert_eq!(options.max_accept_language_values(), None);
    }

    #[test]
    fn test_default_takes_configured_spelling() {
        let options = LocalizationOptions::builder(&["en", "pt-BR"], "PT-br")
            .build()
            .unwrap();
        assert_eq!(options.default_culture().code(), "pt-BR");
    }

    #[test]
    fn test_empty_list_rejected() {
        let empty: [&str; 0] = [];
        let err = LocalizationOptions::builder(&empty, "en").build().unwrap_err();
        assert_eq!(err, OptionsError::NoCultures);
    }

    #[test]
    fn test_invalid_identifier_rejected() {
        let err = LocalizationOptions::builder(&["en", "e n"], "en")
            .build()
            .unwrap_err();
        assert_eq!(err, OptionsError::InvalidCulture("e n".to_string()));
    }

    #[test]
    fn test_duplicate_rejected_case_insensitively() {
        let err = LocalizationOptions::builder(&["en", "fr", "FR"], "en")
            .build()
            .unwrap_err();
        assert_eq!(err, OptionsError::DuplicateCulture("FR".to_string()));
    }

    #[test]
    fn test_default_must_be_supported() {
        let err = LocalizationOptions::builder(&["en", "pt-br"], "pt")
            .build()
            .unwrap_err();
        assert_eq!(err, OptionsError::DefaultNotSupported("pt".to_string()));
    }

    #[test]
    fn test_empty_resources_path_rejected() {
        let err = LocalizationOptions::builder(&["en"], "en")
            .resources_path("  ")
            .build()
            .unwrap_err();
        assert_eq!(err, OptionsError::EmptyResourcesPath);
    }

    #[test]
    fn test_empty_cookie_name_rejected() {
        let err = LocalizationOptions::builder(&["en"], "en")
            .cookie_name("")
            .build()
            .unwrap_err();
        assert_eq!(err, OptionsError::EmptyCookieName);
    }

    #[test]
    fn test_find_is_exact_match_only() {
        let supported = SupportedCultures::new(&["en", "pt-br"]).unwrap();
        assert_eq!(supported.find("EN").unwrap().code(), "en");
        assert!(supported.find("pt").is_none());
        assert!(supported.find("en-us").is_none());
        assert!(supported.contains("Pt-Br"));
        assert_eq!(supported.len(), 2);
        assert!(!supported.is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OptionsError::DefaultNotSupported("xx".into()).to_string(),
            "default culture 'xx' is not in the supported culture list"
        );
    }
}
