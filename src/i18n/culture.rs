//! Culture type: validated culture identifier.
//!
//! A `Culture` is a language/region identifier such as `en` or `pt-br`. It is
//! cheap to clone and compares case-insensitively, which is how identifiers
//! arriving from requests are matched against the configured list.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Syntax check for culture identifiers: a 2-8 letter language subtag
/// followed by any number of alphanumeric subtags separated by `-` or `_`.
fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z]{2,8}([-_][A-Za-z0-9]{1,8})*$").expect("valid culture pattern")
    })
}

/// Check whether a string is a syntactically valid culture identifier.
pub fn is_valid_identifier(code: &str) -> bool {
    identifier_pattern().is_match(code)
}

/// A culture identifier (e.g. "en", "pt-br").
///
/// The original spelling is preserved for display; equality ignores ASCII case.
#[derive(Clone)]
pub struct Culture {
    code: Arc<str>,
}

impl Culture {
    /// Create a culture from an identifier.
    ///
    /// # Returns
    /// * `Some(Culture)` if the identifier is syntactically valid
    /// * `None` otherwise (empty, whitespace, wildcards, stray punctuation)
    pub fn parse(code: &str) -> Option<Culture> {
        let code = code.trim();
        is_valid_identifier(code).then(|| Culture {
            code: Arc::from(code),
        })
    }

    /// The identifier as configured.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Case-insensitive comparison against a raw identifier.
    pub fn matches(&self, candidate: &str) -> bool {
        self.code.eq_ignore_ascii_case(candidate.trim())
    }
}

impl PartialEq for Culture {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for Culture {}

impl fmt::Debug for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Culture({})", self.code)
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl Serialize for Culture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}
