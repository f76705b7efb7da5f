//! Internationalization (i18n) module: request culture resolution.
//!
//! # Architecture
//!
//! - `culture`: Validated culture identifier type
//! - `registry`: Display names for the built-in cultures and the default list
//! - `options`: Validated, immutable localization configuration
//! - `accept_language`: Weighted Accept-Language parsing
//! - `cookie`: Culture cookie format (`c=fr|uic=fr`)
//! - `providers`: Request signals and the providers that read them
//! - `resolver`: Short-circuiting provider chain with default fallback
//!
//! # Example
//!
//! ```rust
//! use express_localization::i18n::{CultureRequest, CultureResolver, LocalizationOptions};
//!
//! let options = LocalizationOptions::builder(&["en", "ar", "fr"], "en")
//!     .build()
//!     .unwrap();
//! let resolver = CultureResolver::new(options);
//!
//! let request = CultureRequest::default()
//!     .with_cookie("fr")
//!     .with_accept_language("ar;q=0.9");
//! assert_eq!(resolver.resolve(&request).culture.code(), "fr");
//! ```

pub mod accept_language;
pub mod cookie;
mod culture;
mod options;
mod providers;
pub mod registry;
mod resolver;

pub use culture::Culture;
pub use options::{
    LocalizationOptions, OptionsBuilder, OptionsError, SupportedCultures, DEFAULT_COOKIE_NAME,
    DEFAULT_RESOURCES_PATH,
};
pub use providers::{
    AcceptLanguageHeaderProvider, CookieProvider, CultureRequest, ProviderChain,
    ProviderCultureResult, ProviderKind, QueryStringProvider, RequestCultureProvider,
    RouteSegmentProvider, QUERY_CULTURE_KEY, QUERY_UI_CULTURE_KEY,
};
pub use registry::CultureInfo;
pub use resolver::{resolve, CultureResolver, ResolvedCulture};
