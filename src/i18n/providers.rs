//! Request culture providers.
//!
//! Each provider reads one request signal and proposes candidate cultures.
//! Providers never validate: checking candidates against the supported list
//! is the resolver's job, so an unsupported candidate simply fails to match.

use crate::i18n::accept_language;
use crate::i18n::cookie::{self, find_cookie};
use crate::i18n::options::LocalizationOptions;
use serde::Serialize;
use std::fmt;

/// Query string key carrying the culture.
pub const QUERY_CULTURE_KEY: &str = "culture";

/// Query string key carrying the UI culture.
pub const QUERY_UI_CULTURE_KEY: &str = "ui-culture";

/// The request signals consulted during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CultureRequest {
    /// First path segment (`/tr/about` → `tr`)
    pub route_segment: Option<String>,
    /// Decoded `culture` query parameter
    pub query_culture: Option<String>,
    /// Decoded `ui-culture` query parameter
    pub query_ui_culture: Option<String>,
    /// Raw value of the culture cookie
    pub cookie: Option<String>,
    /// Raw Accept-Language header value
    pub accept_language: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl CultureRequest {
    /// Gather signals from the pieces of an HTTP request.
    ///
    /// # Arguments
    /// * `path` - Request path (`/tr/about`)
    /// * `query` - Raw query string without the leading `?`
    /// * `cookie_header` - Raw `Cookie` header
    /// * `accept_language` - Raw `Accept-Language` header
    /// * `cookie_name` - Name of the culture cookie
    pub fn from_http(
        path: &str,
        query: Option<&str>,
        cookie_header: Option<&str>,
        accept_language: Option<&str>,
        cookie_name: &str,
    ) -> Self {
        let route_segment = path.split('/').find(|s| !s.is_empty()).and_then(non_empty);

        let mut query_culture = None;
        let mut query_ui_culture = None;
        if let Some(query) = query {
            // A query string that doesn't decode contributes nothing.
            let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
            for (key, value) in pairs {
                if key == QUERY_CULTURE_KEY && query_culture.is_none() {
                    query_culture = non_empty(&value);
                } else if key == QUERY_UI_CULTURE_KEY && query_ui_culture.is_none() {
                    query_ui_culture = non_empty(&value);
                }
            }
        }

        Self {
            route_segment,
            query_culture,
            query_ui_culture,
            cookie: cookie_header
                .and_then(|h| find_cookie(h, cookie_name))
                .and_then(non_empty),
            accept_language: accept_language.and_then(non_empty),
        }
    }

    pub fn with_route_segment(mut self, segment: &str) -> Self {
        self.route_segment = Some(segment.to_string());
        self
    }

    pub fn with_query_culture(mut self, culture: &str) -> Self {
        self.query_culture = Some(culture.to_string());
        self
    }

    pub fn with_query_ui_culture(mut self, ui_culture: &str) -> Self {
        self.query_ui_culture = Some(ui_culture.to_string());
        self
    }

    pub fn with_cookie(mut self, value: &str) -> Self {
        self.cookie = Some(value.to_string());
        self
    }

    pub fn with_accept_language(mut self, header: &str) -> Self {
        self.accept_language = Some(header.to_string());
        self
    }
}

/// Which provider produced a culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    RouteSegment,
    QueryString,
    Cookie,
    AcceptLanguageHeader,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::RouteSegment => "route-segment",
            ProviderKind::QueryString => "query-string",
            ProviderKind::Cookie => "cookie",
            ProviderKind::AcceptLanguageHeader => "accept-language-header",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidates proposed by one provider, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCultureResult {
    pub cultures: Vec<String>,
    pub ui_cultures: Vec<String>,
}

impl ProviderCultureResult {
    fn pair(culture: String, ui_culture: String) -> Self {
        Self {
            cultures: vec![culture],
            ui_cultures: vec![ui_culture],
        }
    }

    fn same(candidates: Vec<String>) -> Self {
        Self {
            cultures: candidates.clone(),
            ui_cultures: candidates,
        }
    }
}

/// A strategy extracting candidate cultures from one request signal.
pub trait RequestCultureProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Propose candidates, or `None` when the signal is absent or unreadable.
    fn determine(
        &self,
        request: &CultureRequest,
        options: &LocalizationOptions,
    ) -> Option<ProviderCultureResult>;
}

/// Reads the first URL path segment.
#[derive(Debug, Default, Clone, Copy)]
pub struct RouteSegmentProvider;

impl RequestCultureProvider for RouteSegmentProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::RouteSegment
    }

    fn determine(
        &self,
        request: &CultureRequest,
        _options: &LocalizationOptions,
    ) -> Option<ProviderCultureResult> {
        let segment = request.route_segment.clone()?;
        Some(ProviderCultureResult::same(vec![segment]))
    }
}

/// Reads `?culture=` and `?ui-culture=`; one alone stands in for both.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryStringProvider;

impl RequestCultureProvider for QueryStringProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::QueryString
    }

    fn determine(
        &self,
        request: &CultureRequest,
        _options: &LocalizationOptions,
    ) -> Option<ProviderCultureResult> {
        match (&request.query_culture, &request.query_ui_culture) {
            (None, None) => None,
            (Some(c), None) => Some(ProviderCultureResult::pair(c.clone(), c.clone())),
            (None, Some(u)) => Some(ProviderCultureResult::pair(u.clone(), u.clone())),
            (Some(c), Some(u)) => Some(ProviderCultureResult::pair(c.clone(), u.clone())),
        }
    }
}

/// Reads the culture cookie.
#[derive(Debug, Default, Clone, Copy)]
pub struct CookieProvider;

impl RequestCultureProvider for CookieProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Cookie
    }

    fn determine(
        &self,
        request: &CultureRequest,
        _options: &LocalizationOptions,
    ) -> Option<ProviderCultureResult> {
        let parsed = cookie::parse_cookie_value(request.cookie.as_deref()?)?;
        Some(ProviderCultureResult::pair(parsed.culture, parsed.ui_culture))
    }
}

/// Reads the Accept-Language header, highest weight first.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptLanguageHeaderProvider;

impl RequestCultureProvider for AcceptLanguageHeaderProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::AcceptLanguageHeader
    }

    fn determine(
        &self,
        request: &CultureRequest,
        options: &LocalizationOptions,
    ) -> Option<ProviderCultureResult> {
        let header = request.accept_language.as_deref()?;
        let limit = options.max_accept_language_values().unwrap_or(usize::MAX);
        let candidates: Vec<String> = accept_language::parse(header)
            .into_iter()
            .take(limit)
            .map(|t| t.tag)
            .collect();

        if candidates.is_empty() {
            return None;
        }
        Some(ProviderCultureResult::same(candidates))
    }
}

/// Providers in precedence order, fixed at startup.
pub struct ProviderChain {
    providers: Vec<Box<dyn RequestCultureProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Box<dyn RequestCultureProvider>>) -> Self {
        Self { providers }
    }

    /// Route segment, query string, cookie, Accept-Language header.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(RouteSegmentProvider),
            Box::new(QueryStringProvider),
            Box::new(CookieProvider),
            Box::new(AcceptLanguageHeaderProvider),
        ])
    }

    pub fn route_only() -> Self {
        Self::new(vec![Box::new(RouteSegmentProvider)])
    }

    pub fn from_options(options: &LocalizationOptions) -> Self {
        if options.use_all_providers() {
            Self::standard()
        } else {
            Self::route_only()
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn RequestCultureProvider + 'static)> {
        self.providers.iter().map(|p| p.as_ref())
    }

    pub fn kinds(&self) -> Vec<ProviderKind> {
        self.iter().map(|p| p.kind()).collect()
    }
}

impl fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}
