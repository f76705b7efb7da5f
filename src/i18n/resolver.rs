//! Culture resolution: run the provider chain and pick one supported culture.
//!
//! Providers are consulted in chain order and the first one proposing a
//! supported culture wins; later providers are never asked. When nothing
//! matches, the configured default is used. Resolution cannot fail.

use crate::i18n::culture::Culture;
use crate::i18n::options::LocalizationOptions;
use crate::i18n::providers::{CultureRequest, ProviderChain, ProviderKind};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// The culture pair selected for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCulture {
    pub culture: Culture,
    pub ui_culture: Culture,
    /// Provider that matched; `None` means the default was used.
    pub provider: Option<ProviderKind>,
}

impl ResolvedCulture {
    pub fn default_for(options: &LocalizationOptions) -> Self {
        let default = options.default_culture().clone();
        Self {
            culture: default.clone(),
            ui_culture: default,
            provider: None,
        }
    }

    pub fn is_default(&self) -> bool {
        self.provider.is_none()
    }
}

/// First candidate present in the supported list, in its configured spelling.
fn first_supported(candidates: &[String], options: &LocalizationOptions) -> Option<Culture> {
    candidates
        .iter()
        .find_map(|c| options.supported().find(c))
        .cloned()
}

/// Resolve the culture for one request.
///
/// A provider matches when at least one of its culture or UI-culture
/// candidates is supported; a half with no supported candidate takes the
/// default. A provider with no supported candidates at all is skipped.
pub fn resolve(
    request: &CultureRequest,
    chain: &ProviderChain,
    options: &LocalizationOptions,
) -> ResolvedCulture {
    for provider in chain.iter() {
        let Some(result) = provider.determine(request, options) else {
            continue;
        };

        let culture = first_supported(&result.cultures, options);
        let ui_culture = first_supported(&result.ui_cultures, options);
        if culture.is_none() && ui_culture.is_none() {
            debug!(
                provider = %provider.kind(),
                candidates = ?result.cultures,
                "No supported culture from provider"
            );
            continue;
        }

        let default = options.default_culture();
        let resolved = ResolvedCulture {
            culture: culture.unwrap_or_else(|| default.clone()),
            ui_culture: ui_culture.unwrap_or_else(|| default.clone()),
            provider: Some(provider.kind()),
        };
        debug!(
            provider = %provider.kind(),
            culture = %resolved.culture,
            ui_culture = %resolved.ui_culture,
            "Resolved request culture"
        );
        return resolved;
    }

    debug!(culture = %options.default_culture(), "Using default culture");
    ResolvedCulture::default_for(options)
}

/// Options and chain bundled for sharing across requests.
#[derive(Debug, Clone)]
pub struct CultureResolver {
    options: Arc<LocalizationOptions>,
    chain: Arc<ProviderChain>,
}

impl CultureResolver {
    /// Build a resolver using the chain the options select.
    pub fn new(options: LocalizationOptions) -> Self {
        let chain = ProviderChain::from_options(&options);
        Self::with_chain(options, chain)
    }

    pub fn with_chain(options: LocalizationOptions, chain: ProviderChain) -> Self {
        Self {
            options: Arc::new(options),
            chain: Arc::new(chain),
        }
    }

    pub fn options(&self) -> &LocalizationOptions {
        &self.options
    }

    pub fn resolve(&self, request: &CultureRequest) -> ResolvedCulture {
        resolve(request, &self.chain, &self.options)
    }
}
