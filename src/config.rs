use crate::i18n::registry::{default_culture_codes, DEFAULT_CULTURE};
use crate::i18n::{LocalizationOptions, DEFAULT_COOKIE_NAME, DEFAULT_RESOURCES_PATH};
use anyhow::{Context, Result};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Localization
    pub localization: LocalizationOptions,
}

/// Parse a boolean flag, accepting the usual spellings.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Split a comma-separated culture list, dropping blanks.
fn parse_culture_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let supported: Vec<String> = match std::env::var("SUPPORTED_CULTURES") {
            Ok(list) => parse_culture_list(&list),
            Err(_) => default_culture_codes()
                .into_iter()
                .map(String::from)
                .collect(),
        };

        let default_culture =
            std::env::var("DEFAULT_CULTURE").unwrap_or_else(|_| DEFAULT_CULTURE.to_string());

        let use_all_providers = match std::env::var("USE_ALL_CULTURE_PROVIDERS") {
            Ok(v) => parse_flag(&v).unwrap_or_else(|| {
                warn!("Ignoring unrecognized USE_ALL_CULTURE_PROVIDERS value: {}", v);
                true
            }),
            Err(_) => true,
        };

        let max_accept_language_values = match std::env::var("ACCEPT_LANGUAGE_MAX_VALUES") {
            Ok(v) => Some(
                v.trim()
                    .parse::<usize>()
                    .with_context(|| format!("ACCEPT_LANGUAGE_MAX_VALUES is not a number: {}", v))?,
            ),
            Err(_) => None,
        };

        let localization = LocalizationOptions::builder(&supported, &default_culture)
            .resources_path(
                std::env::var("RESOURCES_PATH")
                    .unwrap_or_else(|_| DEFAULT_RESOURCES_PATH.to_string()),
            )
            .cookie_name(
                std::env::var("CULTURE_COOKIE_NAME")
                    .unwrap_or_else(|_| DEFAULT_COOKIE_NAME.to_string()),
            )
            .use_all_providers(use_all_providers)
            .max_accept_language_values(max_accept_language_values)
            .build()
            .context("Invalid localization configuration")?;

        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            localization,
        })
    }
}
