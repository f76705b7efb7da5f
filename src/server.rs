use crate::i18n::cookie::set_cookie_header;
use crate::i18n::registry;
use crate::i18n::{Culture, CultureResolver, LocalizationOptions, ResolvedCulture};
use crate::middleware::localize;
use axum::extract::{Query, State};
use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub resolver: CultureResolver,
}

impl AppState {
    pub fn new(options: LocalizationOptions) -> Self {
        Self {
            resolver: CultureResolver::new(options),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(current_culture))
        .route("/health", get(health))
        .route("/cultures", get(list_cultures))
        .route("/set-culture", get(set_culture))
        .route("/:culture", get(current_culture))
        .layer(axum::middleware::from_fn_with_state(state.clone(), localize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn current_culture(Extension(resolved): Extension<ResolvedCulture>) -> Json<ResolvedCulture> {
    Json(resolved)
}

#[derive(Debug, Serialize)]
pub struct CultureEntry {
    pub code: String,
    pub name: String,
    pub native_name: String,
}

impl CultureEntry {
    fn from_culture(culture: &Culture) -> Self {
        match registry::lookup(culture.code()) {
            Some(info) => Self {
                code: culture.code().to_string(),
                name: info.name.to_string(),
                native_name: info.native_name.to_string(),
            },
            None => Self {
                code: culture.code().to_string(),
                name: culture.code().to_string(),
                native_name: culture.code().to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CultureList {
    pub default: Culture,
    pub current: Culture,
    pub cultures: Vec<CultureEntry>,
}

async fn list_cultures(
    State(state): State<AppState>,
    Extension(resolved): Extension<ResolvedCulture>,
) -> Json<CultureList> {
    let options = state.resolver.options();
    Json(CultureList {
        default: options.default_culture().clone(),
        current: resolved.ui_culture,
        cultures: options
            .supported()
            .iter()
            .map(CultureEntry::from_culture)
            .collect(),
    })
}

#[derive(Debug, Deserialize)]
pub struct SetCultureParams {
    pub culture: Option<String>,
    pub return_url: Option<String>,
}

/// Only same-site paths are followed; anything else goes home.
///
/// Browsers drop tabs and newlines from URLs, so a path carrying control
/// characters or whitespace is refused outright.
fn local_redirect_target(return_url: Option<&str>) -> &str {
    match return_url {
        Some(url)
            if url.starts_with('/')
                && !url.starts_with("//")
                && !url.starts_with("/\\")
                && !url.chars().any(|c| c.is_control() || c.is_whitespace()) =>
        {
            url
        }
        _ => "/",
    }
}

/// 303 to `target`, or to `/` when `target` can't be a header value.
fn see_other(target: &str) -> Response {
    let location = HeaderValue::from_str(target).unwrap_or_else(|e| {
        warn!("Redirect target is not a valid header value: {}", e);
        HeaderValue::from_static("/")
    });
    (StatusCode::SEE_OTHER, [(LOCATION, location)]).into_response()
}

async fn set_culture(
    State(state): State<AppState>,
    Query(params): Query<SetCultureParams>,
) -> Response {
    let target = local_redirect_target(params.return_url.as_deref());
    let mut response = see_other(target);

    let options = state.resolver.options();
    let requested = params.culture.as_deref().unwrap_or_default();
    let Some(culture) = options.supported().find(requested) else {
        warn!("Ignoring request to switch to unsupported culture: {:?}", requested);
        return response;
    };

    let cookie = set_cookie_header(options.cookie_name(), culture.code(), culture.code(), Utc::now());
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().insert(SET_COOKIE, value);
            info!("Culture switched to {}", culture);
        }
        Err(e) => warn!("Failed to build culture cookie: {}", e),
    }
    response
}
