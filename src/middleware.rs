//! Request localization middleware.
//!
//! Resolves the culture for every request, stores the [`ResolvedCulture`] in
//! the request extensions for handlers, and advertises it on the response
//! with `Content-Language`.

use crate::i18n::{CultureRequest, ResolvedCulture};
use crate::server::AppState;
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, COOKIE};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

/// Join every line of a repeated header; lines that aren't text are skipped.
fn joined_header(req: &Request, name: HeaderName, separator: &str) -> Option<String> {
    let values: Vec<&str> = req
        .headers()
        .get_all(name)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    (!values.is_empty()).then(|| values.join(separator))
}

/// Collect the culture signals carried by an HTTP request.
///
/// HTTP/2 clients may split cookies over several `Cookie` lines, and
/// `Accept-Language` may also repeat, so all lines are read.
pub fn culture_request(req: &Request, cookie_name: &str) -> CultureRequest {
    let cookies = joined_header(req, COOKIE, "; ");
    let accept_language = joined_header(req, ACCEPT_LANGUAGE, ", ");
    CultureRequest::from_http(
        req.uri().path(),
        req.uri().query(),
        cookies.as_deref(),
        accept_language.as_deref(),
        cookie_name,
    )
}

pub async fn localize(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let signals = culture_request(&req, state.resolver.options().cookie_name());
    let resolved: ResolvedCulture = state.resolver.resolve(&signals);

    // Configured identifiers are validated, so this only fails on odd input.
    let content_language = HeaderValue::from_str(resolved.ui_culture.code()).ok();
    req.extensions_mut().insert(resolved);

    let mut response = next.run(req).await;
    if let Some(value) = content_language {
        response.headers_mut().insert(CONTENT_LANGUAGE, value);
    }
    response
}
