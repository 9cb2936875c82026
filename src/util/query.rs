//! Query-string helpers for threshold-carrying links.
//!
//! All rewriting goes through `url`'s form-urlencoded serializer so values
//! with reserved characters cannot corrupt the resulting address.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use url::Url;
use url::form_urlencoded;

use crate::error::UiError;
use crate::state::threshold::{format_threshold, parse_threshold_param};

/// Query parameter carrying the toxicity threshold.
pub const THRESHOLD_PARAM: &str = "threshold";

/// Base used to resolve relative hrefs when the page URL is unknown.
const FALLBACK_BASE: &str = "http://localhost/";

/// Set `threshold` on `href`, replacing any existing occurrences.
///
/// Absolute hrefs stay absolute. Relative hrefs are resolved against `base`
/// (the full URL of the current page, or a placeholder origin) and written
/// back without scheme or host; scheme-relative hrefs (`//host/...`) keep
/// their host. Other query pairs keep their order.
///
/// # Errors
///
/// Returns [`UiError::InvalidUrl`] when `href` or `base` cannot be parsed.
pub fn with_threshold(href: &str, threshold: f64, base: Option<&str>) -> Result<String, UiError> {
    with_param(href, THRESHOLD_PARAM, &format_threshold(threshold), base)
}

/// Set `key=value` on `href`, replacing any existing `key` pairs.
///
/// # Errors
///
/// Returns [`UiError::InvalidUrl`] when `href` or `base` cannot be parsed.
pub fn with_param(href: &str, key: &str, value: &str, base: Option<&str>) -> Result<String, UiError> {
    let invalid = |source| UiError::InvalidUrl { href: href.to_owned(), source };

    match Url::parse(href) {
        Ok(mut url) => {
            replace_pair(&mut url, key, value);
            Ok(url.into())
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(base.unwrap_or(FALLBACK_BASE)).map_err(invalid)?;
            let mut url = base.join(href).map_err(invalid)?;
            replace_pair(&mut url, key, value);
            if href.starts_with("//") {
                Ok(scheme_relative_form(&url))
            } else {
                Ok(relative_form(&url))
            }
        }
        Err(e) => Err(invalid(e)),
    }
}

fn replace_pair(url: &mut Url, key: &str, value: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(key, value);
}

fn scheme_relative_form(url: &Url) -> String {
    url.as_str()
        .strip_prefix(url.scheme())
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(url.as_str())
        .to_owned()
}

fn relative_form(url: &Url) -> String {
    let mut out = url.path().to_owned();
    if let Some(query) = url.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// Link from the results page to the full thread view.
#[must_use]
pub fn thread_href(thread_url: &str, threshold: f64) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("thread_url", thread_url)
        .append_pair(THRESHOLD_PARAM, &format_threshold(threshold))
        .finish();
    format!("/thread?{query}")
}

/// Resolve an old `/view/<thread_id>` link to the thread view.
///
/// The threshold is carried along only when it parses into `[0, 1]`.
#[must_use]
pub fn legacy_thread_href(thread_id: &str, threshold: Option<&str>) -> String {
    let thread_url = format!("https://reddit.com/comments/{thread_id}");
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("thread_url", &thread_url);
    if let Some(value) = threshold.and_then(parse_threshold_param) {
        serializer.append_pair(THRESHOLD_PARAM, &format_threshold(value));
    }
    format!("/thread?{}", serializer.finish())
}

/// Extract the thread id from a `reddit.com/r/<sub>/comments/<id>` URL.
#[must_use]
pub fn extract_thread_id(thread_url: &str) -> Option<String> {
    thread_url
        .match_indices("reddit.com/r/")
        .find_map(|(idx, marker)| {
            let rest = &thread_url[idx + marker.len()..];
            let sub_len = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            if sub_len == 0 {
                return None;
            }
            let rest = rest[sub_len..].strip_prefix("/comments/")?;
            let id: String = rest
                .chars()
                .take_while(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                .collect();
            (!id.is_empty()).then_some(id)
        })
}
