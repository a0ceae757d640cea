use crate::error::Error;
use url::Url;

/// Compose `{base}/{version}/{resource}`.
///
/// The resource string may carry a pre-encoded query; no escaping is applied
/// here. Callers encode individual parameter values with
/// [`urlencoding::encode`] before building the resource.
pub fn format_url(base: &str, version: &str, resource: &str) -> Result<String, Error> {
    if base.is_empty() {
        return Err(Error::invalid("base url must not be empty"));
    }
    if version.is_empty() {
        return Err(Error::invalid("api version must not be empty"));
    }
    if resource.is_empty() {
        return Err(Error::invalid("resource must not be empty"));
    }
    Ok(format!("{}/{}/{}", base.trim_end_matches('/'), version, resource))
}

/// True when `s` parses as an absolute URL (scheme + host).
pub fn is_absolute_url(s: &str) -> bool {
    Url::parse(s).is_ok_and(|u| u.has_host())
}

/// Shortest round-trip-safe decimal rendering of a coordinate.
///
/// Rust's `Display` for floats is already shortest-round-trip, so this only
/// exists to pin that contract at the call sites building query strings.
pub fn fmt_float(v: f64) -> String {
    v.to_string()
}
