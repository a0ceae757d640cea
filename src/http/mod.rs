use crate::config::Config;
use crate::error::Error;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, RETRY_AFTER, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Response headers captured from every successful call.
///
/// Each field is optional; the API omits them on some routes and values are
/// kept as the raw header strings. Metadata is returned per call rather than
/// stored on the client, so concurrent calls never race on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMeta {
    pub rate_limit_remaining: Option<String>,
    pub rate_limit_limit: Option<String>,
    pub rate_limit_reset: Option<String>,
    pub etag: Option<String>,
    pub uber_app: Option<String>,
}

/// A deserialized payload together with the metadata of the call that
/// produced it.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub value: T,
    pub meta: ResponseMeta,
    pub status: StatusCode,
}

/// Build the shared transport. The Authorization header is injected per
/// request so one pool can serve differently-authenticated clients.
pub fn build_transport(cfg: &Config) -> Result<Client, Error> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Ok(ua) = HeaderValue::from_str(&cfg.user_agent) {
        default_headers.insert(USER_AGENT, ua);
    }
    let client = Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .use_rustls_tls()
        .build()?;
    Ok(client)
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

/// Pull the Uber rate-limit/ETag headers out of a response. Absent headers
/// are not an error.
pub fn extract_meta(headers: &HeaderMap) -> ResponseMeta {
    ResponseMeta {
        rate_limit_remaining: header_string(headers, "x-rate-limit-remaining"),
        rate_limit_limit: header_string(headers, "x-rate-limit-limit"),
        rate_limit_reset: header_string(headers, "x-rate-limit-reset"),
        etag: header_string(headers, "etag"),
        uber_app: header_string(headers, "x-uber-app"),
    }
}

pub(crate) fn compute_backoff(attempt: u32, retry_after: Option<Duration>) -> Duration {
    if let Some(d) = retry_after {
        return d;
    }
    // Exponential backoff with jitter: base 200ms * 2^attempt, max 5s.
    let base = 200u64.saturating_mul(1u64 << attempt.min(5));
    let max = 5_000u64.min(base);
    let jitter = fastrand::u64(0..=max / 2);
    Duration::from_millis(max / 2 + jitter)
}

fn retry_after_duration(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Core GET primitive: authenticated request, bounded retry on 429/5xx and
/// transport failures, typed JSON decode, per-call metadata.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    cfg: &Config,
    url: &str,
    authorization: &HeaderValue,
) -> Result<ApiResponse<T>, Error> {
    let mut attempt: u32 = 0;
    loop {
        debug!("GET {} (attempt {})", url, attempt + 1);
        let res = client
            .get(url)
            .header(AUTHORIZATION, authorization.clone())
            .send()
            .await;

        let res = match res {
            Ok(r) => r,
            Err(e) => {
                if attempt < cfg.max_retries {
                    let backoff = compute_backoff(attempt, None);
                    warn!("GET {} transport error ({}), retrying in {:?}", url, e, backoff);
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    continue;
                }
                return Err(Error::Transport(e));
            }
        };

        let status = res.status();
        let headers = res.headers().clone();
        let meta = extract_meta(&headers);

        if status.is_success() {
            let body = res.text().await?;
            let value = serde_json::from_str::<T>(&body)
                .map_err(|e| Error::Deserialization(e.to_string()))?;
            return Ok(ApiResponse { value, meta, status });
        }

        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            if attempt < cfg.max_retries {
                let backoff = compute_backoff(attempt, retry_after_duration(&headers));
                warn!("GET {} got {}, retrying in {:?}", url, status, backoff);
                tokio::time::sleep(backoff).await;
                attempt += 1;
                continue;
            }
        }

        let body = res.text().await.unwrap_or_default();
        return Err(Error::Api { status, body });
    }
}
