use crate::config::Config;
use crate::error::Error;
use crate::http;
use crate::scope::Scope;
use crate::urls::is_absolute_url;
use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

/// Token pair produced by the OAuth2 flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
    /// Absolute expiry computed from the server's `expires_in`, when sent.
    pub expires_at: Option<DateTime<Utc>>,
    /// Scopes the server actually granted.
    pub scopes: Vec<Scope>,
}

impl Credentials {
    /// True once `expires_at` has passed. Credentials without expiry
    /// tracking are treated as valid; the API itself is the authority.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => Utc::now() >= at,
            None => false,
        }
    }
}

/// Wire shape of the token endpoint response. Fields beyond the token pair
/// are optional across grant types.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    expires_in: Option<i64>,
    scope: Option<String>,
}

/// Client for the OAuth2 token endpoint.
///
/// Token requests are a single attempt with no retry: an authorization code
/// is one-time-use, so replaying a possibly-delivered exchange could burn it.
pub struct AuthClient {
    transport: Client,
    config: Config,
}

impl AuthClient {
    pub fn new(config: Config) -> Result<Self, Error> {
        let transport = http::build_transport(&config)?;
        Ok(Self { transport, config })
    }

    /// Exchange an authorization code for credentials
    /// (`grant_type=authorization_code`).
    pub async fn exchange_code(
        &self,
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
        code: &str,
        scopes: &[Scope],
    ) -> Result<Credentials, Error> {
        if client_id.is_empty() {
            return Err(Error::invalid("client_id must not be empty"));
        }
        if client_secret.is_empty() {
            return Err(Error::invalid("client_secret must not be empty"));
        }
        if redirect_uri.is_empty() {
            return Err(Error::invalid("redirect_uri must not be empty"));
        }
        if code.is_empty() {
            return Err(Error::invalid("code must not be empty"));
        }
        if !is_absolute_url(redirect_uri) {
            return Err(Error::invalid(format!(
                "redirect_uri is not an absolute url: {redirect_uri}"
            )));
        }

        let scope = Scope::join(scopes);
        let form = [
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("grant_type", "authorization_code"),
            ("redirect_uri", redirect_uri),
            ("code", code),
            ("scope", scope.as_str()),
        ];
        self.token_request(&form).await
    }

    /// Trade a refresh token for a fresh credential pair
    /// (`grant_type=refresh_token`).
    pub async fn refresh(
        &self,
        client_id: &str,
        client_secret: &str,
        credentials: &Credentials,
    ) -> Result<Credentials, Error> {
        if client_id.is_empty() {
            return Err(Error::invalid("client_id must not be empty"));
        }
        if client_secret.is_empty() {
            return Err(Error::invalid("client_secret must not be empty"));
        }
        if credentials.refresh_token.is_empty() {
            return Err(Error::invalid("credentials carry no refresh token"));
        }

        let form = [
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ];
        self.token_request(&form).await
    }

    async fn token_request(&self, form: &[(&str, &str)]) -> Result<Credentials, Error> {
        let url = self.config.token_url();
        debug!("POST {}", url);
        let res = self.transport.post(&url).form(form).send().await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(Error::Authentication { body });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization(e.to_string()))?;

        let expires_at = token
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs));
        // Unknown granted scopes are skipped, not fatal; the server may add
        // names this crate does not know yet.
        let scopes = token
            .scope
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .filter_map(|s| match s.parse::<Scope>() {
                Ok(scope) => Some(scope),
                Err(_) => {
                    warn!("ignoring unknown granted scope: {}", s);
                    None
                }
            })
            .collect();

        Ok(Credentials {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at,
            scopes,
        })
    }
}
