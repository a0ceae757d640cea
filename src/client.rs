use crate::config::Config;
use crate::error::Error;
use crate::http::{self, ApiResponse};
use crate::models::{PriceEstimateList, ProductList, TimeEstimateList, TripHistory, UserProfile};
use crate::urls::{fmt_float, format_url};
use reqwest::header::HeaderValue;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Credential flavor held by a [`UberClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Static application-level credential; `Authorization: Token <t>`.
    /// Cannot reach user-scoped endpoints.
    Server,
    /// OAuth access token tied to an end user; `Authorization: Bearer <t>`.
    User,
}

/// Authenticated client for the versioned Riders API.
///
/// The authorization header is fixed at construction for the client's
/// lifetime; to rotate tokens, build a new client. All methods take `&self`
/// and return per-call metadata, so one instance can be shared across tasks.
#[derive(Debug)]
pub struct UberClient {
    token_type: TokenType,
    authorization: HeaderValue,
    transport: Client,
    config: Config,
}

impl UberClient {
    /// Build a client over a fresh transport.
    pub fn new(token_type: TokenType, token: &str, config: Config) -> Result<Self, Error> {
        let transport = http::build_transport(&config)?;
        Self::with_transport(token_type, token, config, transport)
    }

    /// Build a client over a caller-supplied transport, sharing its
    /// connection pool.
    pub fn with_transport(
        token_type: TokenType,
        token: &str,
        config: Config,
        transport: Client,
    ) -> Result<Self, Error> {
        if token.is_empty() {
            return Err(Error::invalid("token must not be empty"));
        }
        let scheme = match token_type {
            TokenType::Server => "Token",
            TokenType::User => "Bearer",
        };
        let authorization = HeaderValue::from_str(&format!("{scheme} {token}"))
            .map_err(|_| Error::invalid("token contains characters invalid in a header"))?;

        Ok(Self {
            token_type,
            authorization,
            transport,
            config,
        })
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Products available at a location.
    pub async fn products(&self, latitude: f64, longitude: f64) -> Result<ApiResponse<ProductList>, Error> {
        let resource = format!(
            "products?latitude={}&longitude={}",
            fmt_float(latitude),
            fmt_float(longitude)
        );
        self.get(&resource).await
    }

    /// Price range estimates for a start/end pair. `seat_count` is the
    /// shared-ride seat request; the API accepts 0 through 2.
    pub async fn price_estimates(
        &self,
        start_latitude: f64,
        start_longitude: f64,
        end_latitude: f64,
        end_longitude: f64,
        seat_count: u8,
    ) -> Result<ApiResponse<PriceEstimateList>, Error> {
        if seat_count > 2 {
            return Err(Error::invalid(format!(
                "seat_count must be between 0 and 2, got {seat_count}"
            )));
        }
        let resource = format!(
            "estimates/price?start_latitude={}&start_longitude={}&end_latitude={}&end_longitude={}&seat_count={}",
            fmt_float(start_latitude),
            fmt_float(start_longitude),
            fmt_float(end_latitude),
            fmt_float(end_longitude),
            seat_count
        );
        self.get(&resource).await
    }

    /// Pickup ETAs at a location, optionally narrowed to one product.
    pub async fn time_estimates(
        &self,
        start_latitude: f64,
        start_longitude: f64,
        product_id: Option<&str>,
    ) -> Result<ApiResponse<TimeEstimateList>, Error> {
        let mut resource = format!(
            "estimates/time?start_latitude={}&start_longitude={}",
            fmt_float(start_latitude),
            fmt_float(start_longitude)
        );
        if let Some(id) = product_id.filter(|id| !id.trim().is_empty()) {
            resource.push_str("&product_id=");
            resource.push_str(&urlencoding::encode(id));
        }
        self.get(&resource).await
    }

    /// A page of the authorized user's trip history. `limit` caps at 50.
    pub async fn user_activity(
        &self,
        offset: u32,
        limit: u32,
    ) -> Result<ApiResponse<TripHistory>, Error> {
        self.require_user_token("history")?;
        if limit > 50 {
            return Err(Error::invalid(format!("limit must be at most 50, got {limit}")));
        }
        let resource = format!("history?offset={offset}&limit={limit}");
        self.get(&resource).await
    }

    /// Profile of the user who authorized this client.
    pub async fn current_user(&self) -> Result<ApiResponse<UserProfile>, Error> {
        self.require_user_token("me")?;
        self.get("me").await
    }

    fn require_user_token(&self, endpoint: &str) -> Result<(), Error> {
        if self.token_type == TokenType::Server {
            return Err(Error::UnsupportedOperation(format!(
                "{endpoint} requires a user access token, not a server token"
            )));
        }
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, resource: &str) -> Result<ApiResponse<T>, Error> {
        let url = format_url(&self.config.api_url, &self.config.api_version, resource)?;
        http::get_json(&self.transport, &self.config, &url, &self.authorization).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token_type: TokenType) -> UberClient {
        UberClient::new(token_type, "t0ken", Config::default()).unwrap()
    }

    #[test]
    fn authorization_scheme_follows_token_type() {
        let server = client(TokenType::Server);
        assert_eq!(server.authorization.to_str().unwrap(), "Token t0ken");
        let user = client(TokenType::User);
        assert_eq!(user.authorization.to_str().unwrap(), "Bearer t0ken");
    }

    #[test]
    fn empty_token_is_rejected() {
        let err = UberClient::new(TokenType::Server, "", Config::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn seat_count_out_of_range_fails_before_network() {
        let c = client(TokenType::Server);
        let err = c.price_estimates(1.0, 2.0, 3.0, 4.0, 3).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn user_endpoints_reject_server_tokens() {
        let c = client(TokenType::Server);
        let err = c.current_user().await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation(_)));
        let err = c.user_activity(0, 5).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation(_)));
    }

    #[tokio::test]
    async fn activity_limit_over_50_fails_before_network() {
        let c = client(TokenType::User);
        let err = c.user_activity(0, 51).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
