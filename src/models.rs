//! Typed records for the Riders API response bodies.
//!
//! Field names mirror the wire JSON. Fields the API documents as nullable or
//! omits on some products are `Option`.

use serde::{Deserialize, Serialize};

/// `GET /v1.2/products` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub display_name: String,
    pub description: Option<String>,
    pub capacity: Option<u32>,
    pub image: Option<String>,
    #[serde(default)]
    pub shared: bool,
    #[serde(default)]
    pub cash_enabled: bool,
}

/// `GET /v1.2/estimates/price` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimateList {
    pub prices: Vec<PriceEstimate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub product_id: String,
    pub display_name: String,
    /// Formatted price range, e.g. `"$23-29"`. Metered products send
    /// `"Metered"` and no low/high bounds.
    pub estimate: String,
    pub currency_code: Option<String>,
    pub low_estimate: Option<i64>,
    pub high_estimate: Option<i64>,
    #[serde(default = "default_surge")]
    pub surge_multiplier: f64,
    pub duration: Option<i64>,
    pub distance: Option<f64>,
}

fn default_surge() -> f64 {
    1.0
}

/// `GET /v1.2/estimates/time` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimateList {
    pub times: Vec<TimeEstimate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    pub product_id: String,
    pub display_name: String,
    /// Pickup ETA in seconds.
    pub estimate: i64,
}

/// `GET /v1.2/history` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripHistory {
    pub offset: u32,
    pub limit: u32,
    pub count: u32,
    pub history: Vec<HistoryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub request_id: String,
    pub status: Option<String>,
    pub product_id: Option<String>,
    pub distance: Option<f64>,
    pub request_time: Option<i64>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub start_city: Option<City>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub display_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// `GET /v1.2/me` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
    pub promo_code: Option<String>,
    pub uuid: Option<String>,
}
