//! Wire types for the vehicle classification service
//!
//! Shared between the CLI and the web (WASM) form:
//! - PredictionRequest: request body for both prediction endpoints
//! - BodyTypePrediction / BrandPrediction: per-axis responses
//! - VehicleClassification: the aggregated outcome of one submission

use serde::{Deserialize, Serialize};

/// Path suffix of the body type prediction endpoint
pub const BODY_TYPE_PATH: &str = "/predict/body-type";

/// Path suffix of the brand prediction endpoint
pub const BRAND_PATH: &str = "/predict/brand";

/// Path suffix of the service health endpoint
pub const HEALTH_PATH: &str = "/health";

/// Request body shared by both prediction endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Base64-encoded image, without a data-URL prefix
    pub image: String,
}

/// One ranked alternative prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPrediction {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f64,
}

/// Response of `POST /predict/body-type`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyTypePrediction {
    pub predicted_class: String,
    pub confidence: f64,
    /// Ranked by descending confidence per the API contract
    pub top_3_predictions: Vec<RankedPrediction>,
}

/// Response of `POST /predict/brand`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandPrediction {
    pub predicted_class: String,
    pub confidence: f64,
    /// Ranked by descending confidence per the API contract
    pub top_5_predictions: Vec<RankedPrediction>,
}

/// Aggregate of the two predictions for one submitted photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleClassification {
    pub body_type: BodyTypePrediction,
    pub brand: BrandPrediction,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Extract the human-readable `detail` field from an error response body.
///
/// Returns `None` when the body is not JSON, carries no `detail`, or the
/// detail is empty; callers fall back to a generic message in those cases.
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.is_empty())
}
