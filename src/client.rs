//! HTTP client for the classification service

use crate::error::{CarAiError, Result};
use car_ai_common::types::{
    error_detail, BodyTypePrediction, BrandPrediction, HealthResponse, PredictionRequest,
    VehicleClassification, BODY_TYPE_PATH, BRAND_PATH, HEALTH_PATH,
};
use reqwest::Client;
use std::time::Duration;

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run both predictions for one photo.
    ///
    /// The calls are issued concurrently and joined; if either fails the
    /// whole operation fails and no partial result is returned.
    pub async fn classify(&self, image_base64: &str) -> Result<VehicleClassification> {
        let request = PredictionRequest {
            image: image_base64.to_string(),
        };

        let (body_type, brand) = tokio::try_join!(
            self.predict_body_type(&request),
            self.predict_brand(&request),
        )?;

        Ok(VehicleClassification { body_type, brand })
    }

    pub async fn predict_body_type(&self, request: &PredictionRequest) -> Result<BodyTypePrediction> {
        self.post_prediction(BODY_TYPE_PATH, request).await
    }

    pub async fn predict_brand(&self, request: &PredictionRequest) -> Result<BrandPrediction> {
        self.post_prediction(BRAND_PATH, request).await
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, HEALTH_PATH))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CarAiError::ApiCall(format!(
                "{} returned status {}",
                HEALTH_PATH, status
            )));
        }

        response
            .json::<HealthResponse>()
            .await
            .map_err(|e| CarAiError::ApiParse(e.to_string()))
    }

    async fn post_prediction<T>(&self, path: &str, request: &PredictionRequest) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_detail(&body)
                .unwrap_or_else(|| format!("{} returned status {}", path, status));
            return Err(CarAiError::ApiCall(message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CarAiError::ApiParse(e.to_string()))
    }
}
