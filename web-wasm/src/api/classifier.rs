//! Prediction endpoint calls (fetch-based)
//!
//! Both predictions are issued concurrently and joined. If either call
//! fails, the whole submission is reported as failed; partial results are
//! never surfaced.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use car_ai_common::error::{Error, Result};
use car_ai_common::form::CLASSIFY_FAILED_MESSAGE;
use car_ai_common::types::{
    error_detail, BodyTypePrediction, BrandPrediction, PredictionRequest, VehicleClassification,
    BODY_TYPE_PATH, BRAND_PATH,
};

use crate::config::ApiConfig;

/// Classify one photo on both axes.
pub async fn classify_vehicle(
    config: &ApiConfig,
    image_base64: &str,
) -> Result<VehicleClassification> {
    let request = PredictionRequest {
        image: image_base64.to_string(),
    };

    let body_type_url = config.endpoint(BODY_TYPE_PATH);
    let brand_url = config.endpoint(BRAND_PATH);

    let body_type = post_prediction::<BodyTypePrediction>(&body_type_url, &request);
    let brand = post_prediction::<BrandPrediction>(&brand_url, &request);

    let (body_type, brand) = futures::future::try_join(body_type, brand).await?;

    Ok(VehicleClassification { body_type, brand })
}

async fn post_prediction<T: DeserializeOwned>(url: &str, request: &PredictionRequest) -> Result<T> {
    let body = serde_json::to_string(request)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(generic_failure)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(generic_failure)?;

    let window = web_sys::window().expect("no window");
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(generic_failure)?;
    let resp: Response = resp_value.dyn_into().map_err(generic_failure)?;

    if !resp.ok() {
        return Err(Error::Api(response_error_message(&resp).await));
    }

    let json = JsFuture::from(resp.json().map_err(generic_failure)?)
        .await
        .map_err(generic_failure)?;

    serde_wasm_bindgen::from_value(json).map_err(|e| {
        gloo::console::error!("API response parse error:", e.to_string());
        Error::Api(CLASSIFY_FAILED_MESSAGE.to_string())
    })
}

/// Prefer the service's `detail` message, fall back to the generic one.
async fn response_error_message(resp: &Response) -> String {
    let body = match resp.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    gloo::console::error!("API Error:", resp.status(), body.clone());

    error_detail(&body).unwrap_or_else(|| CLASSIFY_FAILED_MESSAGE.to_string())
}

fn generic_failure(err: JsValue) -> Error {
    gloo::console::error!("API Error:", &err);
    Error::Api(CLASSIFY_FAILED_MESSAGE.to_string())
}
