//! Car AI Common Library
//!
//! Types and utilities shared between the CLI and the web (WASM) form.

pub mod data_url;
pub mod error;
pub mod form;
pub mod types;
pub mod validate;

pub use data_url::{extract_base64_from_data_url, extract_mime_type_from_data_url};
pub use error::{Error, Result};
pub use form::{ClassifierForm, SelectedImage};
pub use types::{
    error_detail, BodyTypePrediction, BrandPrediction, HealthResponse, PredictionRequest,
    RankedPrediction, VehicleClassification,
};
pub use validate::{validate_image, validate_image_bytes, MAX_IMAGE_BYTES};
