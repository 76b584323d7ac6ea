//! Remote classification API client

pub mod classifier;
