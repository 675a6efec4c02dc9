pub mod client;
pub mod error;
pub mod models;

pub use client::HealthApiClient;
pub use error::{ApiError, ApiResult};
pub use models::{
    sample_measurement, HealthMeasurement, HrvResult, SignalQuality, Spo2Result,
};

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api/health_measurements";

/// Configuration for the health-measurement API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("HEALTH_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(10),
        }
    }
}
