use crate::error::{ApiError, ApiResult};
use crate::models::HealthMeasurement;
use crate::ApiConfig;
use serde_json::{json, Value};
use std::time::Duration;

/// Client for the health-measurement endpoint family.
///
/// `base_url` points at the collection itself, e.g.
/// `http://host:5000/api/health_measurements`; lookups append `/{sessionId}`.
#[derive(Clone)]
pub struct HealthApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HealthApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        Self::new(config.base_url.clone(), config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a measurement and return the `sessionId` the backend assigned,
    /// if the response body carries one. `mode` only labels the log line.
    pub async fn create_measurement(
        &self,
        measurement: &HealthMeasurement,
        mode: &str,
    ) -> ApiResult<Option<String>> {
        let response = self
            .client
            .post(&self.base_url)
            .json(measurement)
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        println!("Create ({}): {} {}", mode, status.as_u16(), body);

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.to_string(),
            });
        }

        let session_id = body
            .get("sessionId")
            .and_then(Value::as_str)
            .map(str::to_owned);
        tracing::info!(mode, ?session_id, "measurement created");
        Ok(session_id)
    }

    /// GET a stored measurement by session id and return the parsed body.
    pub async fn get_measurement(&self, session_id: &str) -> ApiResult<Value> {
        let url = format!("{}/{}", self.base_url, session_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body: Value = response.json().await?;
        println!("Get: {} {}", status.as_u16(), body);

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.to_string(),
            });
        }

        Ok(body)
    }

    /// GET measurements awaiting sync for a user.
    pub async fn pending_measurements(
        &self,
        user_id: &str,
    ) -> ApiResult<Vec<HealthMeasurement>> {
        let url = format!("{}/pending", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("user_id", user_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// POST a batch of session ids to mark as synced; returns the backend's
    /// `status` field, if any.
    pub async fn sync_measurements(
        &self,
        session_ids: &[String],
    ) -> ApiResult<Option<String>> {
        let url = format!("{}/sync", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "sessionIds": session_ids }))
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.to_string(),
            });
        }

        tracing::info!(count = session_ids.len(), "measurements synced");
        Ok(body.get("status").and_then(Value::as_str).map(str::to_owned))
    }
}
