use health_api_client::{sample_measurement, HealthApiClient};

/// Post the fixed sample measurement, then fetch it back by the session id
/// the backend returned. Skips the lookup when no id came back.
pub async fn run(client: &HealthApiClient) -> anyhow::Result<()> {
    let session_id = client
        .create_measurement(&sample_measurement(), "heartRate_hrv")
        .await?;

    match session_id {
        Some(id) if !id.is_empty() => {
            client.get_measurement(&id).await?;
        }
        _ => tracing::warn!("create response carried no sessionId, skipping lookup"),
    }

    Ok(())
}
