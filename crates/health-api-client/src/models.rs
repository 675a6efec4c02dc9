use serde::{Deserialize, Serialize};

/// One rPPG health measurement as the backend stores it.
///
/// Field names on the wire are camelCase except `user_id`, which the
/// backend keeps snake_case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMeasurement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(rename = "user_id")]
    pub user_id: i64,
    /// Epoch milliseconds at capture time.
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    pub rppg_signal: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrv_result: Option<HrvResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spo2_result: Option<Spo2Result>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_quality: Option<SignalQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<String>,
}

/// Heart-rate-variability metrics derived from the rPPG signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrvResult {
    pub rmssd: f64,
    pub pnn50: f64,
    pub sdnn: f64,
    #[serde(rename = "meanRR")]
    pub mean_rr: f64,
    pub triangular_index: f64,
    pub stress_index: f64,
    pub is_valid: bool,
}

/// Pulse-oximetry estimate from the red/infrared channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spo2Result {
    pub spo2: f64,
    #[serde(rename = "redAC")]
    pub red_ac: f64,
    #[serde(rename = "redDC")]
    pub red_dc: f64,
    #[serde(rename = "irAC")]
    pub ir_ac: f64,
    #[serde(rename = "irDC")]
    pub ir_dc: f64,
    pub ratio_of_ratios: f64,
    pub confidence: f64,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalQuality {
    pub snr: f64,
    pub motion_artifact: f64,
    pub illumination_quality: f64,
    pub overall_quality: f64,
}

/// Fixed sample measurement used by the diagnostic probe.
pub fn sample_measurement() -> HealthMeasurement {
    HealthMeasurement {
        session_id: Some("0ec31ebd-1b23-4705-9fca-0bb4cb41ba05".to_string()),
        user_id: 2,
        timestamp: 1_748_227_351_008,
        heart_rate: Some(63.02521),
        rppg_signal: vec![9.815434, 8.816412, 7.9172926],
        frame_count: Some(500),
        processing_time_ms: Some(18_961),
        confidence: Some(0.5),
        hrv_result: Some(HrvResult {
            rmssd: 783.9825070934755,
            pnn50: 78.57142857142857,
            sdnn: 517.0583461596315,
            mean_rr: 952.0,
            triangular_index: 5.0,
            stress_index: 0.06377693321930003,
            is_valid: true,
        }),
        spo2_result: None,
        signal_quality: Some(SignalQuality {
            snr: -161.0140653819141,
            motion_artifact: 0.011299681057845512,
            illumination_quality: 0.4287415836907679,
            overall_quality: 0.0,
        }),
        created_at: None,
        updated_at: None,
        sync_status: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample_measurement()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(
            obj["sessionId"], "0ec31ebd-1b23-4705-9fca-0bb4cb41ba05"
        );
        assert_eq!(obj["user_id"], 2);
        assert_eq!(obj["heartRate"], 63.02521);
        assert_eq!(obj["rppgSignal"].as_array().unwrap().len(), 3);
        assert_eq!(obj["frameCount"], 500);
        assert_eq!(obj["processingTimeMs"], 18_961);

        let hrv = obj["hrvResult"].as_object().unwrap();
        assert_eq!(hrv["meanRR"], 952.0);
        assert_eq!(hrv["isValid"], true);

        let quality = obj["signalQuality"].as_object().unwrap();
        assert_eq!(quality["overallQuality"], 0.0);

        // Unset optional fields stay off the wire entirely.
        assert!(!obj.contains_key("spo2Result"));
        assert!(!obj.contains_key("createdAt"));
        assert!(!obj.contains_key("syncStatus"));
    }

    #[test]
    fn measurement_round_trips_through_json() {
        let json = serde_json::to_string(&sample_measurement()).unwrap();
        let back: HealthMeasurement = serde_json::from_str(&json).unwrap();

        assert_eq!(back.user_id, 2);
        assert_eq!(back.timestamp, 1_748_227_351_008);
        assert!(back.hrv_result.unwrap().is_valid);
        assert!(back.spo2_result.is_none());
    }
}
