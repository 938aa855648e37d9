//! QR attendance parameters.

use serde::{Deserialize, Serialize};

/// Default validity of a generated QR code, in minutes.
pub const DEFAULT_QR_DURATION_MINUTES: u32 = 15;

/// Parameters for generating a session QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateQrCodeParams {
    /// Session the code checks students into.
    pub session_id: String,

    /// Validity in minutes.
    pub duration_minutes: u32,

    /// Maximum number of scans accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_scans: Option<u32>,

    /// Whether scans must include a location.
    pub require_location: bool,

    /// Accepted distance from the session venue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_radius_meters: Option<u32>,
}

impl GenerateQrCodeParams {
    /// Creates parameters with a 15 minute validity and no location check.
    #[must_use]
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            duration_minutes: DEFAULT_QR_DURATION_MINUTES,
            max_scans: None,
            require_location: false,
            allowed_radius_meters: None,
        }
    }

    /// Sets the validity.
    #[must_use]
    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Caps the number of scans.
    #[must_use]
    pub fn with_max_scans(mut self, max_scans: u32) -> Self {
        self.max_scans = Some(max_scans);
        self
    }

    /// Requires scans within `radius_meters` of the venue.
    #[must_use]
    pub fn with_location(mut self, radius_meters: u32) -> Self {
        self.require_location = true;
        self.allowed_radius_meters = Some(radius_meters);
        self
    }
}

/// Parameters for recording attendance from a scanned QR code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanQrCodeParams {
    /// Scanned QR payload.
    pub qr_code: String,

    /// Student checking in.
    pub student_id: String,

    /// Device latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Device longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl ScanQrCodeParams {
    /// Creates parameters without a location.
    #[must_use]
    pub fn new(qr_code: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            qr_code: qr_code.into(),
            student_id: student_id.into(),
            latitude: None,
            longitude: None,
        }
    }

    /// Attaches the device location.
    #[must_use]
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_generate_qr_code_defaults() {
        let params = GenerateQrCodeParams::new("sess-1");
        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(
            value,
            json!({"session_id": "sess-1", "duration_minutes": 15, "require_location": false})
        );
    }

    #[test]
    fn test_generate_qr_code_zero_max_scans_is_sent() {
        let params = GenerateQrCodeParams::new("sess-1").with_max_scans(0);
        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(value["max_scans"], json!(0));
        assert!(value.get("allowed_radius_meters").is_none());
    }

    #[test]
    fn test_scan_qr_code_zero_coordinates_are_sent() {
        let params = ScanQrCodeParams::new("qr-data", "stu-1").with_location(0.0, 0.0);
        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(value["latitude"], json!(0.0));
        assert_eq!(value["longitude"], json!(0.0));

        let value = serde_json::to_value(ScanQrCodeParams::new("qr-data", "stu-1"))
            .expect("serialize");
        assert_eq!(value, json!({"qr_code": "qr-data", "student_id": "stu-1"}));
    }
}
