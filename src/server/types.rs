use crate::doctors::{DoctorId, FallbackCatalog, fallback_photos};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const API_VERSION: &str = "1.0";

pub const MSG_NOT_CONFIGURED: &str = "provider not configured";
pub const MSG_MISSING_PARAMETERS: &str = "missing parameters";
pub const MSG_UNKNOWN_DOCTOR: &str = "unknown doctor identifier";
pub const MSG_INVALID_BODY: &str = "invalid request body";
pub const MSG_INTERNAL_ERROR: &str = "internal error";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub generate_all: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub payload: Option<Payload>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Photo(PhotoPayload),
    Batch(BatchPayload),
    Fallbacks(FallbackPayload),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoPayload {
    pub doctor_id: DoctorId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub fallback: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BatchPayload {
    pub photos: BTreeMap<DoctorId, String>,
    pub fallbacks: FallbackCatalog,
}

#[derive(Debug, Serialize)]
pub struct FallbackPayload {
    pub fallbacks: FallbackCatalog,
}

/// Read-only descriptor returned by the listing endpoint.
#[derive(Debug, Serialize)]
pub struct ListDescriptor {
    pub message: String,
    pub version: &'static str,
    pub doctors: Vec<DoctorId>,
    pub fallbacks: FallbackCatalog,
}

impl ResponseEnvelope {
    pub fn not_configured() -> Self {
        Self::with_fallbacks(false, MSG_NOT_CONFIGURED)
    }

    pub fn missing_parameters() -> Self {
        Self {
            success: false,
            message: MSG_MISSING_PARAMETERS.to_string(),
            payload: None,
        }
    }

    pub fn unknown_doctor() -> Self {
        Self {
            success: false,
            message: MSG_UNKNOWN_DOCTOR.to_string(),
            payload: None,
        }
    }

    pub fn invalid_body() -> Self {
        Self::with_fallbacks(false, MSG_INVALID_BODY)
    }

    pub fn internal_error() -> Self {
        Self::with_fallbacks(false, MSG_INTERNAL_ERROR)
    }

    pub fn batch(photos: BTreeMap<DoctorId, String>) -> Self {
        Self {
            success: true,
            message: format!(
                "generated {} of {} photos",
                photos.len(),
                DoctorId::ALL.len()
            ),
            payload: Some(Payload::Batch(BatchPayload {
                photos,
                fallbacks: fallback_photos(),
            })),
        }
    }

    pub fn photo(doctor_id: DoctorId, photo_url: Option<String>) -> Self {
        let (success, message) = match photo_url {
            Some(_) => (true, "photo generated"),
            None => (false, "generation unavailable, use fallback"),
        };

        Self {
            success,
            message: message.to_string(),
            payload: Some(Payload::Photo(PhotoPayload {
                doctor_id,
                photo_url,
                fallback: doctor_id.fallback_url(),
            })),
        }
    }

    fn with_fallbacks(success: bool, message: &str) -> Self {
        Self {
            success,
            message: message.to_string(),
            payload: Some(Payload::Fallbacks(FallbackPayload {
                fallbacks: fallback_photos(),
            })),
        }
    }
}

impl ListDescriptor {
    pub fn current() -> Self {
        Self {
            message: "Doctor photo generation API".to_string(),
            version: API_VERSION,
            doctors: DoctorId::ALL.to_vec(),
            fallbacks: fallback_photos(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_photo_envelope_is_flattened() {
        let envelope =
            ResponseEnvelope::photo(DoctorId::DrSarah, Some("https://img/sarah.png".to_string()));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({
                "success": true,
                "message": "photo generated",
                "doctorId": "dr-sarah",
                "photoUrl": "https://img/sarah.png",
                "fallback": DoctorId::DrSarah.fallback_url(),
            })
        );
    }

    #[test]
    fn test_failed_photo_envelope_omits_photo_url() {
        let value = serde_json::to_value(ResponseEnvelope::photo(DoctorId::DrRaj, None)).unwrap();

        assert_eq!(value["success"], json!(false));
        assert_eq!(value["doctorId"], json!("dr-raj"));
        assert_eq!(value["fallback"], json!(DoctorId::DrRaj.fallback_url()));
        assert!(value.get("photoUrl").is_none());
    }

    #[test]
    fn test_missing_parameters_has_no_payload() {
        let value = serde_json::to_value(ResponseEnvelope::missing_parameters()).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "message": "missing parameters" })
        );
    }

    #[test]
    fn test_fallback_envelopes_carry_full_catalog() {
        for envelope in [
            ResponseEnvelope::not_configured(),
            ResponseEnvelope::internal_error(),
            ResponseEnvelope::invalid_body(),
        ] {
            let value = serde_json::to_value(&envelope).unwrap();
            assert_eq!(value["success"], json!(false));
            assert_eq!(value["fallbacks"].as_object().unwrap().len(), 6);
        }
    }

    #[test]
    fn test_generate_request_accepts_partial_bodies() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.doctor_id.is_none());
        assert!(request.generate_all.is_none());

        let request: GenerateRequest =
            serde_json::from_str(r#"{"doctorId":"dr-elena","generateAll":null}"#).unwrap();
        assert_eq!(request.doctor_id.as_deref(), Some("dr-elena"));
        assert!(request.generate_all.is_none());
    }

    #[test]
    fn test_list_descriptor() {
        let value = serde_json::to_value(ListDescriptor::current()).unwrap();

        assert_eq!(value["version"], json!("1.0"));
        assert_eq!(
            value["doctors"],
            json!(["dr-sarah", "dr-marcus", "dr-elena", "dr-james", "dr-gabriel", "dr-raj"])
        );
        assert_eq!(value["fallbacks"].as_object().unwrap().len(), 6);
    }
}
