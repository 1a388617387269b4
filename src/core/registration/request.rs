//! Wire types of the public registration endpoint

use serde::{Deserialize, Serialize};

use crate::core::registration::FieldName;

/// JSON body of `POST /public/voters/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterVoterRequest {
    pub document: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub municipality_id: i32,
    pub neighborhood_id: i32,
    pub coordinator_id: i32,
    pub leader_id: i32,
    pub consent: bool,
    pub captcha_token: String,
}

/// Accepted lengths, in characters after trimming
const LENGTH_BOUNDS: [(FieldName, usize, usize); 5] = [
    (FieldName::Document, 6, 20),
    (FieldName::FirstName, 1, 100),
    (FieldName::LastName, 1, 100),
    (FieldName::Address, 1, 200),
    (FieldName::Phone, 7, 20),
];

/// Request rejected before touching captcha or storage
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("El campo '{field}' debe tener entre {min} y {max} caracteres")]
    Length {
        field: FieldName,
        min: usize,
        max: usize,
    },

    #[error("El campo '{0}' debe contener solo números")]
    NotNumeric(FieldName),

    #[error("Debes aceptar el consentimiento para continuar")]
    ConsentRequired,
}

impl RegisterVoterRequest {
    fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::Document => &self.document,
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Address => &self.address,
            FieldName::Phone => &self.phone,
            _ => "",
        }
    }

    /// Length, numeric and consent checks
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, min, max) in LENGTH_BOUNDS {
            let len = self.text(field).trim().chars().count();
            if len < min || len > max {
                return Err(ValidationError::Length { field, min, max });
            }
        }

        if !is_digits(self.document.trim()) {
            return Err(ValidationError::NotNumeric(FieldName::Document));
        }

        let phone: String = self
            .phone
            .trim()
            .chars()
            .filter(|c| *c != '+' && *c != ' ')
            .collect();
        if !is_digits(&phone) {
            return Err(ValidationError::NotNumeric(FieldName::Phone));
        }

        if !self.consent {
            return Err(ValidationError::ConsentRequired);
        }

        Ok(())
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Channel a registration came through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationMode {
    #[default]
    Public,
    Brigadista,
}

impl RegistrationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RegistrationMode::Public => "public",
            RegistrationMode::Brigadista => "brigadista",
        }
    }

    /// Lenient parse of the page's `?mode=` value; anything unknown is public
    pub fn from_query(value: &str) -> Self {
        match value.trim() {
            "brigadista" => RegistrationMode::Brigadista,
            _ => RegistrationMode::Public,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Created,
    Updated,
}

pub const UPDATED_MESSAGE: &str = "Ya estabas registrado, actualizamos tu información.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterVoterResponse {
    pub status: RegistrationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RegisterVoterResponse {
    pub fn created() -> Self {
        Self {
            status: RegistrationStatus::Created,
            message: None,
        }
    }

    pub fn updated() -> Self {
        Self {
            status: RegistrationStatus::Updated,
            message: Some(UPDATED_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterVoterRequest {
        RegisterVoterRequest {
            document: "123456789".to_string(),
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            address: "Calle 123 # 45 - 67".to_string(),
            phone: "3001234567".to_string(),
            municipality_id: 1,
            neighborhood_id: 10,
            coordinator_id: 1,
            leader_id: 1,
            consent: true,
            captcha_token: "captcha-token-123".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(request().validate(), Ok(()));
    }

    #[test]
    fn test_document_must_be_numeric() {
        let mut req = request();
        req.document = "12a3456".to_string();
        assert_eq!(
            req.validate(),
            Err(ValidationError::NotNumeric(FieldName::Document))
        );
    }

    #[test]
    fn test_document_length_bounds() {
        let mut req = request();
        req.document = "12345".to_string();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Length {
                field: FieldName::Document,
                min: 6,
                max: 20
            })
        ));

        req.document = "1".repeat(21);
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Length {
                field: FieldName::Document,
                ..
            })
        ));
    }

    #[test]
    fn test_phone_accepts_plus_and_spaces() {
        let mut req = request();
        req.phone = "+57 300 1234567".to_string();
        assert_eq!(req.validate(), Ok(()));

        req.phone = "300-123-4567".to_string();
        assert_eq!(
            req.validate(),
            Err(ValidationError::NotNumeric(FieldName::Phone))
        );
    }

    #[test]
    fn test_blank_names_rejected_after_trim() {
        let mut req = request();
        req.first_name = "   ".to_string();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Length {
                field: FieldName::FirstName,
                ..
            })
        ));
    }

    #[test]
    fn test_consent_required() {
        let mut req = request();
        req.consent = false;
        assert_eq!(req.validate(), Err(ValidationError::ConsentRequired));
        assert_eq!(
            ValidationError::ConsentRequired.to_string(),
            "Debes aceptar el consentimiento para continuar"
        );
    }

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "document": "123456789",
            "first_name": "Juan",
            "last_name": "Pérez",
            "address": "Calle 123 # 45 - 67",
            "phone": "3001234567",
            "municipality_id": 1,
            "neighborhood_id": 10,
            "coordinator_id": 1,
            "leader_id": 1,
            "consent": true,
            "captcha_token": "captcha-token-123"
        }"#;

        let parsed: RegisterVoterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, request());
    }

    #[test]
    fn test_mode_defaults_to_public() {
        assert_eq!(RegistrationMode::default(), RegistrationMode::Public);
        let mode: RegistrationMode = serde_json::from_str(r#""brigadista""#).unwrap();
        assert_eq!(mode.as_str(), "brigadista");
        assert!(serde_json::from_str::<RegistrationMode>(r#""admin""#).is_err());
    }

    #[test]
    fn test_mode_from_query_is_lenient() {
        assert_eq!(RegistrationMode::from_query("brigadista"), RegistrationMode::Brigadista);
        assert_eq!(RegistrationMode::from_query(" brigadista "), RegistrationMode::Brigadista);
        assert_eq!(RegistrationMode::from_query("admin"), RegistrationMode::Public);
        assert_eq!(RegistrationMode::from_query(""), RegistrationMode::Public);
    }

    #[test]
    fn test_response_serialization() {
        assert_eq!(
            serde_json::to_string(&RegisterVoterResponse::created()).unwrap(),
            r#"{"status":"created"}"#
        );

        let updated = serde_json::to_value(RegisterVoterResponse::updated()).unwrap();
        assert_eq!(updated["status"], "updated");
        assert_eq!(updated["message"], UPDATED_MESSAGE);
    }
}
