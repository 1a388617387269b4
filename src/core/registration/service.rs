//! Registration service
//!
//! Validates a public registration, checks the reference ids against the
//! directory, verifies the captcha and upserts the registrant. The one-shot
//! captcha token is only spent on requests that could otherwise be stored.
//! Coordinates between the directory, the voter store and the captcha verifier.

use chrono::Utc;

use crate::core::catalog::{CatalogCategory, Directory, DirectoryError};
use crate::core::db::models::NewVoter;
use crate::core::registration::captcha::{CaptchaError, CaptchaVerifier};
use crate::core::registration::store::{UpsertOutcome, VoterStore, VoterStoreError};
use crate::core::registration::{
    FieldName, RegisterVoterRequest, RegisterVoterResponse, RegistrationMode, ValidationError,
};

/// Registration error types
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Captcha(#[from] CaptchaError),

    #[error("El valor de '{0}' no es una opción válida")]
    UnknownOption(FieldName),

    #[error("Barrio inválido")]
    InvalidNeighborhood,

    #[error("El barrio no pertenece al municipio seleccionado")]
    NeighborhoodMismatch,

    #[error("Error consultando el catálogo")]
    Directory(#[from] DirectoryError),

    #[error("Error guardando el registro")]
    Store(#[from] VoterStoreError),
}

/// Consent evidence captured from the HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentContext {
    pub ip: String,
    pub user_agent: String,
    pub mode: RegistrationMode,
}

#[derive(Clone)]
pub struct RegistrationService {
    directory: Directory,
    store: VoterStore,
    captcha: CaptchaVerifier,
}

impl RegistrationService {
    pub fn new(directory: Directory, store: VoterStore, captcha: CaptchaVerifier) -> Self {
        Self {
            directory,
            store,
            captcha,
        }
    }

    pub async fn register(
        &self,
        request: RegisterVoterRequest,
        context: &ConsentContext,
    ) -> Result<RegisterVoterResponse, RegistrationError> {
        request.validate()?;
        self.check_references(&request).await?;

        if let Err(err) = self.captcha.verify(&request.captcha_token, &context.ip).await {
            tracing::warn!("Captcha rejected for {}: {:?}", context.ip, err);
            return Err(err.into());
        }

        let voter = NewVoter::from_request(
            &request,
            context.mode,
            Utc::now(),
            context.ip.as_str(),
            context.user_agent.as_str(),
        );

        let outcome = self.store.upsert(&voter).await.inspect_err(|err| {
            tracing::error!("Failed to store registration: {}", err);
        })?;

        tracing::info!(
            "Registration {:?} (mode={}, store={})",
            outcome,
            context.mode.as_str(),
            self.store.kind()
        );

        Ok(match outcome {
            UpsertOutcome::Created => RegisterVoterResponse::created(),
            UpsertOutcome::Updated => RegisterVoterResponse::updated(),
        })
    }

    /// Every id must be a current option; the neighborhood must sit in the municipality
    async fn check_references(&self, request: &RegisterVoterRequest) -> Result<(), RegistrationError> {
        let references = [
            (CatalogCategory::Leaders, request.leader_id),
            (CatalogCategory::Coordinators, request.coordinator_id),
            (CatalogCategory::Municipalities, request.municipality_id),
        ];

        for (category, id) in references {
            if !self.directory.contains(category, id).await? {
                tracing::warn!("Unknown {} id {}", category, id);
                return Err(RegistrationError::UnknownOption(category.field()));
            }
        }

        match self
            .directory
            .neighborhood_municipality(request.neighborhood_id)
            .await?
        {
            None => Err(RegistrationError::InvalidNeighborhood),
            Some(municipality) if municipality != request.municipality_id => {
                tracing::warn!(
                    "Neighborhood {} belongs to municipality {}, not {}",
                    request.neighborhood_id,
                    municipality,
                    request.municipality_id
                );
                Err(RegistrationError::NeighborhoodMismatch)
            }
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registration::RegistrationStatus;
    use crate::core::registration::store::MemoryVoterStore;

    fn service(store: MemoryVoterStore) -> RegistrationService {
        RegistrationService::new(
            Directory::Static,
            VoterStore::Memory(store),
            CaptchaVerifier::bypass(),
        )
    }

    fn context() -> ConsentContext {
        ConsentContext {
            ip: "203.0.113.7".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            mode: RegistrationMode::Public,
        }
    }

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

    #[tokio::test]
    async fn test_register_creates_then_updates() {
        let store = MemoryVoterStore::new();
        let service = service(store.clone());

        let first = service.register(request(), &context()).await.unwrap();
        assert_eq!(first, RegisterVoterResponse::created());

        let mut changed = request();
        changed.address = "Carrera 50 # 80 - 12".to_string();
        let second = service.register(changed, &context()).await.unwrap();
        assert_eq!(second.status, RegistrationStatus::Updated);
        assert!(second.message.is_some());

        let stored = store.get("123456789").unwrap();
        assert_eq!(stored.voter.address, "Carrera 50 # 80 - 12");
        assert_eq!(stored.voter.consent_ip, "203.0.113.7");
        assert_eq!(stored.voter.consent_user_agent, "Mozilla/5.0");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_register_records_mode() {
        let store = MemoryVoterStore::new();
        let ctx = ConsentContext {
            mode: RegistrationMode::Brigadista,
            ..context()
        };

        service(store.clone()).register(request(), &ctx).await.unwrap();

        assert_eq!(
            store.get("123456789").unwrap().voter.mode,
            RegistrationMode::Brigadista
        );
    }

    #[tokio::test]
    async fn test_register_rejects_without_consent() {
        let store = MemoryVoterStore::new();
        let mut req = request();
        req.consent = false;

        let result = service(store.clone()).register(req, &context()).await;

        assert!(matches!(
            result,
            Err(RegistrationError::Validation(ValidationError::ConsentRequired))
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_unknown_leader() {
        let mut req = request();
        req.leader_id = 7;

        let result = service(MemoryVoterStore::new()).register(req, &context()).await;

        assert!(matches!(
            result,
            Err(RegistrationError::UnknownOption(FieldName::LeaderId))
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_unknown_neighborhood() {
        let mut req = request();
        req.neighborhood_id = 99;

        let result = service(MemoryVoterStore::new()).register(req, &context()).await;

        assert!(matches!(result, Err(RegistrationError::InvalidNeighborhood)));
    }

    #[tokio::test]
    async fn test_register_rejects_neighborhood_outside_municipality() {
        let mut req = request();
        req.municipality_id = 2;

        let result = service(MemoryVoterStore::new()).register(req, &context()).await;

        assert!(matches!(result, Err(RegistrationError::NeighborhoodMismatch)));
    }

    #[tokio::test]
    async fn test_register_requires_captcha_when_not_bypassed() {
        let store = MemoryVoterStore::new();
        let service = RegistrationService::new(
            Directory::Static,
            VoterStore::Memory(store.clone()),
            CaptchaVerifier::new(Some("secret".to_string())),
        );
        let mut req = request();
        req.captcha_token = String::new();

        let result = service.register(req, &context()).await;

        assert!(matches!(
            result,
            Err(RegistrationError::Captcha(CaptchaError::Missing))
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_reference_errors_leave_captcha_token_unspent() {
        // Any call to the verifier would fail with NotConfigured
        let service = RegistrationService::new(
            Directory::Static,
            VoterStore::Memory(MemoryVoterStore::new()),
            CaptchaVerifier::new(None),
        );

        let mut req = request();
        req.municipality_id = 2;
        let result = service.register(req, &context()).await;
        assert!(matches!(result, Err(RegistrationError::NeighborhoodMismatch)));

        let result = service.register(request(), &context()).await;
        assert!(matches!(
            result,
            Err(RegistrationError::Captcha(CaptchaError::NotConfigured))
        ));
    }

    #[test]
    fn test_registration_error_display() {
        assert_eq!(
            RegistrationError::NeighborhoodMismatch.to_string(),
            "El barrio no pertenece al municipio seleccionado"
        );
        assert_eq!(
            RegistrationError::from(ValidationError::NotNumeric(FieldName::Document)).to_string(),
            "El campo 'document' debe contener solo números"
        );
    }
}
