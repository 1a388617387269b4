//! Database models
//!
//! Reference table rows and the values written to `load_voters`.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::core::catalog::CatalogOption;
use crate::core::registration::{RegisterVoterRequest, RegistrationMode};

/// Cluster every public registration is loaded into
pub const DEFAULT_CLUSTER: i32 = 1;

// ============================================================================
// Reference rows
// ============================================================================

/// Row of `leader`, `coordinators`, `municipality` or `neighborhood`
#[derive(Debug, Clone, FromRow)]
pub struct ReferenceRow {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
}

impl From<ReferenceRow> for CatalogOption {
    fn from(row: ReferenceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            parent_id: row.parent_id,
        }
    }
}

// ============================================================================
// Voter Model
// ============================================================================

/// Values written by an upsert
#[derive(Debug, Clone, PartialEq)]
pub struct NewVoter {
    pub cluster: i32,
    pub coordinator_id: i32,
    pub leader_id: i32,
    pub document: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub municipality_id: i32,
    pub neighborhood_id: i32,
    pub mode: RegistrationMode,
    pub consent_at: DateTime<Utc>,
    pub consent_ip: String,
    pub consent_user_agent: String,
}

impl NewVoter {
    /// Trimmed copy of a validated request plus consent evidence
    pub fn from_request(
        request: &RegisterVoterRequest,
        mode: RegistrationMode,
        consent_at: DateTime<Utc>,
        consent_ip: impl Into<String>,
        consent_user_agent: impl Into<String>,
    ) -> Self {
        Self {
            cluster: DEFAULT_CLUSTER,
            coordinator_id: request.coordinator_id,
            leader_id: request.leader_id,
            document: request.document.trim().to_string(),
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            address: request.address.trim().to_string(),
            phone: request.phone.trim().to_string(),
            municipality_id: request.municipality_id,
            neighborhood_id: request.neighborhood_id,
            mode,
            consent_at,
            consent_ip: consent_ip.into(),
            consent_user_agent: consent_user_agent.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_voter_trims_text() {
        let request = RegisterVoterRequest {
            document: " 123456789 ".to_string(),
            first_name: "  Juan ".to_string(),
            last_name: "Pérez  ".to_string(),
            address: " Calle 123 # 45 - 67".to_string(),
            phone: "3001234567 ".to_string(),
            municipality_id: 1,
            neighborhood_id: 10,
            coordinator_id: 2,
            leader_id: 1,
            consent: true,
            captcha_token: "captcha-token-123".to_string(),
        };
        let now = Utc::now();

        let voter = NewVoter::from_request(
            &request,
            RegistrationMode::Brigadista,
            now,
            "203.0.113.7",
            "Mozilla/5.0",
        );

        assert_eq!(voter.cluster, DEFAULT_CLUSTER);
        assert_eq!(voter.document, "123456789");
        assert_eq!(voter.first_name, "Juan");
        assert_eq!(voter.last_name, "Pérez");
        assert_eq!(voter.address, "Calle 123 # 45 - 67");
        assert_eq!(voter.phone, "3001234567");
        assert_eq!(voter.coordinator_id, 2);
        assert_eq!(voter.mode, RegistrationMode::Brigadista);
        assert_eq!(voter.consent_at, now);
        assert_eq!(voter.consent_ip, "203.0.113.7");
    }

    #[test]
    fn test_reference_row_into_option() {
        let option: CatalogOption = ReferenceRow {
            id: 10,
            name: "Centro".to_string(),
            parent_id: Some(1),
        }
        .into();

        assert_eq!(option, CatalogOption::new(10, "Centro").with_parent(1));
    }
}
