//! Where registrations end up: Postgres, or memory when no database is configured

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use crate::core::db::models::NewVoter;
use crate::core::db::repositories::{VoterRepository, VoterRepositoryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

#[derive(Debug, thiserror::Error)]
pub enum VoterStoreError {
    #[error(transparent)]
    Repository(#[from] VoterRepositoryError),
}

/// In-memory registrant with its timestamps
#[derive(Debug, Clone)]
pub struct StoredVoter {
    pub voter: NewVoter,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registrants keyed by document
#[derive(Clone, Default)]
pub struct MemoryVoterStore {
    voters: Arc<DashMap<String, StoredVoter>>,
}

impl MemoryVoterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, voter: &NewVoter) -> UpsertOutcome {
        let now = voter.consent_at;

        match self.voters.entry(voter.document.clone()) {
            Entry::Occupied(mut entry) => {
                let stored = entry.get_mut();
                stored.voter = voter.clone();
                stored.updated_at = now;
                UpsertOutcome::Updated
            }
            Entry::Vacant(entry) => {
                entry.insert(StoredVoter {
                    voter: voter.clone(),
                    created_at: now,
                    updated_at: now,
                });
                UpsertOutcome::Created
            }
        }
    }

    pub fn get(&self, document: &str) -> Option<StoredVoter> {
        self.voters.get(document).map(|entry| entry.clone())
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }
}

#[derive(Clone)]
pub enum VoterStore {
    Postgres(VoterRepository),
    Memory(MemoryVoterStore),
}

impl VoterStore {
    pub fn kind(&self) -> &'static str {
        match self {
            VoterStore::Postgres(_) => "postgres",
            VoterStore::Memory(_) => "memory",
        }
    }

    pub async fn upsert(&self, voter: &NewVoter) -> Result<UpsertOutcome, VoterStoreError> {
        match self {
            VoterStore::Postgres(repo) => {
                let inserted = repo.upsert(voter).await?;
                Ok(if inserted {
                    UpsertOutcome::Created
                } else {
                    UpsertOutcome::Updated
                })
            }
            VoterStore::Memory(store) => Ok(store.upsert(voter)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registration::RegistrationMode;
    use chrono::Duration;

    fn voter(document: &str, first_name: &str, at: DateTime<Utc>) -> NewVoter {
        NewVoter {
            cluster: 1,
            coordinator_id: 1,
            leader_id: 1,
            document: document.to_string(),
            first_name: first_name.to_string(),
            last_name: "Pérez".to_string(),
            address: "Calle 123 # 45 - 67".to_string(),
            phone: "3001234567".to_string(),
            municipality_id: 1,
            neighborhood_id: 10,
            mode: RegistrationMode::Public,
            consent_at: at,
            consent_ip: "127.0.0.1".to_string(),
            consent_user_agent: "test".to_string(),
        }
    }

    #[test]
    fn test_memory_upsert_creates_then_updates() {
        let store = MemoryVoterStore::new();
        let first = Utc::now();
        let later = first + Duration::minutes(5);

        assert_eq!(store.upsert(&voter("123456789", "Juan", first)), UpsertOutcome::Created);
        assert_eq!(store.upsert(&voter("123456789", "Juan Carlos", later)), UpsertOutcome::Updated);
        assert_eq!(store.len(), 1);

        let stored = store.get("123456789").unwrap();
        assert_eq!(stored.voter.first_name, "Juan Carlos");
        assert_eq!(stored.created_at, first);
        assert_eq!(stored.updated_at, later);
    }

    #[test]
    fn test_memory_store_keys_by_document() {
        let store = MemoryVoterStore::new();
        assert!(store.is_empty());

        store.upsert(&voter("123456789", "Juan", Utc::now()));
        store.upsert(&voter("987654321", "Ana", Utc::now()));

        assert_eq!(store.len(), 2);
        assert!(store.get("111111").is_none());
    }

    #[tokio::test]
    async fn test_voter_store_memory_variant() {
        let memory = MemoryVoterStore::new();
        let store = VoterStore::Memory(memory.clone());
        assert_eq!(store.kind(), "memory");

        let outcome = store.upsert(&voter("123456789", "Juan", Utc::now())).await.unwrap();
        assert_eq!(outcome, UpsertOutcome::Created);
        assert_eq!(memory.len(), 1);
    }
}
