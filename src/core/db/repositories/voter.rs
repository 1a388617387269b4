//! Voter repository
//!
//! Upserts registrants into `load_voters`, keyed by document number.

use sqlx::PgPool;

use crate::core::db::models::NewVoter;

#[derive(Debug, thiserror::Error)]
pub enum VoterRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct VoterRepository {
    pool: PgPool,
}

impl VoterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert or overwrite by document. Returns `true` when a new row was created.
    pub async fn upsert(&self, voter: &NewVoter) -> Result<bool, VoterRepositoryError> {
        // xmax is zero only for a freshly inserted tuple
        let inserted = sqlx::query_scalar::<_, bool>(
            r#"
            INSERT INTO load_voters (
                cluster, id_coord, id_leader, document, first_name, last_name,
                address, phone, id_municipality, id_neighborhood, mode,
                consent, consent_at, consent_ip, consent_user_agent,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, TRUE, $12, $13, $14, $12, $12)
            ON CONFLICT (document) DO UPDATE SET
                id_coord = EXCLUDED.id_coord,
                id_leader = EXCLUDED.id_leader,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                address = EXCLUDED.address,
                phone = EXCLUDED.phone,
                id_municipality = EXCLUDED.id_municipality,
                id_neighborhood = EXCLUDED.id_neighborhood,
                mode = EXCLUDED.mode,
                consent = EXCLUDED.consent,
                consent_at = EXCLUDED.consent_at,
                consent_ip = EXCLUDED.consent_ip,
                consent_user_agent = EXCLUDED.consent_user_agent,
                updated_at = EXCLUDED.updated_at
            RETURNING (xmax = 0) AS inserted
            "#,
        )
        .bind(voter.cluster)
        .bind(voter.coordinator_id)
        .bind(voter.leader_id)
        .bind(&voter.document)
        .bind(&voter.first_name)
        .bind(&voter.last_name)
        .bind(&voter.address)
        .bind(&voter.phone)
        .bind(voter.municipality_id)
        .bind(voter.neighborhood_id)
        .bind(voter.mode.as_str())
        .bind(voter.consent_at)
        .bind(&voter.consent_ip)
        .bind(&voter.consent_user_agent)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }
}
