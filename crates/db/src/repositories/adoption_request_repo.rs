//! Repository for the `adoption_requests` table.

use petadopt_core::patch::Merge;
use petadopt_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::adoption_request::{
    AdoptionRequest, CreateAdoptionRequest, PatchAdoptionRequest,
};

const COLUMNS: &str = "id, user_id, animal_id, status, message, response, responded_at, \
     is_verified, is_completed, requested_at, updated_at";

pub struct AdoptionRequestRepo;

impl AdoptionRequestRepo {
    /// File a new request. It always starts `pending`, unverified and
    /// incomplete.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdoptionRequest,
    ) -> Result<AdoptionRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO adoption_requests (user_id, animal_id, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(input.user_id)
            .bind(input.animal_id)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AdoptionRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adoption_requests WHERE id = $1");
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<AdoptionRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adoption_requests ORDER BY requested_at, id");
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .fetch_all(pool)
            .await
    }

    /// Requests filed by one user.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<AdoptionRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM adoption_requests WHERE user_id = $1 ORDER BY requested_at, id"
        );
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Requests received for one animal.
    pub async fn list_by_animal(
        pool: &PgPool,
        animal_id: DbId,
    ) -> Result<Vec<AdoptionRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM adoption_requests WHERE animal_id = $1 ORDER BY requested_at, id"
        );
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(animal_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &PatchAdoptionRequest,
    ) -> Result<Option<AdoptionRequest>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(mut request) = Self::find_for_update(&mut tx, id).await? else {
            return Ok(None);
        };
        let now = super::transaction_now(&mut tx).await?;
        request.merge(patch, now);
        let request = Self::write(&mut tx, &request).await?;
        tx.commit().await?;
        Ok(Some(request))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM adoption_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<AdoptionRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adoption_requests WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn write(
        conn: &mut PgConnection,
        request: &AdoptionRequest,
    ) -> Result<AdoptionRequest, sqlx::Error> {
        let query = format!(
            "UPDATE adoption_requests SET
                status = $2,
                response = $3,
                responded_at = $4,
                is_verified = $5,
                is_completed = $6,
                updated_at = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdoptionRequest>(&query)
            .bind(request.id)
            .bind(&request.status)
            .bind(&request.response)
            .bind(request.responded_at)
            .bind(request.is_verified)
            .bind(request.is_completed)
            .bind(request.updated_at)
            .fetch_one(&mut *conn)
            .await
    }
}
