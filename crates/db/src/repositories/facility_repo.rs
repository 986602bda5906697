//! Repository for the `shelters` and `foster_homes` tables.
//!
//! The two tables share a schema, so a single repository parameterised by
//! table name serves both.

use petadopt_core::patch::Merge;
use petadopt_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::facility::{CreateFacility, Facility, PatchFacility};
use crate::repositories::contains_pattern;

const COLUMNS: &str = "id, name, address, description, capacity, current_capacity, \
     current_occupancy, website, phone_number, is_verified, user_id, created_at, updated_at";

/// CRUD and lookups for one facility table.
#[derive(Debug, Clone, Copy)]
pub struct FacilityRepo {
    table: &'static str,
}

impl FacilityRepo {
    pub const SHELTERS: FacilityRepo = FacilityRepo { table: "shelters" };
    pub const FOSTER_HOMES: FacilityRepo = FacilityRepo {
        table: "foster_homes",
    };

    /// Insert a new facility. Occupancy counters start at zero and the
    /// verification flag starts `false`.
    pub async fn create(self, pool: &PgPool, input: &CreateFacility) -> Result<Facility, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table}
                (name, address, description, capacity, website, phone_number, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}",
            table = self.table
        );
        sqlx::query_as::<_, Facility>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.description)
            .bind(input.capacity)
            .bind(&input.website)
            .bind(&input.phone_number)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(self, pool: &PgPool, id: DbId) -> Result<Option<Facility>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", self.table);
        sqlx::query_as::<_, Facility>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every facility in creation order.
    pub async fn list(self, pool: &PgPool) -> Result<Vec<Facility>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY created_at, id",
            self.table
        );
        sqlx::query_as::<_, Facility>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring match on the facility name.
    pub async fn search_by_name(self, pool: &PgPool, term: &str) -> Result<Vec<Facility>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE name ILIKE $1 ORDER BY name, id",
            self.table
        );
        sqlx::query_as::<_, Facility>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Facilities managed by the given user.
    pub async fn list_by_user(self, pool: &PgPool, user_id: DbId) -> Result<Vec<Facility>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE user_id = $1 ORDER BY created_at, id",
            self.table
        );
        sqlx::query_as::<_, Facility>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a patch. Returns `None` if the facility does not exist.
    pub async fn update(
        self,
        pool: &PgPool,
        id: DbId,
        patch: &PatchFacility,
    ) -> Result<Option<Facility>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(mut facility) = self.find_for_update(&mut tx, id).await? else {
            return Ok(None);
        };
        let now = super::transaction_now(&mut tx).await?;
        facility.merge(patch, now);
        let facility = self.write(&mut tx, &facility).await?;
        tx.commit().await?;
        Ok(Some(facility))
    }

    /// Delete a facility. Animals housed there are detached, not removed.
    pub async fn delete(self, pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", self.table);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_for_update(
        self,
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Facility>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE id = $1 FOR UPDATE",
            self.table
        );
        sqlx::query_as::<_, Facility>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn write(self, conn: &mut PgConnection, facility: &Facility) -> Result<Facility, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET
                name = $2,
                address = $3,
                description = $4,
                capacity = $5,
                website = $6,
                phone_number = $7,
                user_id = $8,
                is_verified = $9,
                updated_at = $10
             WHERE id = $1
             RETURNING {COLUMNS}",
            table = self.table
        );
        sqlx::query_as::<_, Facility>(&query)
            .bind(facility.id)
            .bind(&facility.name)
            .bind(&facility.address)
            .bind(&facility.description)
            .bind(facility.capacity)
            .bind(&facility.website)
            .bind(&facility.phone_number)
            .bind(facility.user_id)
            .bind(facility.is_verified)
            .bind(facility.updated_at)
            .fetch_one(&mut *conn)
            .await
    }
}
