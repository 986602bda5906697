//! Repository for the `animals` table.

use petadopt_core::patch::Merge;
use petadopt_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::animal::{Animal, CreateAnimal, PatchAnimal};

const COLUMNS: &str = "id, name, age, gender, breed, description, status, location, \
     latitude, longitude, type_key, size_key, user_id, shelter_id, foster_home_id, \
     is_verified, posted_at, updated_at";

pub struct AnimalRepo;

impl AnimalRepo {
    /// Insert a new listing. `posted_at` and `updated_at` are set by the
    /// database; `is_verified` starts `false`.
    pub async fn create(pool: &PgPool, input: &CreateAnimal) -> Result<Animal, sqlx::Error> {
        let query = format!(
            "INSERT INTO animals
                (name, age, gender, breed, description, status, location,
                 latitude, longitude, type_key, size_key, user_id, shelter_id, foster_home_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.gender)
            .bind(&input.breed)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.location)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.type_key)
            .bind(&input.size_key)
            .bind(input.user_id)
            .bind(input.shelter_id)
            .bind(input.foster_home_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE id = $1");
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all animals, oldest listing first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals ORDER BY posted_at, id");
        sqlx::query_as::<_, Animal>(&query).fetch_all(pool).await
    }

    /// List animals with the given adoption status.
    pub async fn list_by_status(pool: &PgPool, status: &str) -> Result<Vec<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE status = $1 ORDER BY posted_at, id");
        sqlx::query_as::<_, Animal>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Animals posted by a private user.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Animal>, sqlx::Error> {
        Self::list_where(pool, "user_id", user_id).await
    }

    pub async fn list_by_shelter(pool: &PgPool, shelter_id: DbId) -> Result<Vec<Animal>, sqlx::Error> {
        Self::list_where(pool, "shelter_id", shelter_id).await
    }

    pub async fn list_by_foster_home(
        pool: &PgPool,
        foster_home_id: DbId,
    ) -> Result<Vec<Animal>, sqlx::Error> {
        Self::list_where(pool, "foster_home_id", foster_home_id).await
    }

    /// Apply a patch. Returns `None` if the animal does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &PatchAnimal,
    ) -> Result<Option<Animal>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(mut animal) = Self::find_for_update(&mut tx, id).await? else {
            return Ok(None);
        };
        let now = super::transaction_now(&mut tx).await?;
        animal.merge(patch, now);
        let animal = Self::write(&mut tx, &animal).await?;
        tx.commit().await?;
        Ok(Some(animal))
    }

    /// Delete an animal. Its images and adoption requests cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `column` is always one of the fixed foreign-key names above.
    async fn list_where(
        pool: &PgPool,
        column: &'static str,
        id: DbId,
    ) -> Result<Vec<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE {column} = $1 ORDER BY posted_at, id");
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .fetch_all(pool)
            .await
    }

    async fn find_for_update(conn: &mut PgConnection, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn write(conn: &mut PgConnection, animal: &Animal) -> Result<Animal, sqlx::Error> {
        let query = format!(
            "UPDATE animals SET
                name = $2,
                age = $3,
                gender = $4,
                breed = $5,
                description = $6,
                status = $7,
                location = $8,
                latitude = $9,
                longitude = $10,
                type_key = $11,
                size_key = $12,
                user_id = $13,
                shelter_id = $14,
                foster_home_id = $15,
                is_verified = $16,
                updated_at = $17
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(animal.id)
            .bind(&animal.name)
            .bind(animal.age)
            .bind(&animal.gender)
            .bind(&animal.breed)
            .bind(&animal.description)
            .bind(&animal.status)
            .bind(&animal.location)
            .bind(animal.latitude)
            .bind(animal.longitude)
            .bind(&animal.type_key)
            .bind(&animal.size_key)
            .bind(animal.user_id)
            .bind(animal.shelter_id)
            .bind(animal.foster_home_id)
            .bind(animal.is_verified)
            .bind(animal.updated_at)
            .fetch_one(&mut *conn)
            .await
    }
}
