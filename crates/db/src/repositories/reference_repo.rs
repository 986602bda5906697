//! Read-only access to the seeded lookup tables.

use sqlx::PgPool;

use crate::models::reference::{AnimalSize, AnimalType};

pub struct AnimalTypeRepo;

impl AnimalTypeRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<AnimalType>, sqlx::Error> {
        sqlx::query_as::<_, AnimalType>("SELECT key, label FROM animal_types ORDER BY key")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<AnimalType>, sqlx::Error> {
        sqlx::query_as::<_, AnimalType>("SELECT key, label FROM animal_types WHERE key = $1")
            .bind(key)
            .fetch_optional(pool)
            .await
    }
}

pub struct AnimalSizeRepo;

impl AnimalSizeRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<AnimalSize>, sqlx::Error> {
        sqlx::query_as::<_, AnimalSize>(
            "SELECT key, label, description FROM animal_sizes ORDER BY key",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<AnimalSize>, sqlx::Error> {
        sqlx::query_as::<_, AnimalSize>(
            "SELECT key, label, description FROM animal_sizes WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(pool)
        .await
    }
}
