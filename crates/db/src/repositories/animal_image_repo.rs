//! Repository for the `animal_images` table.

use petadopt_core::patch::Merge;
use petadopt_core::types::{DbId, ImageId};
use sqlx::{PgConnection, PgPool};

use crate::models::animal_image::{AnimalImage, CreateAnimalImage, PatchAnimalImage};

const COLUMNS: &str =
    "id, animal_id, url, alt_text, description, is_main, is_verified, uploaded_at";

pub struct AnimalImageRepo;

impl AnimalImageRepo {
    /// Attach an image to an animal. `is_main` defaults to `false`.
    pub async fn create(pool: &PgPool, input: &CreateAnimalImage) -> Result<AnimalImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO animal_images (animal_id, url, alt_text, description, is_main)
             VALUES ($1, $2, $3, $4, COALESCE($5, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnimalImage>(&query)
            .bind(input.animal_id)
            .bind(&input.url)
            .bind(&input.alt_text)
            .bind(&input.description)
            .bind(input.is_main)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: ImageId) -> Result<Option<AnimalImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animal_images WHERE id = $1");
        sqlx::query_as::<_, AnimalImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<AnimalImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animal_images ORDER BY id");
        sqlx::query_as::<_, AnimalImage>(&query).fetch_all(pool).await
    }

    /// Images of one animal, main image first.
    pub async fn list_by_animal(pool: &PgPool, animal_id: DbId) -> Result<Vec<AnimalImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM animal_images
             WHERE animal_id = $1
             ORDER BY is_main DESC, id"
        );
        sqlx::query_as::<_, AnimalImage>(&query)
            .bind(animal_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: ImageId,
        patch: &PatchAnimalImage,
    ) -> Result<Option<AnimalImage>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(mut image) = Self::find_for_update(&mut tx, id).await? else {
            return Ok(None);
        };
        let now = super::transaction_now(&mut tx).await?;
        image.merge(patch, now);
        let image = Self::write(&mut tx, &image).await?;
        tx.commit().await?;
        Ok(Some(image))
    }

    pub async fn delete(pool: &PgPool, id: ImageId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animal_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_for_update(
        conn: &mut PgConnection,
        id: ImageId,
    ) -> Result<Option<AnimalImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animal_images WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, AnimalImage>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn write(conn: &mut PgConnection, image: &AnimalImage) -> Result<AnimalImage, sqlx::Error> {
        let query = format!(
            "UPDATE animal_images SET
                url = $2,
                alt_text = $3,
                description = $4,
                is_main = $5,
                is_verified = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnimalImage>(&query)
            .bind(image.id)
            .bind(&image.url)
            .bind(&image.alt_text)
            .bind(&image.description)
            .bind(image.is_main)
            .bind(image.is_verified)
            .fetch_one(&mut *conn)
            .await
    }
}
