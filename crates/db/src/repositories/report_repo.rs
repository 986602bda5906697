//! Repository for the `reports` table.

use petadopt_core::patch::Merge;
use petadopt_core::report::DEFAULT_REPORT_STATUS;
use petadopt_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::report::{CreateReport, PatchReport, Report};

const COLUMNS: &str = "id, title, report_type, description, image_url, status, address, city, \
     province, postal_code, country, latitude, longitude, is_verified, animal_name, \
     animal_gender, animal_breed, last_seen_at, user_id, type_key, size_key, created_at, updated_at";

pub struct ReportRepo;

impl ReportRepo {
    /// File a report. A missing status falls back to the default.
    pub async fn create(pool: &PgPool, input: &CreateReport) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports
                (title, report_type, description, image_url, status, address, city,
                 province, postal_code, country, latitude, longitude, animal_name,
                 animal_gender, animal_breed, last_seen_at, user_id, type_key, size_key)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                     $11, $12, $13, $14, $15, $16, $17, $18, $19)
             RETURNING {COLUMNS}"
        );
        let status = input.status.as_deref().unwrap_or(DEFAULT_REPORT_STATUS);
        sqlx::query_as::<_, Report>(&query)
            .bind(&input.title)
            .bind(&input.report_type)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(status)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.province)
            .bind(&input.postal_code)
            .bind(&input.country)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.animal_name)
            .bind(&input.animal_gender)
            .bind(&input.animal_breed)
            .bind(input.last_seen_at)
            .bind(input.user_id)
            .bind(&input.type_key)
            .bind(&input.size_key)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports ORDER BY created_at, id");
        sqlx::query_as::<_, Report>(&query).fetch_all(pool).await
    }

    /// Reports filed by one user.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Report>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM reports WHERE user_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Report>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &PatchReport,
    ) -> Result<Option<Report>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(mut report) = Self::find_for_update(&mut tx, id).await? else {
            return Ok(None);
        };
        let now = super::transaction_now(&mut tx).await?;
        report.merge(patch, now);
        let report = Self::write(&mut tx, &report).await?;
        tx.commit().await?;
        Ok(Some(report))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_for_update(conn: &mut PgConnection, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn write(conn: &mut PgConnection, report: &Report) -> Result<Report, sqlx::Error> {
        let query = format!(
            "UPDATE reports SET
                title = $2,
                report_type = $3,
                description = $4,
                image_url = $5,
                status = $6,
                address = $7,
                city = $8,
                province = $9,
                postal_code = $10,
                country = $11,
                latitude = $12,
                longitude = $13,
                is_verified = $14,
                animal_name = $15,
                animal_gender = $16,
                animal_breed = $17,
                last_seen_at = $18,
                type_key = $19,
                size_key = $20,
                updated_at = $21
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(report.id)
            .bind(&report.title)
            .bind(&report.report_type)
            .bind(&report.description)
            .bind(&report.image_url)
            .bind(&report.status)
            .bind(&report.address)
            .bind(&report.city)
            .bind(&report.province)
            .bind(&report.postal_code)
            .bind(&report.country)
            .bind(report.latitude)
            .bind(report.longitude)
            .bind(report.is_verified)
            .bind(&report.animal_name)
            .bind(&report.animal_gender)
            .bind(&report.animal_breed)
            .bind(report.last_seen_at)
            .bind(&report.type_key)
            .bind(&report.size_key)
            .bind(report.updated_at)
            .fetch_one(&mut *conn)
            .await
    }
}
