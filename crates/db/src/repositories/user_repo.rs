//! Repository for the `users` table.

use petadopt_core::patch::Merge;
use petadopt_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::user::{CreateUser, PatchUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, role, is_role_verified, first_name, last_name, phone_number, \
     address, birth_date, profile_picture, is_verified, external_auth_uid, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Both verification flags start `false` (column defaults).
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users
                (email, role, first_name, last_name, phone_number, address,
                 birth_date, profile_picture, external_auth_uid)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.phone_number)
            .bind(&input.address)
            .bind(input.birth_date)
            .bind(&input.profile_picture)
            .bind(&input.external_auth_uid)
            .fetch_one(pool)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the local user linked to an identity-provider subject.
    pub async fn find_by_external_auth_uid(
        pool: &PgPool,
        uid: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE external_auth_uid = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    /// List all users in registration order.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at, id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Apply a patch to a user.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &PatchUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(mut user) = Self::find_for_update(&mut tx, id).await? else {
            return Ok(None);
        };
        let now = super::transaction_now(&mut tx).await?;
        user.merge(patch, now);
        let user = Self::write(&mut tx, &user).await?;
        tx.commit().await?;
        Ok(Some(user))
    }

    /// Delete a user by ID. Returns `true` if a row was removed.
    ///
    /// Adoption requests cascade; owned facilities, animals and reports are
    /// detached (see the schema's `ON DELETE` clauses).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_for_update(conn: &mut PgConnection, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn write(conn: &mut PgConnection, user: &User) -> Result<User, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                role = $2,
                is_role_verified = $3,
                first_name = $4,
                last_name = $5,
                phone_number = $6,
                address = $7,
                birth_date = $8,
                profile_picture = $9,
                is_verified = $10
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user.id)
            .bind(&user.role)
            .bind(user.is_role_verified)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.phone_number)
            .bind(&user.address)
            .bind(user.birth_date)
            .bind(&user.profile_picture)
            .bind(user.is_verified)
            .fetch_one(&mut *conn)
            .await
    }
}
