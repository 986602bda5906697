//! Repository layer.
//!
//! Each repository provides async CRUD methods that accept `&PgPool` as the
//! first argument. Updates run as a single transaction: the row is locked
//! with `SELECT ... FOR UPDATE`, the patch is merged in memory via
//! [`Merge`](petadopt_core::patch::Merge) using the transaction's `now()`,
//! and the full row is written back.

use petadopt_core::types::Timestamp;
use sqlx::PgConnection;

pub mod adoption_request_repo;
pub mod animal_image_repo;
pub mod animal_repo;
pub mod facility_repo;
pub mod reference_repo;
pub mod report_repo;
pub mod user_repo;

pub use adoption_request_repo::AdoptionRequestRepo;
pub use animal_image_repo::AnimalImageRepo;
pub use animal_repo::AnimalRepo;
pub use facility_repo::FacilityRepo;
pub use reference_repo::{AnimalSizeRepo, AnimalTypeRepo};
pub use report_repo::ReportRepo;
pub use user_repo::UserRepo;

/// Read the transaction timestamp so `updated_at` shares the database clock
/// with the `NOW()` column defaults used on insert.
pub(crate) async fn transaction_now(conn: &mut PgConnection) -> Result<Timestamp, sqlx::Error> {
    sqlx::query_scalar("SELECT now()").fetch_one(&mut *conn).await
}

/// Build a case-insensitive substring pattern for `ILIKE`, escaping the
/// wildcard characters in the user-supplied term.
pub(crate) fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
