//! Read-only lookup tables (`animal_types`, `animal_sizes`).

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `animal_types` lookup table (e.g. `dog`, `cat`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnimalType {
    pub key: String,
    pub label: String,
}

/// A row from the `animal_sizes` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnimalSize {
    pub key: String,
    pub label: String,
    pub description: String,
}
