//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?name=` for facility name search.
#[derive(Debug, Deserialize)]
pub struct NameSearchParams {
    pub name: String,
}

/// Optional `?status=` filter on animal listings.
#[derive(Debug, Deserialize)]
pub struct StatusFilterParams {
    pub status: Option<String>,
}
