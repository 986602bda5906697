//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` patch DTO of [`Patch`](petadopt_core::patch::Patch) fields
//! - The entity's [`Merge`](petadopt_core::patch::Merge) implementation

pub mod adoption_request;
pub mod animal;
pub mod animal_image;
pub mod facility;
pub mod reference;
pub mod report;
pub mod user;
