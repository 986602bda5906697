//! Domain building blocks for the pet-adoption platform: identifier and
//! timestamp types, the error taxonomy, the tri-state patch/merge contract,
//! and the fixed vocabularies enforced at the API boundary.

pub mod adoption;
pub mod animal;
pub mod error;
pub mod patch;
pub mod report;
pub mod roles;
pub mod types;
pub mod validation;
