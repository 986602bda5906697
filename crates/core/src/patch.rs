//! Tri-state patch fields and the merge contract shared by every mutable entity.
//!
//! A JSON patch body distinguishes three cases per field:
//!
//! | JSON                | `Patch<T>`        | Effect on a NOT NULL column | Effect on a nullable column |
//! |---------------------|-------------------|-----------------------------|-----------------------------|
//! | field omitted       | `Patch::Absent`   | unchanged                   | unchanged                   |
//! | `"field": null`     | `Patch::Null`     | unchanged                   | cleared to `NULL`           |
//! | `"field": value`    | `Patch::Value(v)` | overwritten                 | overwritten                 |
//!
//! Patch DTOs put `#[serde(default)]` on the struct so omitted fields
//! deserialize to [`Patch::Absent`].

use serde::{Deserialize, Deserializer};

use crate::types::Timestamp;

/// A single field of a sparse update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The field was not present in the payload.
    Absent,
    /// The field was present and explicitly `null`.
    Null,
    /// The field was present with a value.
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Value(value)
    }
}

impl<T> Patch<T> {
    /// `true` unless the field was omitted.
    pub fn is_present(&self) -> bool {
        !matches!(self, Patch::Absent)
    }

    /// The supplied value, if any.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Clone> Patch<T> {
    /// Apply to a NOT NULL field: only a value overwrites.
    pub fn apply(&self, target: &mut T) {
        if let Patch::Value(v) = self {
            *target = v.clone();
        }
    }

    /// Apply to a nullable field: a value overwrites, `null` clears.
    pub fn apply_nullable(&self, target: &mut Option<T>) {
        match self {
            Patch::Absent => {}
            Patch::Null => *target = None,
            Patch::Value(v) => *target = Some(v.clone()),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

/// Applies a sparse patch to a stored entity.
///
/// Implementations overwrite exactly the fields present in `patch` and, when
/// the entity tracks an update timestamp, set it to `now`.
pub trait Merge<P> {
    fn merge(&mut self, patch: &P, now: Timestamp);
}
