/// Primary key of every UUID-keyed entity (users, shelters, animals, ...).
pub type DbId = uuid::Uuid;

/// Animal images are keyed by a sequential `SERIAL` integer instead.
pub type ImageId = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
