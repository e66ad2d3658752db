/// Primary key type for every table (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// Timestamps are stored and compared in UTC throughout.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
