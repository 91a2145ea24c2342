/// Database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
