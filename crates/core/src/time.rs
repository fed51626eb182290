use chrono::{DateTime, Utc};

/// Formats an account creation timestamp as `Member since <Month> <Year>`.
///
/// Month names are English and the date is taken in UTC.
#[must_use]
pub fn format_member_since(created_at: DateTime<Utc>) -> String {
    format!("Member since {}", created_at.format("%B %Y"))
}

/// Deterministic timestamp for tests and examples (2024-01-15T00:00:00Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_705_276_800;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}
