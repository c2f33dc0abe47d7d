//! Timestamp formatting for stored records

use chrono::Utc;

/// Layout used for stored creation timestamps (UTC)
pub const DB_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Current UTC time in the storage layout
pub fn now_db_string() -> String {
    Utc::now().format(DB_LAYOUT).to_string()
}
