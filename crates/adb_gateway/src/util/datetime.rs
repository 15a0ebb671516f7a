//! Date and time helpers

use chrono::Local;

/// Current local time as `YYYY-MM-DD HH:MM:SS`
pub fn now_time_str() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
