/// Gratitude message submission model
use chrono::{DateTime, Utc};
use chrono_tz::Asia::Tokyo;
use serde::{Deserialize, Serialize};

/// One form submission. Created per request from the HTTP body and turned
/// into a spreadsheet row; never persisted by this service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub from: String,
    pub from_member_id: String,
    pub to: String,
    pub to_member_ids: String,
    pub message: String,
}

impl Submission {
    /// Returns true when all user-facing fields are non-empty
    pub fn has_required_fields(&self) -> bool {
        !self.from.is_empty() && !self.to.is_empty() && !self.message.is_empty()
    }

    /// Converts the submission into the appended row: the five fields in
    /// submission order, followed by the submission timestamp in Asia/Tokyo
    /// local time
    pub fn into_row(self, submitted_at: DateTime<Utc>) -> Vec<String> {
        vec![
            self.from,
            self.from_member_id,
            self.to,
            self.to_member_ids,
            self.message,
            format_tokyo(submitted_at),
        ]
    }
}

/// Formats a UTC instant as an Asia/Tokyo local timestamp
pub fn format_tokyo(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Tokyo)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}
