use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The feelings offered by the submission form, in display order.
///
/// Stored entries carry their feeling as plain text; the store accepts any
/// non-empty value, so this list only drives the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feeling {
    Bittersweet,
    Regret,
    Epic,
    Melancholy,
    Nostalgic,
    Hopeful,
    Curious,
    Wistful,
    Ethereal,
    Haunting,
}

impl Feeling {
    pub const ALL: [Feeling; 10] = [
        Feeling::Bittersweet,
        Feeling::Regret,
        Feeling::Epic,
        Feeling::Melancholy,
        Feeling::Nostalgic,
        Feeling::Hopeful,
        Feeling::Curious,
        Feeling::Wistful,
        Feeling::Ethereal,
        Feeling::Haunting,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Feeling::Bittersweet => "bittersweet",
            Feeling::Regret => "regret",
            Feeling::Epic => "epic",
            Feeling::Melancholy => "melancholy",
            Feeling::Nostalgic => "nostalgic",
            Feeling::Hopeful => "hopeful",
            Feeling::Curious => "curious",
            Feeling::Wistful => "wistful",
            Feeling::Ethereal => "ethereal",
            Feeling::Haunting => "haunting",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: i64,
    pub content: String,
    pub feeling: String,
    /// RFC 3339, UTC, microsecond precision. Fixed width so that text order
    /// matches chronological order in SQL.
    pub timestamp: String,
}

impl Entry {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp.parse().ok()
    }
}

/// Render an instant in the form stored in `entries.timestamp`.
pub fn timestamp_text(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
