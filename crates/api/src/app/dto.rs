use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// RFC 3339 timestamp; defaults to now.
    pub requested_date: Option<String>,
}

impl CatalogQuery {
    pub fn requested_date_or(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, chrono::ParseError> {
        match self.requested_date.as_deref() {
            Some(raw) => Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc)),
            None => Ok(now),
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub key: String,
    pub value: String,
}
