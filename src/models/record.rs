use crate::models::ActivityKind;
use crate::store::FieldMap;
use serde::Serialize;

/// 1-based position of the activity code column in every sheet.
pub const CODE_COLUMN: usize = 2;

/// One stored prompt: a single row of a workbook sheet.
///
/// A record is immutable once appended; the only operations are append,
/// bulk read and whole-row deletion. Its row position is its only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptRecord {
    /// Creation time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    /// Teacher-chosen code students type to load the prompt
    pub activity_code: String,
    /// Prompt body, or the image subject for image-generation activities
    pub payload: String,
    /// Optional contact address, stored as given
    pub email: String,
    /// Optional lookup/deletion credential
    pub password: String,
}

impl PromptRecord {
    pub fn new(
        timestamp: String,
        activity_code: &str,
        payload: &str,
        email: &str,
        password: &str,
    ) -> Self {
        Self {
            timestamp,
            activity_code: activity_code.to_string(),
            payload: payload.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Cell values in append order: `[timestamp, code, payload, email, password]`
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.activity_code.clone(),
            self.payload.clone(),
            self.email.clone(),
            self.password.clone(),
        ]
    }

    /// Build a record from a header-keyed row returned by the store.
    /// Missing fields come back empty; the payload column name depends on
    /// the sheet's activity kind.
    pub fn from_fields(kind: ActivityKind, fields: &FieldMap) -> Self {
        let get = |name: &str| fields.get(name).cloned().unwrap_or_default();
        Self {
            timestamp: get("timestamp"),
            activity_code: get("activity_code"),
            payload: get(kind.payload_field()),
            email: get("email"),
            password: get("password"),
        }
    }
}
