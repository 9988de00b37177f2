use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::utils::error::Result;

/// A parsed JSON object as it arrived on disk. Records stay generic until
/// they pass schema validation; only then are they bound to a typed model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    #[serde(flatten)]
    pub data: serde_json::Map<String, Value>,
}

impl Record {
    /// The record id as it should appear in defect messages.
    pub fn id_label(&self) -> String {
        match self.data.get("id") {
            None | Some(Value::Null) => "unknown".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Bind a schema-valid record to its typed model.
    pub fn bind<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.data.clone()))?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub top_up: i64,
    pub email_status: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub company_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub tokens: i64,
    pub active_status: bool,
    pub email_status: bool,
}

/// One schema violation recorded against one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Defect {
    MissingField {
        label: String,
        record_id: String,
        field: String,
    },
    InvalidType {
        label: String,
        record_id: String,
        field: String,
        actual: String,
        expected: String,
    },
    DuplicateId {
        name: String,
        id: i64,
    },
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::MissingField {
                label,
                record_id,
                field,
            } => write!(
                f,
                "Warning: {} (ID: {}) missing field '{}'.  Skipping...",
                label, record_id, field
            ),
            Defect::InvalidType {
                label,
                record_id,
                field,
                actual,
                expected,
            } => write!(
                f,
                "Warning: {} (ID: {}) field '{}' has invalid type '{}' (expected '{}').  Skipping...",
                label, record_id, field, actual, expected
            ),
            Defect::DuplicateId { name, id } => write!(
                f,
                "Warning: Company {} (ID: {}) is a duplicate ID.  Skipping...",
                name, id
            ),
        }
    }
}

/// Per-user top-up summary line data.
#[derive(Debug, Clone, PartialEq)]
pub struct UserTopUp {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub previous_balance: i64,
    pub new_balance: i64,
}

/// One report block: a company and the users it topped up.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySummary {
    pub company_id: i64,
    pub company_name: String,
    pub emailed: Vec<UserTopUp>,
    pub not_emailed: Vec<UserTopUp>,
    pub total_top_ups: i64,
}

/// Both input collections, as extracted.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub companies: Vec<Record>,
    pub users: Vec<Record>,
}

/// Everything the load step needs to write.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub summaries: Vec<CompanySummary>,
    pub invalid_companies: Vec<Record>,
    pub invalid_users: Vec<Record>,
}
