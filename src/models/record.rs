use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One registration entry. `email` and `password` are required at the
/// boundary; `fullName` and any additional string fields are carried
/// through to the store as extra columns.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct Record {
    pub email: String,
    pub password: String,
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Record {
    /// Column names this record contributes, in header order: the required
    /// fields first, then `fullName` if present, then extension fields.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = vec!["email".to_string(), "password".to_string()];
        if self.full_name.is_some() {
            columns.push("fullName".to_string());
        }
        columns.extend(self.extra.keys().cloned());
        columns
    }

    /// Value for a column, or `None` if this record has no such field.
    pub fn value(&self, column: &str) -> Option<&str> {
        match column {
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            "fullName" => self.full_name.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        }
    }
}
