use crate::store::RecordStore;
use serde::Deserialize;

/// Display name returned when a matched record has no `fullName` value.
const DEFAULT_DISPLAY_NAME: &str = "User";

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Expected authentication failures, translated to HTTP statuses at the
/// endpoint boundary.
#[derive(Debug, PartialEq, Eq)]
pub enum LoginError {
    /// Absent or empty `username`/`password` field.
    MissingCredentials,
    /// Data file missing, unreadable, or lacking required columns.
    Unavailable,
    /// Unknown user or wrong password. One variant for both so the client
    /// cannot tell them apart.
    InvalidCredentials,
}

/// Authenticates a login attempt against the record store.
///
/// Scans the `email` column for an exact, case-sensitive match against the
/// trimmed username and takes the first matching row (insertion order).
/// Duplicate emails are allowed in the store; the earliest registration wins.
/// The stored password is compared to the supplied one with plain string
/// equality. Credentials are kept in plaintext, a known defect of this
/// system, not something callers may rely on being hashed.
///
/// Returns the matched record's display name on success.
pub fn authenticate(store: &RecordStore, request: &LoginRequest) -> Result<String, LoginError> {
    let username_raw = request.username.as_deref().unwrap_or("");
    let password = request.password.as_deref().unwrap_or("");
    if username_raw.is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    let username = username_raw.trim();

    let table = store.load().ok_or(LoginError::Unavailable)?;

    // load() guarantees these columns exist.
    let email_index = table.column_index("email").ok_or(LoginError::Unavailable)?;
    let password_index = table
        .column_index("password")
        .ok_or(LoginError::Unavailable)?;

    let row = table
        .rows
        .iter()
        .find(|row| row.get(email_index).map(String::as_str) == Some(username))
        .ok_or(LoginError::InvalidCredentials)?;

    let stored_password = row.get(password_index).map(String::as_str).unwrap_or("");
    if stored_password != password {
        return Err(LoginError::InvalidCredentials);
    }

    let full_name = table
        .column_index("fullName")
        .and_then(|index| row.get(index))
        .filter(|name| !name.is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

    log::info!("✅ User {} logged in successfully", username);
    Ok(full_name)
}
