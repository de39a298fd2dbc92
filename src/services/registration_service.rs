use crate::models::Record;
use crate::store::RecordStore;
use crate::utils::StoreError;

/// Persists one registration record. The record goes to the store verbatim,
/// password included; see the plaintext-storage note on
/// [`crate::services::auth_service::authenticate`].
pub fn save_registration(store: &RecordStore, record: &Record) -> Result<(), StoreError> {
    store.append(record)?;
    log::info!(
        "💾 Registration appended to {} for: {}",
        store.path().display(),
        record.email
    );
    Ok(())
}
