//! Durable client storage contract.

use crate::error::{ConsoleError, Result};

/// String key/value storage with local-storage semantics.
///
/// Values are opaque strings; callers own their serialization. A write
/// replaces the previous value for the key wholesale.
pub trait KeyValueStorage: Send + Sync {
    /// Reads a value. A missing key is `Ok(None)`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a value. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Validates a storage key.
///
/// Keys map onto file names, so only ASCII alphanumerics, `-`, `_` and `.` are
/// accepted, and a key may not start with `.`.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(ConsoleError::InvalidKey(key.to_string()))
    }
}
