use std::fmt;

// === BookmarkError ===

/// Errors related to bookmark store operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// A required field (title or url) is missing or blank.
    InvalidInput(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::InvalidInput(msg) => write!(f, "Invalid bookmark input: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === StorageError ===

/// Errors raised by the key-value store and the storage adapter.
#[derive(Debug)]
pub enum StorageError {
    /// The backing database failed.
    DatabaseError(String),
    /// A stored entry could not be encoded or decoded.
    SerializationError(String),
    /// The store refused the write (quota exceeded, storage disabled).
    WriteRejected(String),
    /// The persistence worker is no longer running.
    WorkerStopped,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
            StorageError::WriteRejected(key) => write!(f, "Storage write rejected: {}", key),
            StorageError::WorkerStopped => write!(f, "Persistence worker stopped"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::DatabaseError(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
