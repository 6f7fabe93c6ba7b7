pub mod file_store;
pub mod memory_store;

use crate::model::Round;
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::new(value.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::new(value.to_string())
    }
}

/// Durable home for rounds. Saves are last-write-wins.
#[async_trait]
pub trait RoundStore: Send + Sync {
    async fn load_round(&self, round_id: &str) -> Result<Round, StorageError>;
    async fn save_round(&self, round: &Round) -> Result<(), StorageError>;
    async fn list_rounds(&self) -> Result<Vec<Round>, StorageError>;
}
