use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{RoundStore, StorageError};
use crate::model::Round;

pub type RoundMap = Arc<RwLock<BTreeMap<String, Round>>>;

/// In-process store; can be switched to fail every save to exercise the
/// non-fatal persistence path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rounds: RoundMap,
    fail_saves: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            rounds: RoundMap::default(),
            fail_saves: true,
        }
    }

    pub async fn len(&self) -> usize {
        self.rounds.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rounds.read().await.is_empty()
    }
}

#[async_trait]
impl RoundStore for MemoryStore {
    async fn load_round(&self, round_id: &str) -> Result<Round, StorageError> {
        self.rounds
            .read()
            .await
            .get(round_id)
            .cloned()
            .ok_or_else(|| StorageError::new(format!("round {round_id} not found")))
    }

    async fn save_round(&self, round: &Round) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::new("store is unavailable"));
        }
        self.rounds
            .write()
            .await
            .insert(round.id.clone(), round.clone());
        Ok(())
    }

    async fn list_rounds(&self) -> Result<Vec<Round>, StorageError> {
        Ok(self.rounds.read().await.values().cloned().collect())
    }
}
