use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{RoundStore, StorageError};
use crate::model::Round;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct StoredRound {
    saved_at: DateTime<Utc>,
    round: Round,
}

/// One pretty-printed json file per round, named after the round id.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, round_id: &str) -> Result<PathBuf, StorageError> {
        if round_id.is_empty()
            || !round_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(StorageError::new(format!(
                "round id '{round_id}' cannot be used as a file name"
            )));
        }
        Ok(self.dir.join(format!("{round_id}.json")))
    }

    async fn read_stored(path: &Path) -> Result<StoredRound, StorageError> {
        let contents = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[async_trait]
impl RoundStore for JsonFileStore {
    async fn load_round(&self, round_id: &str) -> Result<Round, StorageError> {
        let path = self.path_for(round_id)?;
        Ok(Self::read_stored(&path).await?.round)
    }

    async fn save_round(&self, round: &Round) -> Result<(), StorageError> {
        let path = self.path_for(&round.id)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        let stored = StoredRound {
            saved_at: Utc::now(),
            round: round.clone(),
        };
        let json = serde_json::to_string_pretty(&stored)?;
        // write then rename so a reader never sees half a file
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;
        log::info!("saved round {} to {}", round.id, path.display());
        Ok(())
    }

    async fn list_rounds(&self) -> Result<Vec<Round>, StorageError> {
        let mut rounds = Vec::new();
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(rounds),
            Err(e) => return Err(e.into()),
        };
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            rounds.push(Self::read_stored(&path).await?.round);
        }
        rounds.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(rounds)
    }
}
