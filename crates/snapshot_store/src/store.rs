use std::io::ErrorKind;
use std::path::PathBuf;

use availability::Snapshot;
use tokio::fs;
use tracing::{debug, warn};

/// Custom error type for snapshot persistence
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Filesystem failure while writing the snapshot
    #[error("Snapshot write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be serialized
    #[error("Snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persists the between-poll snapshot as one flat JSON file mapping each
/// site to its short-form available dates.
///
/// Loading is deliberately forgiving: a missing, unreadable, or corrupt
/// file means "no prior snapshot", because the next poll rebuilds the
/// state anyway and a dead poller helps nobody. Saving reports its errors.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the last-persisted snapshot, or an empty one if there is none
    /// or it cannot be read. Failures are logged, never returned.
    pub async fn load(&self) -> Snapshot {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no previous snapshot");
                return Snapshot::new();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "could not read previous snapshot");
                return Snapshot::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "could not parse previous snapshot");
                Snapshot::new()
            }
        }
    }

    /// Overwrites the stored snapshot with the current one.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(snapshot)?;
        fs::write(&self.path, bytes).await?;
        debug!(path = %self.path.display(), sites = snapshot.len(), "snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use availability::SiteDate;
    use tempfile::tempdir;

    use super::*;

    fn sample_snapshot() -> Snapshot {
        let dates: Vec<SiteDate> = ["08/22", "08/23"]
            .iter()
            .map(|s| s.parse().expect("test date"))
            .collect();
        Snapshot::from([("001".to_string(), dates)])
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path().join("available.json"));
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path().join("available.json"));

        store.save(&sample_snapshot()).await.expect("save");
        assert_eq!(store.load().await, sample_snapshot());
    }

    #[tokio::test]
    async fn durable_form_is_flat_json_of_short_dates() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("available.json");
        let store = SnapshotStore::new(&path);

        store.save(&sample_snapshot()).await.expect("save");
        let raw = fs::read_to_string(&path).await.expect("read back");
        assert_eq!(raw, r#"{"001":["08/22","08/23"]}"#);
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("available.json");
        fs::write(&path, b"{not json").await.expect("write");

        let store = SnapshotStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn wrong_shape_loads_as_empty() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("available.json");
        fs::write(&path, br#"{"001": "08/22"}"#).await.expect("write");

        let store = SnapshotStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn legacy_unpadded_dates_load_normalized() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("available.json");
        fs::write(&path, br#"{"001": ["8/22", "8/23"]}"#)
            .await
            .expect("write");

        let store = SnapshotStore::new(&path);
        assert_eq!(store.load().await, sample_snapshot());
    }
}
