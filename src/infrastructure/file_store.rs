use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::errors::DomainError;
use crate::domain::ports::BlobStore;

/// File-backed blob store: one `<key>.json` per key under the data directory.
///
/// Writes land in a `.tmp` sibling first and are published with a rename, so
/// a reader never observes a torn document.
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    /// Open (creating if needed) the data directory.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(Self { root })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        match fs::read(self.blob_path(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(DomainError::Storage(err.to_string())),
        }
    }

    async fn set(&self, key: &str, bytes: Vec<u8>) -> Result<(), DomainError> {
        let tmp = self.root.join(format!("{key}.json.tmp"));
        write_and_sync(&tmp, &bytes).await?;
        fs::rename(&tmp, self.blob_path(key))
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))
    }
}

async fn write_and_sync(path: &Path, bytes: &[u8]) -> Result<(), DomainError> {
    let mut file = fs::File::create(path)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;
    file.write_all(bytes)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;
    file.sync_all()
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::open(dir.path()).await.unwrap();
        assert_eq!(store.get("billingLists").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::open(dir.path()).await.unwrap();

        store.set("billingLists", b"[]".to_vec()).await.unwrap();
        assert_eq!(
            store.get("billingLists").await.unwrap(),
            Some(b"[]".to_vec())
        );
    }

    #[tokio::test]
    async fn set_replaces_the_previous_document_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::open(dir.path()).await.unwrap();

        store.set("billingLists", b"old".to_vec()).await.unwrap();
        store.set("billingLists", b"new".to_vec()).await.unwrap();

        assert_eq!(
            store.get("billingLists").await.unwrap(),
            Some(b"new".to_vec())
        );
        assert!(!dir.path().join("billingLists.json.tmp").exists());
    }
}
