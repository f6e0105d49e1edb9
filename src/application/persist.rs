//! Write path between the in-memory collection and the blob store.
//!
//! Mutations never wait on storage. Every mutation enqueues the full
//! serialized document; a single background task applies writes strictly in
//! enqueue order, so a slow write can never overwrite a newer document with a
//! stale one. Adapter failures are logged and not surfaced to the mutating
//! caller.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::ports::BlobStore;

/// Storage key of the serialized billing collection.
pub const STORAGE_KEY: &str = "billingLists";

pub(crate) struct PersistQueue {
    tx: mpsc::UnboundedSender<Vec<u8>>,
    writer: JoinHandle<()>,
}

impl PersistQueue {
    pub(crate) fn spawn(store: Arc<dyn BlobStore>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Vec<u8>>();
        let writer = tokio::spawn(async move {
            while let Some(bytes) = rx.recv().await {
                if let Err(err) = store.set(STORAGE_KEY, bytes).await {
                    log::warn!("failed to persist billing document: {err}");
                }
            }
        });
        Self { tx, writer }
    }

    /// Hand a serialized document to the writer. Never blocks.
    pub(crate) fn enqueue(&self, bytes: Vec<u8>) {
        if self.tx.send(bytes).is_err() {
            log::warn!("persist queue closed; dropping document write");
        }
    }

    /// Drain all pending writes and stop the writer task.
    pub(crate) async fn close(self) {
        drop(self.tx);
        if let Err(err) = self.writer.await {
            log::warn!("persist writer task failed: {err}");
        }
    }
}
