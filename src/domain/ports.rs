use std::path::PathBuf;

use async_trait::async_trait;

use super::errors::DomainError;

/// Opaque device-local key-value storage.
///
/// The document store is the only caller and uses a single fixed key; the
/// adapter never interprets the bytes it is handed.
#[async_trait]
pub trait BlobStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError>;
    async fn set(&self, key: &str, bytes: Vec<u8>) -> Result<(), DomainError>;
}

/// External rasterizer turning an invoice HTML document into a PDF file.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Render `html` and return the path of the generated PDF.
    ///
    /// `file_stem` names the output without its extension.
    async fn render(&self, html: &str, file_stem: &str) -> Result<PathBuf, DomainError>;
}
