use std::path::Path;

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::document::Document;

/// Memory-maps a normalized document file and decodes it.
pub struct DocumentLoader {
  file: AsyncMmapFile,
}

impl DocumentLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open document {}", path.display()))?;

    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<Document> {
    Self::parse_slice(self.file.as_slice())
  }

  /// Decodes and validates a document, reporting the JSON path of the first decoding error.
  pub fn parse_slice(bytes: &[u8]) -> anyhow::Result<Document> {
    let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
    let document: Document = serde_path_to_error::deserialize(deserializer)
      .map_err(|error| anyhow::anyhow!("invalid document at '{}': {}", error.path(), error.inner()))?;

    document.validate().context("document failed validation")?;
    Ok(document)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_slice_reports_error_path() {
    let error = DocumentLoader::parse_slice(br#"{ "nodes": [{ "kind": "array", "items": "x" }] }"#).unwrap_err();
    assert!(
      error.to_string().starts_with("invalid document at 'nodes"),
      "unexpected error: {error}"
    );
  }

  #[test]
  fn test_parse_slice_validates() {
    let error = DocumentLoader::parse_slice(br#"{ "nodes": [{ "kind": "array", "items": 4 }] }"#).unwrap_err();
    assert_eq!(error.to_string(), "document failed validation");
  }

  #[tokio::test]
  async fn test_open_and_parse_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("document.json");
    tokio::fs::write(&path, crate::fixtures::PETSTORE).await.unwrap();

    let document = DocumentLoader::open(&path).await.unwrap().parse().unwrap();
    assert!(!document.paths.is_empty());
  }
}
