//! File-backed treatment store reading an export of the treatment collection.
//!
//! Accepts either a JSON array of documents or one document per line.

use crate::codec::decode_documents;
use crate::traits::TreatmentStore;
use crate::{StorageError, StorageResult};
use async_trait::async_trait;
use care_types::TreatmentRecord;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Treatment store over a JSON or JSON-lines export.
#[derive(Debug, Clone)]
pub struct JsonFileTreatmentStore {
    path: PathBuf,
}

impl JsonFileTreatmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TreatmentStore for JsonFileTreatmentStore {
    async fn list_treatments(&self) -> StorageResult<Vec<TreatmentRecord>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::Unavailable(format!(
                    "treatment export {} not found",
                    self.path.display()
                )));
            }
            Err(e) => return Err(StorageError::Io(e)),
        };

        let documents = parse_documents(&contents)?;
        tracing::debug!(
            path = %self.path.display(),
            documents = documents.len(),
            "read treatment export"
        );
        decode_documents(documents)
    }
}

fn parse_documents(contents: &str) -> StorageResult<Vec<Value>> {
    let trimmed = contents.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .map_err(|e| StorageError::Serialization(e.to_string()));
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| {
                StorageError::Serialization(format!("line {}: {}", index + 1, e))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_json_array_export() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("treatments.json");
        std::fs::write(
            &path,
            r#"[
                {"treatmentKind": "Leather Care", "urlPageLink": "https://example.com/l", "materialCompanies": ["VendorA"]},
                {"treatmentKind": "Fabric Care", "materialCompanies": ["VendorB"]}
            ]"#,
        )
        .unwrap();

        let records = JsonFileTreatmentStore::new(&path).list_treatments().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].reference_link(), Some("https://example.com/l"));
    }

    #[tokio::test]
    async fn reads_json_lines_export() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("treatments.jsonl");
        std::fs::write(
            &path,
            "{\"treatmentKind\": \"Leather Care\", \"materialCompanies\": [\"VendorA\"]}\n\n{\"treatmentKind\": \"Wood Care\"}\n",
        )
        .unwrap();

        let records = JsonFileTreatmentStore::new(&path).list_treatments().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].treatment_kind(), "Wood Care");
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonFileTreatmentStore::new(temp_dir.path().join("absent.json"));
        assert!(matches!(
            store.list_treatments().await,
            Err(StorageError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn broken_line_is_a_serialization_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("treatments.jsonl");
        std::fs::write(&path, "{\"treatmentKind\": \"Leather Care\"}\n{not json\n").unwrap();

        let result = JsonFileTreatmentStore::new(&path).list_treatments().await;
        match result {
            Err(StorageError::Serialization(message)) => assert!(message.starts_with("line 2")),
            other => panic!("expected serialization error, got {:?}", other.map(|r| r.len())),
        }
    }
}
