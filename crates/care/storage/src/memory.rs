//! In-memory reference implementation of [`TreatmentStore`].
//!
//! Documents are kept raw and decoded on every read, so malformed data
//! surfaces the same way it would from a real document store. Enumeration
//! order is insertion order.

use crate::codec::{decode_documents, encode_record};
use crate::traits::TreatmentStore;
use crate::{StorageError, StorageResult};
use async_trait::async_trait;
use care_types::TreatmentRecord;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

/// In-memory treatment store.
pub struct InMemoryTreatmentStore {
    documents: RwLock<Vec<Value>>,
    available: AtomicBool,
    fetches: AtomicUsize,
}

impl Default for InMemoryTreatmentStore {
    fn default() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
            fetches: AtomicUsize::new(0),
        }
    }
}

impl InMemoryTreatmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from validated records, in order.
    pub fn with_records<I>(records: I) -> StorageResult<Self>
    where
        I: IntoIterator<Item = TreatmentRecord>,
    {
        let store = Self::new();
        for record in records {
            store.insert_record(&record)?;
        }
        Ok(store)
    }

    /// Append a raw document. It is not validated until read.
    pub fn insert_document(&self, document: Value) -> StorageResult<()> {
        let mut guard = self
            .documents
            .write()
            .map_err(|_| StorageError::Backend("treatment lock poisoned".to_string()))?;
        guard.push(document);
        Ok(())
    }

    pub fn insert_record(&self, record: &TreatmentRecord) -> StorageResult<()> {
        self.insert_document(encode_record(record)?)
    }

    /// Simulate the store going away (or coming back).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of `list_treatments` calls served so far, including failed ones.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TreatmentStore for InMemoryTreatmentStore {
    async fn list_treatments(&self) -> StorageResult<Vec<TreatmentRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.available.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory treatment store is offline".to_string(),
            ));
        }

        let guard = self
            .documents
            .read()
            .map_err(|_| StorageError::Backend("treatment lock poisoned".to_string()))?;
        decode_documents(guard.iter().cloned())
    }
}
