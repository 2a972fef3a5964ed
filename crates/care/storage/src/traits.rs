use crate::StorageResult;
use async_trait::async_trait;
use care_types::TreatmentRecord;
use std::sync::Arc;

/// Read-only access to treatment definitions.
#[async_trait]
pub trait TreatmentStore: Send + Sync {
    /// Every treatment record, in the store's natural enumeration order.
    ///
    /// A payload that cannot be decoded fails as a whole with
    /// [`StorageError::Serialization`](crate::StorageError::Serialization).
    async fn list_treatments(&self) -> StorageResult<Vec<TreatmentRecord>>;
}

#[async_trait]
impl<T> TreatmentStore for Arc<T>
where
    T: TreatmentStore + ?Sized,
{
    async fn list_treatments(&self) -> StorageResult<Vec<TreatmentRecord>> {
        (**self).list_treatments().await
    }
}
