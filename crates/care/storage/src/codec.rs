use crate::{StorageError, StorageResult};
use care_types::{TreatmentDocument, TreatmentRecord};
use serde_json::Value;

/// Decode raw documents in order. One bad document spoils the whole payload.
pub(crate) fn decode_documents<I>(documents: I) -> StorageResult<Vec<TreatmentRecord>>
where
    I: IntoIterator<Item = Value>,
{
    documents
        .into_iter()
        .enumerate()
        .map(|(position, document)| {
            TreatmentRecord::from_json(document).map_err(|e| {
                StorageError::Serialization(format!("treatment document {}: {}", position, e))
            })
        })
        .collect()
}

pub(crate) fn encode_record(record: &TreatmentRecord) -> StorageResult<Value> {
    let document = TreatmentDocument {
        treatment_kind: record.treatment_kind().to_string(),
        reference_link: record.reference_link().map(str::to_string),
        material_identifiers: record.material_identifiers().to_vec(),
    };
    serde_json::to_value(document).map_err(|e| StorageError::Serialization(e.to_string()))
}
