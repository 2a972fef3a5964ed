//! Material identifier to treatment resolution.

use crate::telemetry::{CareEvent, CareTelemetry, TracingTelemetry};
use care_storage::TreatmentStore;
use care_types::{FurnitureItem, Resolution};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Distinct, non-empty material identifiers carried by `items`.
pub fn collect_material_identifiers(items: &[FurnitureItem]) -> BTreeSet<String> {
    items
        .iter()
        .filter_map(FurnitureItem::material_identifier)
        .map(str::to_string)
        .collect()
}

/// Resolves material identifiers against a [`TreatmentStore`].
///
/// One store read per call, no retries. A failed read degrades to an
/// unavailable (empty) [`Resolution`] and is reported as
/// [`CareEvent::LookupUnavailable`].
pub struct TreatmentResolver<S> {
    store: S,
    telemetry: Arc<dyn CareTelemetry>,
}

impl<S: TreatmentStore> TreatmentResolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            telemetry: Arc::new(TracingTelemetry::default()),
        }
    }

    pub fn with_telemetry(mut self, telemetry: Arc<dyn CareTelemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Map each identifier to the treatment that claims it.
    ///
    /// Every identifier in `material_identifiers` is a key of the result
    /// unless the store was unreachable. When several records claim the same
    /// identifier the last one in store order wins.
    pub async fn resolve(&self, material_identifiers: &BTreeSet<String>) -> Resolution {
        if material_identifiers.is_empty() {
            self.telemetry.record(CareEvent::LookupSkipped);
            return Resolution::new();
        }

        let records = match self.store.list_treatments().await {
            Ok(records) => records,
            Err(e) => {
                self.telemetry.record(CareEvent::LookupUnavailable {
                    reason: e.to_string(),
                });
                return Resolution::unavailable();
            }
        };

        let mut resolution = Resolution::new();
        for material in material_identifiers {
            resolution.insert(material.as_str(), None);
        }

        for record in &records {
            for material in record.material_identifiers() {
                if !material_identifiers.contains(material) {
                    continue;
                }
                if let Some(previous) = resolution.insert(material.as_str(), Some(record.resolved()))
                {
                    self.telemetry.record(CareEvent::AmbiguousMaterial {
                        material: material.clone(),
                        previous: previous.treatment_kind,
                        winner: record.treatment_kind().to_string(),
                    });
                }
            }
        }

        self.telemetry.record(CareEvent::LookupCompleted {
            requested: material_identifiers.len(),
            resolved: resolution.resolved_count(),
            records: records.len(),
        });
        resolution
    }
}
