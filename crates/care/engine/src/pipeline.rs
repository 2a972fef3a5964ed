//! End-to-end pass from furniture to groups and notification.

use crate::aggregator::TreatmentAggregator;
use crate::config::CareConfig;
use crate::notification::CareNotification;
use crate::resolver::{collect_material_identifiers, TreatmentResolver};
use crate::telemetry::{CareTelemetry, TracingTelemetry};
use care_storage::TreatmentStore;
use care_types::{CompletedOrder, FurnitureItem, TreatmentGroup};
use std::sync::Arc;

/// Resolver and aggregator wired to one store, config and telemetry sink.
///
/// Each call builds its own maps and sets, so one pipeline can serve
/// concurrent calls.
pub struct CarePipeline<S> {
    resolver: TreatmentResolver<S>,
    aggregator: TreatmentAggregator,
    config: CareConfig,
}

impl<S: TreatmentStore> CarePipeline<S> {
    pub fn new(store: S, config: CareConfig) -> Self {
        let telemetry = Arc::new(TracingTelemetry::new(&config.telemetry));
        Self::with_telemetry(store, config, telemetry)
    }

    pub fn with_telemetry(store: S, config: CareConfig, telemetry: Arc<dyn CareTelemetry>) -> Self {
        Self {
            resolver: TreatmentResolver::new(store).with_telemetry(telemetry.clone()),
            aggregator: TreatmentAggregator::new(config.fallback_label.clone())
                .with_telemetry(telemetry),
            config,
        }
    }

    pub fn config(&self) -> &CareConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        self.resolver.store()
    }

    /// Resolve and group `items`.
    pub async fn run(&self, items: &[FurnitureItem]) -> Vec<TreatmentGroup> {
        let materials = collect_material_identifiers(items);
        let resolution = self.resolver.resolve(&materials).await;
        self.aggregator.group(items, &resolution)
    }

    /// Validated furniture for `order`, labelled with the configured prefix.
    pub fn furniture_items(&self, order: &CompletedOrder) -> Vec<FurnitureItem> {
        order.furniture_items_with_prefix(&self.config.placeholder_prefix)
    }

    /// Build the care notification for a completed order.
    pub async fn notify(&self, order: &CompletedOrder) -> CareNotification {
        let items = self.furniture_items(order);
        let groups = self.run(&items).await;
        CareNotification::from_groups(order, &groups, &self.config.fallback_label)
    }
}
