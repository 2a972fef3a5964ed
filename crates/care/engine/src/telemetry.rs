//! Telemetry for care-instruction resolution
//!
//! The resolver and aggregator report through an injected [`CareTelemetry`]
//! instead of logging directly, so callers decide where diagnostics go.

use crate::config::TelemetryConfig;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Diagnostic events raised during one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CareEvent {
    /// No material identifiers were supplied, the store was not consulted.
    LookupSkipped,
    LookupCompleted {
        requested: usize,
        resolved: usize,
        records: usize,
    },
    /// The store could not be read. Nothing was resolved.
    LookupUnavailable { reason: String },
    /// A later treatment record overwrote an earlier claim on a material.
    AmbiguousMaterial {
        material: String,
        previous: String,
        winner: String,
    },
    GroupsBuilt {
        items: usize,
        excluded: usize,
        groups: usize,
        unresolved_items: usize,
    },
}

impl CareEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CareEvent::LookupSkipped => "lookup_skipped",
            CareEvent::LookupCompleted { .. } => "lookup_completed",
            CareEvent::LookupUnavailable { .. } => "lookup_unavailable",
            CareEvent::AmbiguousMaterial { .. } => "ambiguous_material",
            CareEvent::GroupsBuilt { .. } => "groups_built",
        }
    }
}

/// Sink for [`CareEvent`]s.
pub trait CareTelemetry: Send + Sync {
    fn record(&self, event: CareEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl CareTelemetry for NoopTelemetry {
    fn record(&self, _event: CareEvent) {}
}

/// Emits events as structured `tracing` records.
#[derive(Debug, Clone, Default)]
pub struct TracingTelemetry {
    config: TelemetryConfig,
}

impl TracingTelemetry {
    pub fn new(config: &TelemetryConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl CareTelemetry for TracingTelemetry {
    fn record(&self, event: CareEvent) {
        if !self.config.enabled {
            return;
        }

        match event {
            CareEvent::LookupSkipped => {
                tracing::debug!("No material identifiers, skipping treatment lookup");
            }
            CareEvent::LookupCompleted {
                requested,
                resolved,
                records,
            } => {
                tracing::debug!(requested, resolved, records, "Treatment lookup completed");
            }
            CareEvent::LookupUnavailable { reason } => {
                tracing::warn!(%reason, "Treatment store unavailable, using fallback instructions");
            }
            CareEvent::AmbiguousMaterial {
                material,
                previous,
                winner,
            } => {
                if self.config.log_ambiguity {
                    tracing::warn!(
                        %material,
                        %previous,
                        %winner,
                        "Material claimed by more than one treatment, keeping the later one"
                    );
                }
            }
            CareEvent::GroupsBuilt {
                items,
                excluded,
                groups,
                unresolved_items,
            } => {
                tracing::debug!(items, excluded, groups, unresolved_items, "Treatment groups built");
            }
        }
    }
}

/// Keeps every event in memory along with per-event counters.
///
/// Uses `RwLock` so one recorder can be shared across tasks.
#[derive(Debug, Default)]
pub struct RecordingTelemetry {
    events: RwLock<Vec<CareEvent>>,
    counters: RwLock<HashMap<&'static str, u64>>,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CareEvent> {
        read_recovering(&self.events, "events").clone()
    }

    /// Number of events recorded under `name`, see [`CareEvent::name`].
    pub fn count(&self, name: &str) -> u64 {
        read_recovering(&self.counters, "counters")
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    pub fn clear(&self) {
        write_recovering(&self.events, "events").clear();
        write_recovering(&self.counters, "counters").clear();
    }
}

impl CareTelemetry for RecordingTelemetry {
    fn record(&self, event: CareEvent) {
        *write_recovering(&self.counters, "counters")
            .entry(event.name())
            .or_insert(0) += 1;
        write_recovering(&self.events, "events").push(event);
    }
}

// A panic while holding a recorder lock leaves the data intact, so keep
// recording into it rather than dropping events.
fn read_recovering<'a, T>(lock: &'a RwLock<T>, name: &str) -> RwLockReadGuard<'a, T> {
    lock.read().unwrap_or_else(|poisoned| {
        tracing::warn!(lock = name, "Recording telemetry lock poisoned, recovering");
        poisoned.into_inner()
    })
}

fn write_recovering<'a, T>(lock: &'a RwLock<T>, name: &str) -> RwLockWriteGuard<'a, T> {
    lock.write().unwrap_or_else(|poisoned| {
        tracing::warn!(lock = name, "Recording telemetry lock poisoned, recovering");
        poisoned.into_inner()
    })
}
