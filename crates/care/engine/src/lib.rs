//! Care-instruction resolution and grouping.
//!
//! When an order is marked complete, its furniture is mapped to treatment
//! definitions held in an external store and grouped for the customer
//! notification:
//!
//! 1. [`TreatmentResolver`] looks up the distinct material identifiers once.
//! 2. [`TreatmentAggregator`] groups furniture by treatment in first-seen
//!    order, deduplicating materials within each group.
//! 3. [`CareNotification`] turns the groups into markup-free sections for
//!    whatever template renders the email.
//!
//! Store failures never surface to the caller. The worst case is a single
//! fallback "Care Instructions" section without a link.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

pub mod aggregator;
pub mod config;
pub mod notification;
pub mod pipeline;
pub mod resolver;
pub mod telemetry;

pub use aggregator::{group_by_treatment, TreatmentAggregator};
pub use config::{CareConfig, TelemetryConfig};
pub use notification::{CareNotification, CareSection};
pub use pipeline::CarePipeline;
pub use resolver::{collect_material_identifiers, TreatmentResolver};
pub use telemetry::{CareEvent, CareTelemetry, NoopTelemetry, RecordingTelemetry, TracingTelemetry};

pub use care_types::{
    describe_furniture, CompletedOrder, FurnitureItem, Resolution, ResolvedTreatment,
    TreatmentGroup, TreatmentRecord, FALLBACK_LABEL,
};
