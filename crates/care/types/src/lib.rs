//! Core types for care-instruction resolution.
//!
//! This crate holds the values that flow through one aggregation pass:
//! - furniture items validated from order records
//! - treatment records decoded from the external treatment store
//! - resolution entries and the treatment groups built from them
//! - the phrasing helper that turns furniture labels into a sentence fragment
//!
//! Everything here is a plain owned value. Nothing is cached or persisted.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod error;
mod furniture;
mod group;
mod phrase;
mod resolution;
mod treatment;

pub use error::{CareError, CareResult};
pub use furniture::{CompletedOrder, FurnitureItem, OrderFurnitureRecord, PLACEHOLDER_PREFIX};
pub use group::{GroupKey, TreatmentGroup, FALLBACK_LABEL};
pub use phrase::describe_furniture;
pub use resolution::Resolution;
pub use treatment::{ResolvedTreatment, TreatmentDocument, TreatmentRecord};
