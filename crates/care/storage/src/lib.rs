//! Treatment store abstractions.
//!
//! Treatment definitions live in an external document store that this
//! workspace only reads. The store contract is a single enumeration in the
//! store's natural order; callers decide what to do with ambiguity.
//!
//! Adapters:
//! - [`memory::InMemoryTreatmentStore`] keeps raw documents and counts fetches
//! - [`file::JsonFileTreatmentStore`] reads a JSON array or JSON-lines export

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod codec;
mod error;
pub mod file;
pub mod memory;
mod traits;

pub use error::{StorageError, StorageResult};
pub use file::JsonFileTreatmentStore;
pub use memory::InMemoryTreatmentStore;
pub use traits::TreatmentStore;
