//! Command implementations

pub mod describe;
pub mod groups;
pub mod notify;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use care_storage::JsonFileTreatmentStore;
use care_types::{CompletedOrder, OrderFurnitureRecord};
use clap::Args;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Inputs shared by commands that run the pipeline
#[derive(Args, Debug)]
pub struct PipelineArgs {
    /// Order document (JSON). A bare array is read as the furniture list.
    #[arg(long)]
    pub order: PathBuf,

    /// Treatment export (JSON array or JSON lines)
    #[arg(long, env = "CARE_TREATMENTS")]
    pub treatments: Option<PathBuf>,
}

impl PipelineArgs {
    pub fn store(&self, config: &CliConfig) -> CliResult<JsonFileTreatmentStore> {
        self.treatments
            .clone()
            .or_else(|| config.default_treatments.clone())
            .map(JsonFileTreatmentStore::new)
            .ok_or_else(|| {
                CliError::InvalidArgument(
                    "no treatment export given (use --treatments or default_treatments)".into(),
                )
            })
    }

    pub async fn load_order(&self) -> CliResult<CompletedOrder> {
        let contents = tokio::fs::read_to_string(&self.order).await?;
        let value: Value = serde_json::from_str(&contents)?;
        match value {
            Value::Array(_) => {
                let mut order = CompletedOrder::new(order_id_from_path(&self.order));
                order.furniture = serde_json::from_value::<Vec<OrderFurnitureRecord>>(value)?;
                Ok(order)
            }
            other => Ok(CompletedOrder::from_json(other)?),
        }
    }
}

fn order_id_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("order")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_uses_file_stem_as_order_id() {
        assert_eq!(order_id_from_path(Path::new("/tmp/ord-99.json")), "ord-99");
    }
}
