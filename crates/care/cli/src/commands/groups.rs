//! Treatment grouping command

use super::PipelineArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{print_structured, print_table, OutputFormat};
use care_engine::{CareEvent, CarePipeline, RecordingTelemetry, TracingTelemetry};
use care_types::TreatmentGroup;
use colored::Colorize;
use serde::Serialize;
use std::sync::Arc;
use tabled::Tabled;

/// Table row for group display
#[derive(Debug, Serialize, Tabled)]
struct GroupRow {
    /// Treatment heading
    treatment: String,
    /// Furniture phrase
    furniture: String,
    /// Contributing materials
    materials: String,
    /// Reference link
    link: String,
}

impl From<&TreatmentGroup> for GroupRow {
    fn from(group: &TreatmentGroup) -> Self {
        Self {
            treatment: group.treatment_kind.clone(),
            furniture: group.description(),
            materials: group
                .contributing_materials
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
            link: group.reference_link.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Serialize)]
struct GroupsReport<'a> {
    order_id: &'a str,
    groups: &'a [TreatmentGroup],
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<Vec<CareEvent>>,
}

/// Resolve and group the furniture of one order
pub async fn execute(
    args: &PipelineArgs,
    config: &CliConfig,
    explain: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let store = args.store(config)?;
    let order = args.load_order().await?;

    let recorder = Arc::new(RecordingTelemetry::new());
    let pipeline = if explain {
        CarePipeline::with_telemetry(store, config.care.clone(), recorder.clone())
    } else {
        CarePipeline::with_telemetry(
            store,
            config.care.clone(),
            Arc::new(TracingTelemetry::new(&config.care.telemetry)),
        )
    };

    let items = pipeline.furniture_items(&order);
    let groups = pipeline.run(&items).await;
    tracing::debug!(order = %order.order_id, groups = groups.len(), "grouped order furniture");

    let report = GroupsReport {
        order_id: &order.order_id,
        groups: &groups,
        events: explain.then(|| recorder.events()),
    };
    if print_structured(&report, format)? {
        return Ok(());
    }

    if groups.is_empty() {
        println!("{}", "No furniture in this order carries a material.".yellow());
    } else {
        print_table(groups.iter().map(GroupRow::from).collect());
    }

    if explain {
        println!();
        println!("{}", "Resolution events".bold().cyan());
        for event in recorder.events() {
            println!("  {}", serde_json::to_string(&event)?);
        }
    }
    Ok(())
}
