//! Care notification command

use super::PipelineArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{print_structured, OutputFormat};
use care_engine::CarePipeline;
use colored::Colorize;

/// Build the care-instruction notification for one order
pub async fn execute(args: &PipelineArgs, config: &CliConfig, format: OutputFormat) -> CliResult<()> {
    let store = args.store(config)?;
    let order = args.load_order().await?;
    let pipeline = CarePipeline::new(store, config.care.clone());

    let notification = pipeline.notify(&order).await;
    if print_structured(&notification, format)? {
        return Ok(());
    }

    println!("{}", notification.subject.bold());
    println!("{}", "=".repeat(notification.subject.len()));
    println!("{}", notification.greeting());
    for section in &notification.sections {
        println!();
        println!("{}", section.heading.bold().cyan());
        println!("{}", section.description);
        if let Some(link) = &section.link {
            println!("{} {}", "View instructions:".dimmed(), link);
        }
    }
    Ok(())
}
