//! Furniture phrasing command

use crate::error::CliResult;
use crate::output::{print_structured, OutputFormat};
use care_types::describe_furniture;

/// Print the natural-language phrase for a list of furniture types
pub fn execute(furniture_types: &[String], format: OutputFormat) -> CliResult<()> {
    let phrase = describe_furniture(furniture_types);
    let value = serde_json::json!({ "description": phrase });
    if !print_structured(&value, format)? {
        println!("{}", phrase);
    }
    Ok(())
}
