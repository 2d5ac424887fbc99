//! Output formatting module
//!
//! All user-facing wording lives here; the engine only hands back data.

pub mod human;
pub mod json;

use crate::engine::executor::ExecutionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

pub fn format_output(result: &ExecutionResult, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format_human(result),
        OutputFormat::Json => json::format_json(result),
    }
}
