//! Execution engine for .pack commands

pub mod executor;

pub use executor::{
    execute_command, execute_command_with_manager, explain_command, BackpackSummary,
    ExecutionContext, ExecutionResult, ResultData,
};
