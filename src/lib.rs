//! Backpack - an owner-labelled item container and a tiny script language for it
//!
//! A [`Backpack`] belongs to one owner and holds an ordered list of items.
//! Operations return plain values; turning them into text is the job of the
//! [`output`] module.
//!
//! # Example
//!
//! ```
//! use backpack::{Backpack, RemoveOutcome};
//!
//! let mut pack = Backpack::new("Jim", "tent");
//! pack.add_item("jacket");
//! assert_eq!(pack.remove_item("stove"), RemoveOutcome::NotFound);
//! assert_eq!(pack.remove_item("tent"), RemoveOutcome::Removed { index: 0 });
//! assert_eq!(pack.contents(), ["jacket".to_string()]);
//! ```
//!
//! Scripts drive several backpacks at once:
//!
//! ```
//! use backpack::{parse_script, ExecutionContext, ScriptRunner};
//!
//! let script = parse_script(r#"PACK "Jim" WITH ["tent", "socks"]; EMPTY "Jim";"#).unwrap();
//! let mut runner = ScriptRunner::new(ExecutionContext::default()).quiet();
//! let result = runner.run_script(&script).unwrap();
//! assert!(result.success);
//! ```

pub mod backpack;
pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod repl;
pub mod script;

pub use backpack::{Backpack, BackpackManager, Compartment, PackReceipt, Payload, RemoveOutcome};
pub use engine::{
    execute_command, execute_command_with_manager, explain_command, ExecutionContext,
    ExecutionResult, ResultData,
};
pub use error::{BackpackError, Result};
pub use output::{format_output, OutputFormat};
pub use parser::{parse_command, parse_script, Command, Script};
pub use script::{validate_script, ScriptResult, ScriptRunner};
