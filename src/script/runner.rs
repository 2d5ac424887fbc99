//! Script runner for executing .pack files

use std::fs;
use std::path::Path;

use crate::backpack::BackpackManager;
use crate::engine::{
    execute_command_with_manager, explain_command, ExecutionContext, ExecutionResult,
};
use crate::error::{BackpackError, Result};
use crate::output::format_output;
use crate::parser::{parse_script, Script};

/// Result of script execution
#[derive(Debug)]
pub struct ScriptResult {
    /// All results from executed statements
    pub results: Vec<ExecutionResult>,
    /// Total statements executed
    pub statements_executed: usize,
    /// Whether the script completed successfully
    pub success: bool,
    /// Error message if script failed
    pub error: Option<String>,
}

/// Script runner that owns the backpacks a script works with
pub struct ScriptRunner {
    exec_ctx: ExecutionContext,
    manager: BackpackManager,
    /// Print each result as it is produced
    echo: bool,
}

impl ScriptRunner {
    /// Create a new script runner
    pub fn new(exec_ctx: ExecutionContext) -> Self {
        Self {
            exec_ctx,
            manager: BackpackManager::new(),
            echo: true,
        }
    }

    /// Collect results without printing them
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Load and run a script file
    pub fn run_file(&mut self, path: &Path) -> Result<ScriptResult> {
        if path.extension().is_none_or(|e| e != "pack") {
            return Err(BackpackError::InvalidScript(format!(
                "Script file must have .pack extension: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(BackpackError::IoError)?;
        let script = parse_script(&content)?;

        // Relative EXPORT paths land next to the script
        if self.exec_ctx.base_dir.is_none() {
            self.exec_ctx.base_dir = path.parent().map(Path::to_path_buf);
        }

        log::info!("running {} ({} statements)", path.display(), script.statements.len());
        self.run_script(&script)
    }

    /// Run a parsed script
    pub fn run_script(&mut self, script: &Script) -> Result<ScriptResult> {
        let mut results = Vec::new();
        let mut statements_executed = 0;

        for cmd in &script.statements {
            match execute_command_with_manager(cmd, &self.exec_ctx, &mut self.manager) {
                Ok(result) => {
                    statements_executed += 1;
                    if self.echo {
                        println!("{}", format_output(&result, &self.exec_ctx.output_format));
                    }
                    results.push(result);
                }
                Err(e) => {
                    log::warn!("statement {} failed: {}", statements_executed + 1, e);
                    return Ok(ScriptResult {
                        results,
                        statements_executed,
                        success: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        log::info!("script finished after {} statements", statements_executed);
        Ok(ScriptResult {
            results,
            statements_executed,
            success: true,
            error: None,
        })
    }

    /// The backpacks as the script left them
    pub fn manager(&self) -> &BackpackManager {
        &self.manager
    }
}

/// Explain a script without executing
pub fn explain_script(script: &Script) -> Vec<String> {
    script
        .statements
        .iter()
        .enumerate()
        .map(|(i, cmd)| format!("{}. {}", i + 1, explain_command(cmd)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ResultData;
    use tempfile::TempDir;

    #[test]
    fn test_run_script_to_completion() {
        let script = parse_script(
            r#"
            PACK "Jim" WITH ["tent", "socks"];
            ADD "jacket" TO "Jim";
            REMOVE "stove" FROM "Jim";
            REMOVE "socks" FROM "Jim";
            LOOK IN "Jim";
            "#,
        )
        .unwrap();
        let mut runner = ScriptRunner::new(ExecutionContext::default()).quiet();
        let result = runner.run_script(&script).unwrap();
        assert!(result.success);
        assert_eq!(result.statements_executed, 5);
        assert_eq!(
            runner.manager().get("Jim").unwrap().contents(),
            ["tent".to_string(), "jacket".to_string()]
        );
    }

    #[test]
    fn test_run_script_stops_at_error() {
        let script =
            parse_script(r#"PACK "Jim" WITH "tent"; LOOK IN "Karen"; EMPTY "Jim";"#).unwrap();
        let mut runner = ScriptRunner::new(ExecutionContext::default()).quiet();
        let result = runner.run_script(&script).unwrap();
        assert!(!result.success);
        assert_eq!(result.statements_executed, 1);
        assert!(result.error.unwrap().contains("Karen"));
        assert!(!runner.manager().get("Jim").unwrap().is_empty());
    }

    #[test]
    fn test_run_file_requires_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("trip.txt");
        fs::write(&path, r#"PACK "Jim" WITH "tent";"#).unwrap();
        let mut runner = ScriptRunner::new(ExecutionContext::default()).quiet();
        assert!(matches!(
            runner.run_file(&path),
            Err(BackpackError::InvalidScript(_))
        ));
    }

    #[test]
    fn test_run_file_exports_next_to_script() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("trip.pack");
        fs::write(&path, r#"PACK "Jim" WITH "tent"; EXPORT "Jim" TO "jim.pack";"#).unwrap();
        let mut runner = ScriptRunner::new(ExecutionContext::default()).quiet();
        let result = runner.run_file(&path).unwrap();
        assert!(result.success);
        assert!(matches!(result.results[1].data, ResultData::Exported { .. }));
        assert!(temp_dir.path().join("jim.pack").exists());
    }

    #[test]
    fn test_explain_script() {
        let script = parse_script(r#"PACK "Jim" WITH "tent"; EMPTY "Jim""#).unwrap();
        let explanations = explain_script(&script);
        assert_eq!(explanations.len(), 2);
        assert!(explanations[0].starts_with("1. Pack a backpack for Jim"));
        assert!(explanations[1].contains("Dump"));
    }
}
