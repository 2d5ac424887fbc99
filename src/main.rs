//! Backpack CLI - pack and unpack backpacks with .pack scripts

use std::path::Path;

use anyhow::{bail, Context};
use clap::Parser;

use backpack::cli::{Args, SubCommand};
use backpack::script::{
    explain_script, has_errors, validate_script, ScriptRunner, ValidationSeverity,
};
use backpack::{
    execute_command, explain_command, format_output, parse_command, parse_script,
    ExecutionContext, OutputFormat,
};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let ctx = ExecutionContext {
        output_format: if args.json { OutputFormat::Json } else { OutputFormat::Human },
        base_dir: None,
    };

    match args.command {
        SubCommand::Run { file } => {
            let script = load_script(&file)?;

            let validation_errors = validate_script(&script);
            let warnings = validation_errors
                .iter()
                .filter(|e| e.severity == ValidationSeverity::Warning);
            for err in warnings {
                eprintln!("Warning: {}", err);
            }
            if has_errors(&validation_errors) {
                let errors = validation_errors
                    .iter()
                    .filter(|e| e.severity == ValidationSeverity::Error);
                for err in errors {
                    eprintln!("Error: {}", err);
                }
                bail!("Script validation failed");
            }

            let mut runner = ScriptRunner::new(ctx);
            let result = runner.run_file(&file)?;

            if !result.success {
                if let Some(err) = result.error {
                    bail!(err);
                }
            }

            if args.verbose {
                eprintln!(
                    "--- Script completed: {} statements executed ---",
                    result.statements_executed
                );
            }
            Ok(())
        }

        SubCommand::Exec { statement } => {
            let cmd = parse_command(&statement)?;
            let result = execute_command(&cmd, &ctx)?;
            println!("{}", format_output(&result, &ctx.output_format));
            Ok(())
        }

        SubCommand::Explain { input } => {
            let path = Path::new(&input);

            if path.exists() && path.extension().is_some_and(|e| e == "pack") {
                let script = load_script(path)?;

                println!("Script: {}", path.display());
                println!("Statements: {}\n", script.statements.len());
                for explanation in explain_script(&script) {
                    println!("{}", explanation);
                }

                let validation_errors = validate_script(&script);
                if !validation_errors.is_empty() {
                    println!("\nValidation Notes:");
                    for err in &validation_errors {
                        println!("  - {}", err);
                    }
                }
            } else {
                let cmd = parse_command(&input)?;
                println!("{}", explain_command(&cmd));
            }
            Ok(())
        }

        SubCommand::Check { file } => {
            let script = load_script(&file)?;
            let validation_errors = validate_script(&script);
            for err in &validation_errors {
                println!("{}", err);
            }
            if has_errors(&validation_errors) {
                bail!("{} has errors", file.display());
            }
            println!("{}: {} statements OK", file.display(), script.statements.len());
            Ok(())
        }

        SubCommand::Repl => Ok(backpack::repl::run_repl(ctx)?),
    }
}

fn load_script(path: &Path) -> anyhow::Result<backpack::Script> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    Ok(parse_script(&content)?)
}
