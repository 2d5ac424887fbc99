//! Interactive REPL implementation

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::backpack::BackpackManager;
use crate::engine::{execute_command_with_manager, ExecutionContext};
use crate::error::{BackpackError, Result};
use crate::output::format_output;
use crate::parse_command;

pub fn run_repl(exec_ctx: ExecutionContext) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(|e| BackpackError::ExecutionError(e.to_string()))?;

    println!("Backpack v{} - Interactive Mode", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for commands, 'exit' to quit\n");

    let mut manager = BackpackManager::new();

    loop {
        let prompt = format!("backpack [{}]> ", manager.count());

        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" | "q" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" | "?" => {
                        print_help();
                        continue;
                    }
                    "clear" | "cls" => {
                        print!("\x1B[2J\x1B[1;1H");
                        continue;
                    }
                    _ => {}
                }

                let _ = rl.add_history_entry(line);

                let statement = expand_shortcuts(line);
                match parse_command(&statement) {
                    Ok(cmd) => match execute_command_with_manager(&cmd, &exec_ctx, &mut manager) {
                        Ok(result) => {
                            println!("{}\n", format_output(&result, &exec_ctx.output_format));
                        }
                        Err(e) => eprintln!("Error: {}\n", e),
                    },
                    Err(e) => eprintln!("{}\n", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

/// Expand common shortcuts to full statements
fn expand_shortcuts(input: &str) -> String {
    let quoted = |rest: &str| serde_json::Value::String(rest.to_string()).to_string();

    if input.eq_ignore_ascii_case("ls") {
        return "LIST BACKPACKS".to_string();
    }

    let (head, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
    let rest = rest.trim();
    if rest.is_empty() {
        return input.to_string();
    }
    if head.eq_ignore_ascii_case("look") {
        return format!("LOOK IN {}", quoted(rest));
    }
    if head.eq_ignore_ascii_case("tag") {
        return format!("READ TAG {}", quoted(rest));
    }

    input.to_string()
}

fn print_help() {
    println!(
        r#"
Backpack Commands
=================

  PACK "owner" WITH "item"          - Pack a backpack holding one item
  PACK "owner" WITH ["a", "b"]      - Pack a backpack holding a list of items
  READ TAG "owner"                  - Show whose backpack it is
  LOOK IN "owner"                   - Show the main compartment
  ADD "item" TO "owner"             - Put an item at the end
  REMOVE "item" FROM "owner"        - Take out the first matching item
  EMPTY "owner"                     - Dump everything on the ground
  LIST BACKPACKS                    - List every backpack
  DISCARD "owner"                   - Throw a backpack away
  EXPORT "owner" TO "file.pack"     - Save a backpack as a script
  EXPLAIN <statement>               - Show what a statement would do

SHORTCUTS:
  ls                                - Same as LIST BACKPACKS
  look owner                        - Same as LOOK IN "owner"
  tag owner                         - Same as READ TAG "owner"

REPL Commands:
  help, ?                           - Show this help
  clear, cls                        - Clear screen
  exit, quit, q                     - Exit REPL
"#
    );
}
