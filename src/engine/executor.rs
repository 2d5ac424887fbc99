//! Command executor

use std::path::PathBuf;

use serde::Serialize;

use crate::backpack::{BackpackManager, Compartment, PackReceipt, Payload, RemoveOutcome};
use crate::error::Result;
use crate::output::OutputFormat;
use crate::parser::{Command, ExportCommand, ItemCommand, PackCommand};

/// Execution context containing runtime configuration
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    pub output_format: OutputFormat,
    /// Directory relative EXPORT paths are resolved against
    pub base_dir: Option<PathBuf>,
}

impl ExecutionContext {
    fn resolve(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        }
    }
}

/// Result of command execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    #[serde(flatten)]
    pub data: ResultData,
}

impl From<ResultData> for ExecutionResult {
    fn from(data: ResultData) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ResultData {
    Packed(PackReceipt),
    NameTag { owner: String },
    Contents { owner: String, items: Vec<String> },
    Added { owner: String, item: String, count: usize },
    Removed { owner: String, item: String, index: usize },
    NotFound { owner: String, item: String },
    Dumped { owner: String, items: Vec<String> },
    Backpacks { backpacks: Vec<BackpackSummary> },
    Discarded { owner: String, items: Vec<String> },
    Exported { owner: String, path: String },
    Explanation { text: String },
}

/// One row of LIST BACKPACKS
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackpackSummary {
    pub owner: String,
    pub item_count: usize,
}

/// Execute a parsed command against a fresh set of backpacks
pub fn execute_command(cmd: &Command, ctx: &ExecutionContext) -> Result<ExecutionResult> {
    let mut manager = BackpackManager::new();
    execute_command_with_manager(cmd, ctx, &mut manager)
}

/// Execute a parsed command against existing backpacks
pub fn execute_command_with_manager(
    cmd: &Command,
    ctx: &ExecutionContext,
    manager: &mut BackpackManager,
) -> Result<ExecutionResult> {
    let data = match cmd {
        Command::Pack(pack) => execute_pack(pack, manager)?,
        Command::ReadTag(owner) => ResultData::NameTag {
            owner: manager.require(owner)?.read_name_tag().to_string(),
        },
        Command::LookIn(owner) => {
            let items = match manager.require(owner)?.look_in() {
                Compartment::Empty => Vec::new(),
                Compartment::Holding(items) => items.to_vec(),
            };
            ResultData::Contents {
                owner: owner.clone(),
                items,
            }
        }
        Command::Add(add) => execute_add(add, manager)?,
        Command::Remove(remove) => execute_remove(remove, manager)?,
        Command::Empty(owner) => ResultData::Dumped {
            owner: owner.clone(),
            items: manager.require_mut(owner)?.empty(),
        },
        Command::ListBackpacks => ResultData::Backpacks {
            backpacks: manager
                .iter()
                .map(|b| BackpackSummary {
                    owner: b.owner().to_string(),
                    item_count: b.len(),
                })
                .collect(),
        },
        Command::Discard(owner) => {
            let backpack = manager.discard(owner)?;
            ResultData::Discarded {
                owner: owner.clone(),
                items: backpack.contents().to_vec(),
            }
        }
        Command::Export(export) => execute_export(export, ctx, manager)?,
        Command::Explain(inner) => ResultData::Explanation {
            text: explain_command(inner),
        },
    };

    Ok(data.into())
}

fn execute_pack(pack: &PackCommand, manager: &mut BackpackManager) -> Result<ResultData> {
    let (_, receipt) = manager.pack(&pack.owner, pack.payload.clone())?;
    Ok(ResultData::Packed(receipt))
}

fn execute_add(add: &ItemCommand, manager: &mut BackpackManager) -> Result<ResultData> {
    let backpack = manager.require_mut(&add.owner)?;
    backpack.add_item(add.item.clone());
    Ok(ResultData::Added {
        owner: add.owner.clone(),
        item: add.item.clone(),
        count: backpack.len(),
    })
}

fn execute_remove(remove: &ItemCommand, manager: &mut BackpackManager) -> Result<ResultData> {
    let backpack = manager.require_mut(&remove.owner)?;
    let data = match backpack.remove_item(&remove.item) {
        RemoveOutcome::Removed { index } => ResultData::Removed {
            owner: remove.owner.clone(),
            item: remove.item.clone(),
            index,
        },
        RemoveOutcome::NotFound => ResultData::NotFound {
            owner: remove.owner.clone(),
            item: remove.item.clone(),
        },
    };
    Ok(data)
}

fn execute_export(
    export: &ExportCommand,
    ctx: &ExecutionContext,
    manager: &BackpackManager,
) -> Result<ResultData> {
    let path = ctx.resolve(&export.path);
    manager.export(&export.owner, &path)?;
    Ok(ResultData::Exported {
        owner: export.owner.clone(),
        path: path.display().to_string(),
    })
}

/// Describe what a command would do, without doing it
pub fn explain_command(cmd: &Command) -> String {
    match cmd {
        Command::Pack(p) => match &p.payload {
            Payload::Single(item) => format!("Pack a backpack for {} holding {}", p.owner, item),
            Payload::Many(items) if items.is_empty() => {
                format!("Pack an empty backpack for {}", p.owner)
            }
            Payload::Many(items) => format!(
                "Pack a backpack for {} holding {} item(s): {}",
                p.owner,
                items.len(),
                items.join(", ")
            ),
            Payload::Unrecognized(raw) => format!(
                "Pack an empty backpack for {} ({} is not an item and gets chucked on the ground)",
                p.owner, raw
            ),
        },
        Command::ReadTag(owner) => format!("Read the name tag on {}'s backpack", owner),
        Command::LookIn(owner) => format!("Look in the main compartment of {}'s backpack", owner),
        Command::Add(i) => format!("Place {} at the end of {}'s backpack", i.item, i.owner),
        Command::Remove(i) => format!(
            "Remove the first {} from {}'s backpack, if there is one",
            i.item, i.owner
        ),
        Command::Empty(owner) => format!("Dump everything in {}'s backpack on the ground", owner),
        Command::ListBackpacks => "List every packed backpack".to_string(),
        Command::Discard(owner) => format!("Throw away {}'s backpack", owner),
        Command::Export(e) => format!("Export {}'s backpack to {}", e.owner, e.path),
        Command::Explain(inner) => format!("Explain: {}", explain_command(inner)),
    }
}
