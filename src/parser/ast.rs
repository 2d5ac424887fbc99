//! Abstract Syntax Tree definitions for .pack scripts

use serde::{Deserialize, Serialize};

use crate::backpack::Payload;

/// Top-level command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Pack(PackCommand),
    ReadTag(String),
    LookIn(String),
    Add(ItemCommand),
    Remove(ItemCommand),
    Empty(String),
    ListBackpacks,
    Discard(String),
    Export(ExportCommand),
    Explain(Box<Command>),
}

/// A script is a sequence of commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub statements: Vec<Command>,
}

/// PACK "owner" WITH <payload>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackCommand {
    pub owner: String,
    pub payload: Payload,
}

/// ADD "item" TO "owner" / REMOVE "item" FROM "owner"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCommand {
    pub item: String,
    pub owner: String,
}

/// EXPORT "owner" TO "path"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportCommand {
    pub owner: String,
    pub path: String,
}

impl Command {
    /// The owner this command touches, if any
    pub fn owner(&self) -> Option<&str> {
        match self {
            Command::Pack(p) => Some(p.owner.as_str()),
            Command::ReadTag(owner)
            | Command::LookIn(owner)
            | Command::Empty(owner)
            | Command::Discard(owner) => Some(owner.as_str()),
            Command::Add(i) | Command::Remove(i) => Some(i.owner.as_str()),
            Command::Export(e) => Some(e.owner.as_str()),
            Command::ListBackpacks | Command::Explain(_) => None,
        }
    }
}

fn quoted(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Pack(p) => {
                let payload = match &p.payload {
                    Payload::Single(item) => quoted(item),
                    Payload::Many(items) => {
                        serde_json::to_string(items).map_err(|_| std::fmt::Error)?
                    }
                    Payload::Unrecognized(raw) => raw.clone(),
                };
                write!(f, "PACK {} WITH {}", quoted(&p.owner), payload)
            }
            Command::ReadTag(owner) => write!(f, "READ TAG {}", quoted(owner)),
            Command::LookIn(owner) => write!(f, "LOOK IN {}", quoted(owner)),
            Command::Add(i) => write!(f, "ADD {} TO {}", quoted(&i.item), quoted(&i.owner)),
            Command::Remove(i) => {
                write!(f, "REMOVE {} FROM {}", quoted(&i.item), quoted(&i.owner))
            }
            Command::Empty(owner) => write!(f, "EMPTY {}", quoted(owner)),
            Command::ListBackpacks => write!(f, "LIST BACKPACKS"),
            Command::Discard(owner) => write!(f, "DISCARD {}", quoted(owner)),
            Command::Export(e) => write!(f, "EXPORT {} TO {}", quoted(&e.owner), quoted(&e.path)),
            Command::Explain(inner) => write!(f, "EXPLAIN {}", inner),
        }
    }
}
