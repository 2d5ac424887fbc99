//! Script validation for .pack files
//!
//! Walks a script without running it and flags statements that are bound to
//! fail or probably do nothing.

use std::collections::{HashMap, HashSet};

use crate::backpack::Payload;
use crate::parser::{Command, Script};

/// An issue found during script validation
#[derive(Debug, Clone)]
pub struct ScriptValidationError {
    pub line: Option<usize>,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl std::fmt::Display for ScriptValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            ValidationSeverity::Error => "ERROR",
            ValidationSeverity::Warning => "WARNING",
        };
        if let Some(line) = self.line {
            write!(f, "{} (statement {}): {}", prefix, line, self.message)
        } else {
            write!(f, "{}: {}", prefix, self.message)
        }
    }
}

/// Everything that may have been put into each packed backpack so far
#[derive(Default)]
struct Tracker {
    packed: HashMap<String, HashSet<String>>,
}

/// Validate a script for correctness
pub fn validate_script(script: &Script) -> Vec<ScriptValidationError> {
    let mut errors = Vec::new();
    let mut tracker = Tracker::default();

    for (i, cmd) in script.statements.iter().enumerate() {
        validate_command(cmd, &mut tracker, &mut errors, i + 1);
    }

    errors
}

fn validate_command(
    cmd: &Command,
    tracker: &mut Tracker,
    errors: &mut Vec<ScriptValidationError>,
    line: usize,
) {
    let mut push = |message: String, severity: ValidationSeverity| {
        errors.push(ScriptValidationError {
            line: Some(line),
            message,
            severity,
        })
    };

    match cmd {
        Command::Pack(pack) => {
            if tracker.packed.contains_key(&pack.owner) {
                push(
                    format!("{} already has a backpack; DISCARD it first", pack.owner),
                    ValidationSeverity::Error,
                );
                return;
            }
            let items: HashSet<String> = match &pack.payload {
                Payload::Single(item) => [item.clone()].into_iter().collect(),
                Payload::Many(items) => items.iter().cloned().collect(),
                Payload::Unrecognized(raw) => {
                    push(
                        format!("{} is not an item; {}'s backpack starts empty", raw, pack.owner),
                        ValidationSeverity::Warning,
                    );
                    HashSet::new()
                }
            };
            tracker.packed.insert(pack.owner.clone(), items);
        }
        Command::ListBackpacks | Command::Explain(_) => {}
        other => {
            // Every remaining command needs a packed backpack
            let Some(owner) = other.owner() else { return };
            let Some(items) = tracker.packed.get_mut(owner) else {
                push(
                    format!("{} has no backpack at this point", owner),
                    ValidationSeverity::Error,
                );
                return;
            };
            match other {
                Command::Add(add) => {
                    items.insert(add.item.clone());
                }
                Command::Remove(remove) if !items.contains(&remove.item) => push(
                    format!("{} is never put into {}'s backpack", remove.item, owner),
                    ValidationSeverity::Warning,
                ),
                Command::Discard(_) => {
                    tracker.packed.remove(owner);
                }
                _ => {}
            }
        }
    }
}

/// Check if validation found any errors (not just warnings)
pub fn has_errors(errors: &[ScriptValidationError]) -> bool {
    errors.iter().any(|e| e.severity == ValidationSeverity::Error)
}

/// Check if validation found any warnings
pub fn has_warnings(errors: &[ScriptValidationError]) -> bool {
    errors
        .iter()
        .any(|e| e.severity == ValidationSeverity::Warning)
}
