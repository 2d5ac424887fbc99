//! Backpack struct definition
//!
//! A Backpack is an owner-labelled, ordered list of item labels. Items keep
//! their insertion order and duplicates are allowed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a backpack is packed with when it is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    /// A single item, wrapped into a one-element compartment
    Single(String),
    /// An already-ordered list of items, copied as-is
    Many(Vec<String>),
    /// Something that is not an item; carries a rendering for the diagnostic
    Unrecognized(String),
}

impl Payload {
    /// Classify a JSON value into a payload.
    ///
    /// Strings become `Single`, arrays of strings become `Many`, and every
    /// other value (numbers, booleans, null, objects, mixed arrays) is
    /// `Unrecognized`.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => Payload::Single(s),
            Value::Array(values) => {
                let rendered = Value::Array(values.clone()).to_string();
                let items: Option<Vec<String>> = values
                    .into_iter()
                    .map(|v| match v {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect();
                match items {
                    Some(items) => Payload::Many(items),
                    None => Payload::Unrecognized(rendered),
                }
            }
            other => Payload::Unrecognized(other.to_string()),
        }
    }

    /// Human rendering of the payload, items joined with ", "
    pub fn label(&self) -> String {
        match self {
            Payload::Single(item) => item.clone(),
            Payload::Many(items) => items.join(", "),
            Payload::Unrecognized(raw) => raw.clone(),
        }
    }
}

impl From<&str> for Payload {
    fn from(item: &str) -> Self {
        Payload::Single(item.to_string())
    }
}

impl From<String> for Payload {
    fn from(item: String) -> Self {
        Payload::Single(item)
    }
}

impl From<Vec<String>> for Payload {
    fn from(items: Vec<String>) -> Self {
        Payload::Many(items)
    }
}

impl From<&[&str]> for Payload {
    fn from(items: &[&str]) -> Self {
        Payload::Many(items.iter().map(|s| s.to_string()).collect())
    }
}

/// Record of how a backpack was packed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackReceipt {
    pub owner: String,
    pub payload: String,
    /// Set when the payload was not an item and got chucked on the ground
    pub diagnostic: Option<String>,
}

/// Result of trying to take an item out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoveOutcome {
    /// The first occurrence was found at `index` and removed
    Removed { index: usize },
    NotFound,
}

impl RemoveOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, RemoveOutcome::Removed { .. })
    }
}

/// A view into the main compartment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compartment<'a> {
    Empty,
    Holding(&'a [String]),
}

/// An owner's backpack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backpack {
    owner: String,
    items: Vec<String>,
}

impl Backpack {
    /// Pack a new backpack for `owner`, returning it with a receipt
    pub fn pack(owner: impl Into<String>, payload: Payload) -> (Self, PackReceipt) {
        let owner = owner.into();
        let label = payload.label();
        let (items, diagnostic) = match payload {
            Payload::Single(item) => (vec![item], None),
            Payload::Many(items) => (items, None),
            Payload::Unrecognized(raw) => {
                log::warn!("unrecognized payload for {}'s backpack: {}", owner, raw);
                (Vec::new(), Some(raw))
            }
        };
        log::debug!("packed {}'s backpack with {} item(s)", owner, items.len());

        let receipt = PackReceipt {
            owner: owner.clone(),
            payload: label,
            diagnostic,
        };
        (Self { owner, items }, receipt)
    }

    /// Pack a new backpack, discarding the receipt
    pub fn new(owner: impl Into<String>, payload: impl Into<Payload>) -> Self {
        Self::pack(owner, payload.into()).0
    }

    /// Whose backpack this is
    pub fn read_name_tag(&self) -> &str {
        &self.owner
    }

    /// Look into the main compartment
    pub fn look_in(&self) -> Compartment<'_> {
        if self.items.is_empty() {
            Compartment::Empty
        } else {
            Compartment::Holding(&self.items)
        }
    }

    /// Put an item at the end of the main compartment
    pub fn add_item(&mut self, item: impl Into<String>) {
        let item = item.into();
        log::debug!("placing {} into {}'s backpack", item, self.owner);
        self.items.push(item);
    }

    /// Take out the first item equal to `item`
    pub fn remove_item(&mut self, item: &str) -> RemoveOutcome {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.items.remove(index);
                log::debug!("removed {} from {}'s backpack", item, self.owner);
                RemoveOutcome::Removed { index }
            }
            None => {
                log::debug!("{}'s backpack does not contain {}", self.owner, item);
                RemoveOutcome::NotFound
            }
        }
    }

    /// Dump everything on the ground, returning what was dumped
    pub fn empty(&mut self) -> Vec<String> {
        log::debug!("emptying {}'s backpack", self.owner);
        std::mem::take(&mut self.items)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn contents(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }
}
