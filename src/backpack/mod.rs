//! Backpack module: the owner-labelled item container
//!
//! A backpack holds:
//! - An owner label that never changes after packing
//! - A main compartment of item labels, in insertion order, duplicates allowed

mod manager;
mod types;

pub use manager::{pack_statement, BackpackManager};
pub use types::{Backpack, Compartment, PackReceipt, Payload, RemoveOutcome};
