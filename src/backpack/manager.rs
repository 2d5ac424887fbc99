//! Backpack manager for keeping several owners' backpacks apart
//!
//! Each owner has at most one backpack. Backpacks are kept in owner order so
//! listings are stable.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Utc;

use super::types::{Backpack, PackReceipt, Payload};
use crate::error::{BackpackError, Result};

/// Owns every backpack a script or session works with
#[derive(Debug, Default)]
pub struct BackpackManager {
    backpacks: BTreeMap<String, Backpack>,
}

impl BackpackManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pack a new backpack for `owner`
    pub fn pack(&mut self, owner: &str, payload: Payload) -> Result<(&mut Backpack, PackReceipt)> {
        if self.backpacks.contains_key(owner) {
            return Err(BackpackError::DuplicateBackpack(owner.to_string()));
        }

        let (backpack, receipt) = Backpack::pack(owner, payload);
        let backpack = self.backpacks.entry(owner.to_string()).or_insert(backpack);
        Ok((backpack, receipt))
    }

    /// Throw a backpack away, handing it back to the caller
    pub fn discard(&mut self, owner: &str) -> Result<Backpack> {
        self.backpacks
            .remove(owner)
            .ok_or_else(|| BackpackError::UnknownBackpack(owner.to_string()))
    }

    /// List all owners
    pub fn list(&self) -> Vec<&str> {
        self.backpacks.keys().map(|s| s.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Backpack> {
        self.backpacks.values()
    }

    pub fn get(&self, owner: &str) -> Option<&Backpack> {
        self.backpacks.get(owner)
    }

    pub fn get_mut(&mut self, owner: &str) -> Option<&mut Backpack> {
        self.backpacks.get_mut(owner)
    }

    /// Like `get`, but a missing backpack is an error
    pub fn require(&self, owner: &str) -> Result<&Backpack> {
        self.get(owner)
            .ok_or_else(|| BackpackError::UnknownBackpack(owner.to_string()))
    }

    pub fn require_mut(&mut self, owner: &str) -> Result<&mut Backpack> {
        self.backpacks
            .get_mut(owner)
            .ok_or_else(|| BackpackError::UnknownBackpack(owner.to_string()))
    }

    pub fn exists(&self, owner: &str) -> bool {
        self.backpacks.contains_key(owner)
    }

    /// Export a backpack to a script file that packs it again
    pub fn export(&self, owner: &str, path: &Path) -> Result<()> {
        let backpack = self.require(owner)?;

        let mut script = String::new();
        script.push_str(&format!("-- Exported backpack: {}\n", backpack.owner()));
        script.push_str(&format!("-- Exported at: {}\n\n", Utc::now().to_rfc3339()));
        script.push_str(&pack_statement(backpack));
        script.push('\n');

        fs::write(path, script).map_err(BackpackError::IoError)?;
        log::info!("exported {}'s backpack to {}", owner, path.display());

        Ok(())
    }

    pub fn count(&self) -> usize {
        self.backpacks.len()
    }
}

/// Render the PACK statement that rebuilds `backpack`
pub fn pack_statement(backpack: &Backpack) -> String {
    let owner = serde_json::Value::String(backpack.owner().to_string());
    let items = serde_json::to_string(backpack.contents()).unwrap_or_else(|_| "[]".to_string());
    format!("PACK {} WITH {};", owner, items)
}
