//! Custom name and anvil repair cost.

use mc_item_nbt::NbtTag;
use serde::{Serialize, Serializer};

use crate::error::ItemError;
use crate::item::Item;

const DISPLAY: &str = "display";
const NAME: &str = "Name";
const REPAIR_COST: &str = "RepairCost";

/// Result of reading an item's custom name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomName {
    Named(String),
    /// No `display.Name` tag. Serializes as `0`, which is what existing
    /// consumers of the plain-object form expect for a missing name.
    Unset,
}

impl CustomName {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CustomName::Named(name) => Some(name),
            CustomName::Unset => None,
        }
    }
}

impl Serialize for CustomName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CustomName::Named(name) => serializer.serialize_str(name),
            CustomName::Unset => serializer.serialize_u8(0),
        }
    }
}

impl Item {
    /// `display.Name`. `None` on the placeholder.
    pub fn custom_name(&self) -> Option<CustomName> {
        if self.is_placeholder() {
            return None;
        }
        let name = self
            .nbt
            .as_ref()
            .and_then(|nbt| nbt.get(&[DISPLAY, NAME]))
            .and_then(NbtTag::as_string);
        Some(match name {
            Some(name) => CustomName::Named(name.to_string()),
            None => CustomName::Unset,
        })
    }

    /// Set `display.Name`, creating the root and `display` compounds as
    /// needed. Fails only if an existing `display` tag is not a compound.
    pub fn set_custom_name(&mut self, name: impl Into<String>) -> Result<(), ItemError> {
        self.nbt_mut()
            .insert_at(&[DISPLAY], NAME, NbtTag::String(name.into()))?;
        Ok(())
    }

    /// Accumulated anvil cost (`RepairCost`), 0 when unset.
    pub fn repair_cost(&self) -> i32 {
        if self.is_placeholder() {
            return 0;
        }
        self.nbt
            .as_ref()
            .and_then(|nbt| nbt.get(&[REPAIR_COST]))
            .and_then(NbtTag::as_integer)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(0)
    }

    pub fn set_repair_cost(&mut self, cost: i32) {
        self.nbt_mut()
            .compound
            .insert(REPAIR_COST.into(), NbtTag::Int(cost));
    }
}
