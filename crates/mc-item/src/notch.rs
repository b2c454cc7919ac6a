//! Java Edition slot objects ("Notch" format).
//!
//! Three shapes exist, each with its own empty-slot sentinel:
//!
//! ```text
//! < 1.13    {blockId, itemCount, itemDamage, nbtData?}     empty: blockId == -1
//! 1.13.x    {present?, itemId, itemCount, nbtData?}         empty: itemId == -1 or present == false
//! >= 1.14   {present, itemId, itemCount, nbtData?}          empty: present == false
//! ```

use mc_item_data::Edition;
use mc_item_nbt::NbtRoot;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::ItemContext;
use crate::era::Era;
use crate::error::ItemError;
use crate::item::Item;

/// Empty-slot sentinel id used by pre-1.14 slots.
pub const EMPTY_SLOT_ID: i32 = -1;

/// A Java slot as handed over by the packet layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotchItem {
    /// Pre-1.13 slot, keyed by `blockId`.
    Legacy(LegacySlot),
    /// 1.13+ slot.
    Modern(ModernSlot),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySlot {
    pub block_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_damage: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbt_data: Option<NbtRoot>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModernSlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbt_data: Option<NbtRoot>,
}

impl ItemContext {
    /// Encode `item` (or an empty slot) in this version's Java slot shape.
    /// `nbtData` is only emitted when the tree has entries.
    pub fn to_notch(&self, item: Option<&Item>) -> Result<NotchItem, ItemError> {
        self.require_java("to_notch")?;

        let slot = if self.era().is_flattened() {
            NotchItem::Modern(match item {
                None => ModernSlot {
                    present: Some(false),
                    ..ModernSlot::default()
                },
                Some(item) => ModernSlot {
                    present: Some(true),
                    item_id: Some(item.item_type),
                    item_count: Some(item.count),
                    nbt_data: item.nbt_if_present().cloned(),
                },
            })
        } else {
            NotchItem::Legacy(match item {
                None => LegacySlot {
                    block_id: EMPTY_SLOT_ID,
                    ..LegacySlot::default()
                },
                Some(item) => LegacySlot {
                    block_id: item.item_type,
                    item_count: Some(item.count),
                    item_damage: Some(item.metadata),
                    nbt_data: item.nbt_if_present().cloned(),
                },
            })
        };
        Ok(slot)
    }

    /// Decode a Java slot. `Ok(None)` is an empty slot; a slot whose shape
    /// belongs to another era is an error.
    pub fn from_notch(&self, slot: &NotchItem) -> Result<Option<Item>, ItemError> {
        self.require_java("from_notch")?;

        let item = match (self.era(), slot) {
            (Era::Modern, NotchItem::Modern(slot)) => {
                if slot.present == Some(false) {
                    None
                } else {
                    Some(self.from_modern_slot(slot)?)
                }
            }
            (Era::Flattening, NotchItem::Modern(slot)) => {
                if slot.item_id == Some(EMPTY_SLOT_ID) || slot.present == Some(false) {
                    None
                } else {
                    Some(self.from_modern_slot(slot)?)
                }
            }
            (Era::PreCombat | Era::PreFlattening, NotchItem::Legacy(slot)) => {
                if slot.block_id == EMPTY_SLOT_ID {
                    None
                } else {
                    let count = slot.item_count.ok_or(ItemError::MissingField("itemCount"))?;
                    Some(self.create(
                        slot.block_id,
                        count,
                        slot.item_damage,
                        slot.nbt_data.clone(),
                    )?)
                }
            }
            (era, _) => {
                return Err(ItemError::SlotShape {
                    version: self.version(),
                    expected: if era.is_flattened() {
                        "{present, itemId, itemCount}"
                    } else {
                        "{blockId, itemCount, itemDamage}"
                    },
                })
            }
        };

        if item.is_none() {
            debug!("Decoded empty Java slot for {}", self.version());
        }
        Ok(item)
    }

    fn from_modern_slot(&self, slot: &ModernSlot) -> Result<Item, ItemError> {
        let id = slot.item_id.ok_or(ItemError::MissingField("itemId"))?;
        let count = slot.item_count.ok_or(ItemError::MissingField("itemCount"))?;
        self.create(id, count, None, slot.nbt_data.clone())
    }

    fn require_java(&self, operation: &'static str) -> Result<(), ItemError> {
        if self.edition() == Edition::Java {
            Ok(())
        } else {
            Err(ItemError::UnsupportedVersion {
                version: self.version(),
                operation,
            })
        }
    }
}
