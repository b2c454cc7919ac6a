//! Bedrock item descriptors (1.16.220 and later).
//!
//! The packet layer hands over a plain object mirroring
//! `NetworkItemStackDescriptor`:
//!
//! ```text
//! network_id            0 = empty slot
//! count
//! metadata
//! has_stack_id + stack_id
//! extra { has_nbt, nbt { version, nbt }, can_place_on, can_destroy, blocking_tick }
//! ```

use mc_item_data::Edition;
use mc_item_nbt::NbtRoot;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::ItemContext;
use crate::era::BEDROCK_STACK_IDS;
use crate::error::ItemError;
use crate::item::Item;

/// NBT format version written in `extra.nbt.version`.
pub const NBT_FORMAT_VERSION: u8 = 1;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BedrockItem {
    /// Item runtime id. 0 = air/empty.
    pub network_id: i32,
    pub count: u16,
    pub metadata: i32,
    pub has_stack_id: bool,
    /// Server-assigned id for inventory tracking. Only meaningful when
    /// `has_stack_id`.
    pub stack_id: u32,
    pub extra: BedrockExtra,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BedrockExtra {
    pub has_nbt: bool,
    pub nbt: BedrockNbt,
    /// Blocks this item can be placed on (adventure mode).
    pub can_place_on: Vec<String>,
    /// Blocks this item can destroy (adventure mode).
    pub can_destroy: Vec<String>,
    /// Shield blocking tick, only sent for shields.
    pub blocking_tick: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BedrockNbt {
    pub version: u8,
    /// Always present on the wire; `null` when the item has no tree.
    pub nbt: Option<NbtRoot>,
}

impl Default for BedrockNbt {
    fn default() -> Self {
        Self {
            version: NBT_FORMAT_VERSION,
            nbt: None,
        }
    }
}

impl BedrockItem {
    pub fn is_empty(&self) -> bool {
        self.network_id == 0
    }
}

impl ItemContext {
    /// Encode `item` as a Bedrock descriptor. `None` encodes the empty slot.
    pub fn to_bedrock(&self, item: Option<&Item>) -> Result<BedrockItem, ItemError> {
        self.require_stack_ids("to_bedrock")?;

        let Some(item) = item else {
            return Ok(BedrockItem::default());
        };
        Ok(BedrockItem {
            network_id: item.item_type,
            count: item.count,
            metadata: item.metadata,
            has_stack_id: item.unique_id > 0,
            stack_id: item.unique_id,
            extra: BedrockExtra {
                has_nbt: item.nbt.is_some(),
                nbt: BedrockNbt {
                    version: NBT_FORMAT_VERSION,
                    nbt: item.nbt.clone(),
                },
                ..BedrockExtra::default()
            },
        })
    }

    /// Decode a Bedrock descriptor. An empty slot decodes to `None`.
    ///
    /// The decoded item gets a fresh `unique_id` from this context; the
    /// descriptor's `stack_id` is the client's view and is not adopted.
    pub fn from_bedrock(&self, descriptor: &BedrockItem) -> Result<Option<Item>, ItemError> {
        self.require_stack_ids("from_bedrock")?;

        if descriptor.is_empty() {
            debug!("Decoded empty Bedrock slot");
            return Ok(None);
        }
        self.create(
            descriptor.network_id,
            descriptor.count,
            Some(descriptor.metadata),
            descriptor.extra.nbt.nbt.clone(),
        )
        .map(Some)
    }

    fn require_stack_ids(&self, operation: &'static str) -> Result<(), ItemError> {
        let version = self.version();
        if version.edition == Edition::Bedrock && self.data().is_newer_or_equal_to(BEDROCK_STACK_IDS) {
            return Ok(());
        }
        warn!("{operation} called on {version}, which has no Bedrock stack descriptors");
        Err(ItemError::UnsupportedVersion { version, operation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_item_nbt::{compound, NbtTag};
    use serde_json::json;

    use crate::accessors::Enchant;

    fn ctx() -> ItemContext {
        ItemContext::for_version("bedrock_1.16.220").unwrap()
    }

    #[test]
    fn encode_shape() {
        let ctx = ctx();
        let stone = ctx.create(1, 32, Some(3), None).unwrap();
        let value = serde_json::to_value(ctx.to_bedrock(Some(&stone)).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "network_id": 1,
                "count": 32,
                "metadata": 3,
                "has_stack_id": true,
                "stack_id": stone.unique_id,
                "extra": {
                    "has_nbt": false,
                    "nbt": { "version": 1, "nbt": null },
                    "can_place_on": [],
                    "can_destroy": [],
                    "blocking_tick": 0
                }
            })
        );
    }

    #[test]
    fn stack_id_follows_unique_id() {
        let ctx = ctx();
        let a = ctx.create_simple(316, 1).unwrap();
        let b = ctx.create_simple(316, 1).unwrap();
        let da = ctx.to_bedrock(Some(&a)).unwrap();
        let db = ctx.to_bedrock(Some(&b)).unwrap();
        assert!(da.has_stack_id && db.has_stack_id);
        assert_eq!(da.stack_id, a.unique_id);
        assert!(db.stack_id > da.stack_id);

        let placeholder = ctx.to_bedrock(Some(&Item::placeholder())).unwrap();
        assert!(!placeholder.has_stack_id);
        assert_eq!(placeholder.stack_id, 0);
    }

    #[test]
    fn roundtrip_with_tree() {
        let ctx = ctx();
        let mut sword = ctx.create_simple(316, 1).unwrap();
        sword.set_custom_name("Frostbite").unwrap();
        sword.set_enchants(&ctx, &[Enchant::new("unbreaking", 2)]).unwrap();

        let descriptor = ctx.to_bedrock(Some(&sword)).unwrap();
        assert!(descriptor.extra.has_nbt);
        assert_eq!(descriptor.extra.nbt.version, 1);

        let back = ctx.from_bedrock(&descriptor).unwrap().unwrap();
        assert!(Item::equal(Some(&sword), Some(&back), true));
        assert_eq!(back.name, "diamond_sword");
        assert_eq!(back.custom_name().unwrap().as_str(), Some("Frostbite"));
        assert_ne!(back.unique_id, sword.unique_id);
    }

    #[test]
    fn roundtrip_through_json_text() {
        let ctx = ctx();
        let nbt = NbtRoot::new("", compound([("RepairCost", NbtTag::Int(3))]));
        let item = ctx.create(1, 8, Some(3), Some(nbt)).unwrap();
        let text = serde_json::to_string(&ctx.to_bedrock(Some(&item)).unwrap()).unwrap();
        let descriptor: BedrockItem = serde_json::from_str(&text).unwrap();
        let back = ctx.from_bedrock(&descriptor).unwrap().unwrap();
        assert!(Item::equal(Some(&item), Some(&back), true));
        assert_eq!(back.display_name, "Diorite");
        assert_eq!(back.block_id, Some(1));
        assert_eq!(back.repair_cost(), 3);
    }

    #[test]
    fn empty_slot() {
        let ctx = ctx();
        let descriptor = ctx.to_bedrock(None).unwrap();
        assert_eq!(descriptor.network_id, 0);
        assert!(!descriptor.has_stack_id);
        assert!(ctx.from_bedrock(&descriptor).unwrap().is_none());
    }

    #[test]
    fn sparse_descriptor_uses_defaults() {
        let ctx = ctx();
        let descriptor: BedrockItem =
            serde_json::from_value(json!({ "network_id": 316, "count": 1 })).unwrap();
        assert_eq!(descriptor.extra.nbt.version, 1);
        let sword = ctx.from_bedrock(&descriptor).unwrap().unwrap();
        assert_eq!(sword.name, "diamond_sword");
        assert!(sword.nbt.is_none());
    }

    #[test]
    fn older_bedrock_is_unsupported() {
        let ctx = ItemContext::for_version("bedrock_1.16.201").unwrap();
        assert!(matches!(
            ctx.to_bedrock(None),
            Err(ItemError::UnsupportedVersion { operation: "to_bedrock", .. })
        ));
        assert!(matches!(
            ctx.from_bedrock(&BedrockItem::default()),
            Err(ItemError::UnsupportedVersion { operation: "from_bedrock", .. })
        ));
    }

    #[test]
    fn java_is_unsupported() {
        let ctx = ItemContext::for_version("1.16.5").unwrap();
        assert!(ctx.to_bedrock(None).is_err());
    }
}
