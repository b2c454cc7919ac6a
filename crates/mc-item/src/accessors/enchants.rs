//! Enchantment lists.
//!
//! Pre-1.13 items keep `{id: short, lvl: short}` entries under `ench`, with
//! numeric ids from the version table. From 1.13 on the list is
//! `Enchantments` and ids are namespaced strings. Enchanted books always use
//! `StoredEnchantments`.

use mc_item_nbt::{compound, NbtTag};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::context::ItemContext;
use crate::error::ItemError;
use crate::item::Item;

const LEGACY_LIST: &str = "ench";
const LIST: &str = "Enchantments";
const STORED_LIST: &str = "StoredEnchantments";
const DAMAGE: &str = "Damage";
const ENCHANTED_BOOK: &str = "enchanted_book";
const NAMESPACE: &str = "minecraft:";

/// An enchantment by unnamespaced name, e.g. `sharpness` level 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enchant {
    pub name: String,
    pub lvl: i16,
}

impl Enchant {
    pub fn new(name: impl Into<String>, lvl: i16) -> Self {
        Self {
            name: name.into(),
            lvl,
        }
    }
}

/// One entry of a stored list, after simplification.
#[derive(Deserialize)]
struct StoredEnchant<Id> {
    id: Id,
    lvl: i16,
}

impl Item {
    /// Enchantments on this item. `None` on the placeholder, empty when the
    /// item has no list.
    pub fn enchants(&self, ctx: &ItemContext) -> Result<Option<Vec<Enchant>>, ItemError> {
        if self.is_placeholder() {
            return Ok(None);
        }
        let Some(nbt) = &self.nbt else {
            return Ok(Some(Vec::new()));
        };

        let enchants = if ctx.era().is_flattened() {
            let list = nbt.get(&[LIST]).or_else(|| nbt.get(&[STORED_LIST]));
            decode_list::<String>(list)?
                .into_iter()
                .map(|e| Enchant {
                    name: e.id.replacen(NAMESPACE, "", 1),
                    lvl: e.lvl,
                })
                .collect()
        } else {
            let stored = nbt.get(&[STORED_LIST]);
            let list = if self.name == ENCHANTED_BOOK && stored.is_some() {
                stored
            } else {
                nbt.get(&[LEGACY_LIST])
            };
            decode_list::<i16>(list)?
                .into_iter()
                .map(|e| {
                    let def = ctx
                        .data()
                        .enchantment_by_id(e.id)
                        .ok_or(ItemError::UnknownEnchantmentId(e.id))?;
                    Ok(Enchant {
                        name: def.name.clone(),
                        lvl: e.lvl,
                    })
                })
                .collect::<Result<Vec<_>, ItemError>>()?
        };
        Ok(Some(enchants))
    }

    /// Replace the enchantment list.
    ///
    /// Every name must exist in the version table; nothing is written if one
    /// does not. An empty slice leaves any existing list in place. On 1.13+
    /// writing a non-empty list to an item with durability also resets
    /// `Damage` to 0.
    pub fn set_enchants(&mut self, ctx: &ItemContext, enchants: &[Enchant]) -> Result<(), ItemError> {
        let flattened = ctx.era().is_flattened();
        let list_name = if self.name == ENCHANTED_BOOK {
            STORED_LIST
        } else if flattened {
            LIST
        } else {
            LEGACY_LIST
        };

        let entries = enchants
            .iter()
            .map(|e| {
                let def = ctx
                    .data()
                    .enchantment_by_name(&e.name)
                    .ok_or_else(|| ItemError::UnknownEnchantment(e.name.clone()))?;
                let id = if flattened {
                    NbtTag::String(format!("{NAMESPACE}{}", def.name))
                } else {
                    NbtTag::Short(def.id)
                };
                Ok(NbtTag::Compound(compound([
                    ("id", id),
                    ("lvl", NbtTag::Short(e.lvl)),
                ])))
            })
            .collect::<Result<Vec<_>, ItemError>>()?;

        let resets_damage =
            flattened && !entries.is_empty() && self.max_durability(ctx).is_some();

        let nbt = self.nbt_mut();
        if !entries.is_empty() {
            nbt.compound.insert(list_name.into(), NbtTag::List(entries));
        }
        if resets_damage {
            nbt.compound.insert(DAMAGE.into(), NbtTag::Int(0));
        }
        Ok(())
    }
}

fn decode_list<Id: DeserializeOwned>(
    list: Option<&NbtTag>,
) -> Result<Vec<StoredEnchant<Id>>, ItemError> {
    match list {
        None => Ok(Vec::new()),
        Some(tag) => serde_json::from_value(tag.simplify())
            .map_err(|e| ItemError::MalformedNbt(format!("enchantment list: {e}"))),
    }
}
