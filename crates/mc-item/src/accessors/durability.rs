//! Tool and armor wear.

use mc_item_nbt::NbtTag;

use crate::context::ItemContext;
use crate::item::Item;

const DAMAGE: &str = "Damage";

impl Item {
    /// Durability points used so far: `Damage` on 1.13+, the metadata value
    /// before that. `None` on the placeholder.
    pub fn durability_used(&self, ctx: &ItemContext) -> Option<i32> {
        if self.is_placeholder() {
            return None;
        }
        if ctx.era().is_flattened() {
            let damage = self
                .nbt
                .as_ref()
                .and_then(|nbt| nbt.get(&[DAMAGE]))
                .and_then(NbtTag::as_integer)
                .and_then(|v| i32::try_from(v).ok());
            Some(damage.unwrap_or(0))
        } else {
            Some(self.metadata)
        }
    }

    pub fn set_durability_used(&mut self, ctx: &ItemContext, value: i32) {
        if ctx.era().is_flattened() {
            self.nbt_mut()
                .compound
                .insert(DAMAGE.into(), NbtTag::Int(value));
        } else {
            self.metadata = value;
        }
    }

    /// Total durability of this item kind, `None` if it never wears out or
    /// the table does not know it.
    pub fn max_durability(&self, ctx: &ItemContext) -> Option<u16> {
        ctx.definition_of(self).and_then(|def| def.max_durability)
    }
}
