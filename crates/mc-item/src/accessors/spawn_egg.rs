//! Which mob a spawn egg spawns.

use mc_item_nbt::simplify;
use serde_json::Value;

use crate::context::ItemContext;
use crate::era::Era;
use crate::error::ItemError;
use crate::item::Item;

const SPAWN_EGG_SUFFIX: &str = "_spawn_egg";
const NAMESPACE: &str = "minecraft:";

impl Item {
    /// Mob name for a spawn egg, e.g. `"creeper"`.
    ///
    /// - before 1.9 the egg's metadata is the mob's legacy entity id;
    /// - 1.9 to 1.12 read `EntityTag.id`;
    /// - from 1.13 every mob has its own `<mob>_spawn_egg` item.
    ///
    /// `None` on the placeholder.
    pub fn spawn_egg_mob_name(&self, ctx: &ItemContext) -> Result<Option<String>, ItemError> {
        if self.is_placeholder() {
            return Ok(None);
        }
        let name = match ctx.era() {
            Era::PreCombat => ctx
                .data()
                .entity_by_internal_id(self.metadata)
                .map(|entity| entity.name.clone())
                .ok_or(ItemError::UnknownLegacyEntity(self.metadata))?,
            Era::PreFlattening => {
                let plain = self.nbt.as_ref().map(simplify);
                let id = plain
                    .as_ref()
                    .and_then(|v| v.get("EntityTag"))
                    .and_then(|tag| tag.get("id"))
                    .and_then(Value::as_str)
                    .ok_or(ItemError::MissingEntityTag)?;
                id.replacen(NAMESPACE, "", 1)
            }
            Era::Flattening | Era::Modern => self.name.replacen(SPAWN_EGG_SUFFIX, "", 1),
        };
        Ok(Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_item_nbt::{compound, NbtRoot, NbtTag};

    #[test]
    fn pre_combat_uses_metadata() {
        let ctx = ItemContext::for_version("1.8.9").unwrap();
        let egg = ctx.create(383, 1, Some(50), None).unwrap();
        assert_eq!(egg.spawn_egg_mob_name(&ctx).unwrap().as_deref(), Some("creeper"));

        let bogus = ctx.create(383, 1, Some(3), None).unwrap();
        assert!(matches!(
            bogus.spawn_egg_mob_name(&ctx),
            Err(ItemError::UnknownLegacyEntity(3))
        ));
    }

    #[test]
    fn pre_flattening_uses_entity_tag() {
        let ctx = ItemContext::for_version("1.12.2").unwrap();
        let entity_tag = compound([("id", NbtTag::String("minecraft:pig".into()))]);
        let nbt = NbtRoot::new("", compound([("EntityTag", NbtTag::Compound(entity_tag))]));
        let egg = ctx.create(383, 1, None, Some(nbt)).unwrap();
        assert_eq!(egg.spawn_egg_mob_name(&ctx).unwrap().as_deref(), Some("pig"));

        let bare = ctx.create_simple(383, 1).unwrap();
        assert!(matches!(
            bare.spawn_egg_mob_name(&ctx),
            Err(ItemError::MissingEntityTag)
        ));
    }

    #[test]
    fn flattened_uses_item_name() {
        let ctx = ItemContext::for_version("1.16.5").unwrap();
        let egg = ctx.create_by_name("zombie_spawn_egg", 1).unwrap().unwrap();
        assert_eq!(egg.spawn_egg_mob_name(&ctx).unwrap().as_deref(), Some("zombie"));

        let bedrock = ItemContext::for_version("bedrock_1.16.220").unwrap();
        let egg = bedrock.create_by_name("creeper_spawn_egg", 1).unwrap().unwrap();
        assert_eq!(egg.spawn_egg_mob_name(&bedrock).unwrap().as_deref(), Some("creeper"));
    }

    #[test]
    fn placeholder() {
        let ctx = ItemContext::for_version("1.8.9").unwrap();
        assert_eq!(Item::placeholder().spawn_egg_mob_name(&ctx).unwrap(), None);
    }
}
