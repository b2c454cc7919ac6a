//! Item schema eras.
//!
//! Every version-dependent branch in the codecs and accessors keys off an
//! [`Era`], resolved once when an [`ItemContext`](crate::ItemContext) is
//! loaded.

use mc_item_data::GameVersion;

/// 1.9: spawn eggs move their mob from the damage value into `EntityTag`.
pub const COMBAT_UPDATE: GameVersion = GameVersion::java(1, 9, 0);
/// 1.13: flattened ids, `present` slots, string enchantment ids, `Damage` tag.
pub const FLATTENING: GameVersion = GameVersion::java(1, 13, 0);
/// 1.14: the `itemId: -1` empty-slot sentinel is gone.
pub const VILLAGE_AND_PILLAGE: GameVersion = GameVersion::java(1, 14, 0);
/// First Bedrock version whose item descriptor carries a stack id.
pub const BEDROCK_STACK_IDS: GameVersion = GameVersion::bedrock(1, 16, 220);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Before 1.9.
    PreCombat,
    /// 1.9 through 1.12.x.
    PreFlattening,
    /// 1.13.x.
    Flattening,
    /// 1.14 and later.
    Modern,
}

impl Era {
    /// Era of `version`. Only the dotted number matters, so Bedrock versions
    /// resolve the same way their Java namesakes do.
    pub fn of(version: GameVersion) -> Self {
        if version.is_older_than(COMBAT_UPDATE) {
            Era::PreCombat
        } else if version.is_older_than(FLATTENING) {
            Era::PreFlattening
        } else if version.is_older_than(VILLAGE_AND_PILLAGE) {
            Era::Flattening
        } else {
            Era::Modern
        }
    }

    /// 1.13 or later.
    pub fn is_flattened(self) -> bool {
        matches!(self, Era::Flattening | Era::Modern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(Era::of(GameVersion::java(1, 8, 9)), Era::PreCombat);
        assert_eq!(Era::of(GameVersion::java(1, 9, 0)), Era::PreFlattening);
        assert_eq!(Era::of(GameVersion::java(1, 12, 2)), Era::PreFlattening);
        assert_eq!(Era::of(GameVersion::java(1, 13, 0)), Era::Flattening);
        assert_eq!(Era::of(GameVersion::java(1, 13, 2)), Era::Flattening);
        assert_eq!(Era::of(GameVersion::java(1, 14, 0)), Era::Modern);
        assert_eq!(Era::of(GameVersion::java(1, 16, 5)), Era::Modern);
    }

    #[test]
    fn bedrock_is_modern() {
        assert_eq!(Era::of(GameVersion::bedrock(1, 16, 220)), Era::Modern);
        assert!(Era::of(GameVersion::bedrock(1, 16, 201)).is_flattened());
    }

    #[test]
    fn flattened() {
        assert!(!Era::PreCombat.is_flattened());
        assert!(!Era::PreFlattening.is_flattened());
        assert!(Era::Flattening.is_flattened());
        assert!(Era::Modern.is_flattened());
    }
}
