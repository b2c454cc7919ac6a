//! Item-level errors.

use mc_item_data::{DataError, GameVersion};
use mc_item_nbt::NbtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("{operation} is not supported on {version}")]
    UnsupportedVersion {
        version: GameVersion,
        operation: &'static str,
    },

    #[error("slot shape does not match {version}: expected {expected}")]
    SlotShape {
        version: GameVersion,
        expected: &'static str,
    },

    #[error("slot is missing field `{0}`")]
    MissingField(&'static str),

    #[error("unknown enchantment: {0}")]
    UnknownEnchantment(String),

    #[error("unknown enchantment id: {0}")]
    UnknownEnchantmentId(i16),

    #[error("no entity with legacy id {0}")]
    UnknownLegacyEntity(i32),

    #[error("spawn egg has no EntityTag id")]
    MissingEntityTag,

    #[error("malformed item NBT: {0}")]
    MalformedNbt(String),

    #[error("unique ids exhausted for this context")]
    UniqueIdsExhausted,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Nbt(#[from] NbtError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
