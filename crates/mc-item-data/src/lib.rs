//! Version-indexed game data: items, blocks, enchantments and entities.
//!
//! Each [`VersionData`] answers lookups for exactly one game version, plus
//! ordered comparisons against other versions.

pub mod error;
pub mod table;
pub mod version;

pub use error::DataError;
pub use table::{
    EnchantmentDefinition, EntityDefinition, ItemDefinition, Variation, VersionData,
    BUNDLED_VERSIONS,
};
pub use version::{Edition, GameVersion};
