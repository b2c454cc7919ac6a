//! Per-version lookup table for items, blocks, enchantments and entities.
//!
//! Loaded from JSON in the minecraft-data layout. A handful of versions are
//! bundled with the crate (see [`BUNDLED_VERSIONS`]); anything else can be
//! supplied through [`VersionData::from_json`] or [`VersionData::from_file`].

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::DataError;
use crate::version::GameVersion;

const JAVA_1_8_9: &str = include_str!("../data/java_1.8.9.json");
const JAVA_1_12_2: &str = include_str!("../data/java_1.12.2.json");
const JAVA_1_13_2: &str = include_str!("../data/java_1.13.2.json");
const JAVA_1_16_5: &str = include_str!("../data/java_1.16.5.json");
const BEDROCK_1_16_201: &str = include_str!("../data/bedrock_1.16.201.json");
const BEDROCK_1_16_220: &str = include_str!("../data/bedrock_1.16.220.json");

/// Version strings with data shipped in the crate.
pub const BUNDLED_VERSIONS: &[&str] = &[
    "1.8.9",
    "1.12.2",
    "1.13.2",
    "1.16.5",
    "bedrock_1.16.201",
    "bedrock_1.16.220",
];

/// Metadata-keyed display name override (e.g. wool colours).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    pub metadata: i32,
    pub display_name: String,
}

/// Properties for a single item (or block, on Java).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    pub id: i32,
    /// Unnamespaced identifier, e.g. `"diamond_sword"`.
    pub name: String,
    pub display_name: String,
    #[serde(default = "default_stack_size")]
    pub stack_size: u8,
    /// Durability of tools and armor. `None` for items that never wear out.
    #[serde(default)]
    pub max_durability: Option<u16>,
    /// Block runtime ID for placeable items (Bedrock).
    #[serde(default)]
    pub block_id: Option<i32>,
    #[serde(default)]
    pub variations: Vec<Variation>,
}

fn default_stack_size() -> u8 {
    64
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnchantmentDefinition {
    pub id: i16,
    pub name: String,
    pub display_name: String,
    pub max_level: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDefinition {
    pub id: i32,
    /// Numeric entity id used by pre-1.9 spawn egg damage values.
    #[serde(default)]
    pub internal_id: Option<i32>,
    pub name: String,
    pub display_name: String,
}

#[derive(Deserialize)]
struct RawVersionData {
    version: String,
    items: Vec<ItemDefinition>,
    #[serde(default)]
    blocks: Vec<ItemDefinition>,
    #[serde(default)]
    enchantments: Vec<EnchantmentDefinition>,
    #[serde(default)]
    entities: Vec<EntityDefinition>,
}

/// Lookup table for one game version.
#[derive(Debug)]
pub struct VersionData {
    version: GameVersion,
    items_by_id: HashMap<i32, ItemDefinition>,
    item_ids_by_name: HashMap<String, i32>,
    blocks_by_id: HashMap<i32, ItemDefinition>,
    enchantments_by_id: HashMap<i16, EnchantmentDefinition>,
    enchantment_ids_by_name: HashMap<String, i16>,
    entities: Vec<EntityDefinition>,
}

impl VersionData {
    /// Load bundled data for `version` (e.g. `"1.12.2"`, `"bedrock_1.16.220"`).
    pub fn load(version: &str) -> Result<Self, DataError> {
        let parsed = GameVersion::parse(version)?;
        let json = match parsed.to_string().as_str() {
            "1.8.9" => JAVA_1_8_9,
            "1.12.2" => JAVA_1_12_2,
            "1.13.2" => JAVA_1_13_2,
            "1.16.5" => JAVA_1_16_5,
            "bedrock_1.16.201" => BEDROCK_1_16_201,
            "bedrock_1.16.220" => BEDROCK_1_16_220,
            _ => return Err(DataError::UnknownVersion(version.to_string())),
        };
        Self::from_json(json)
    }

    /// Build a table from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let raw: RawVersionData = serde_json::from_str(json)?;
        let version = GameVersion::parse(&raw.version)?;

        let mut items_by_id = HashMap::with_capacity(raw.items.len());
        let mut item_ids_by_name = HashMap::with_capacity(raw.items.len());
        for item in raw.items {
            item_ids_by_name.insert(item.name.clone(), item.id);
            items_by_id.insert(item.id, item);
        }

        let blocks_by_id = raw.blocks.into_iter().map(|b| (b.id, b)).collect();

        let mut enchantments_by_id = HashMap::with_capacity(raw.enchantments.len());
        let mut enchantment_ids_by_name = HashMap::with_capacity(raw.enchantments.len());
        for ench in raw.enchantments {
            enchantment_ids_by_name.insert(ench.name.clone(), ench.id);
            enchantments_by_id.insert(ench.id, ench);
        }

        Ok(Self {
            version,
            items_by_id,
            item_ids_by_name,
            blocks_by_id,
            enchantments_by_id,
            enchantment_ids_by_name,
            entities: raw.entities,
        })
    }

    /// Read a table from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn version(&self) -> GameVersion {
        self.version
    }

    pub fn is_older_than(&self, other: GameVersion) -> bool {
        self.version.is_older_than(other)
    }

    pub fn is_newer_or_equal_to(&self, other: GameVersion) -> bool {
        self.version.is_newer_or_equal_to(other)
    }

    pub fn find_item_by_id(&self, id: i32) -> Option<&ItemDefinition> {
        self.items_by_id.get(&id)
    }

    pub fn find_block_by_id(&self, id: i32) -> Option<&ItemDefinition> {
        self.blocks_by_id.get(&id)
    }

    /// Item definition for `id`, falling back to the block with that id.
    pub fn find_item_or_block_by_id(&self, id: i32) -> Option<&ItemDefinition> {
        self.find_item_by_id(id).or_else(|| self.find_block_by_id(id))
    }

    pub fn item_by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.item_ids_by_name
            .get(name)
            .and_then(|id| self.items_by_id.get(id))
    }

    pub fn enchantment_by_id(&self, id: i16) -> Option<&EnchantmentDefinition> {
        self.enchantments_by_id.get(&id)
    }

    pub fn enchantment_by_name(&self, name: &str) -> Option<&EnchantmentDefinition> {
        self.enchantment_ids_by_name
            .get(name)
            .and_then(|id| self.enchantments_by_id.get(id))
    }

    /// Entity whose legacy internal id is `internal_id` (pre-1.9 spawn eggs).
    pub fn entity_by_internal_id(&self, internal_id: i32) -> Option<&EntityDefinition> {
        self.entities
            .iter()
            .find(|e| e.internal_id == Some(internal_id))
    }

}
