//! One loaded game version: its table, era and unique-id counter.

use std::sync::atomic::{AtomicU64, Ordering};

use mc_item_data::{Edition, GameVersion, ItemDefinition, VersionData};
use mc_item_nbt::NbtRoot;
use tracing::debug;

use crate::config::ContextConfig;
use crate::era::Era;
use crate::error::ItemError;
use crate::item::{Item, UNKNOWN_ITEM_NAME};

/// Everything an item needs from its protocol version.
///
/// Items, codecs and accessors never consult global state; each context has
/// its own table and its own id counter, so several versions can be served
/// side by side. The counter is atomic and the context is `Sync`, so it may be
/// shared across threads.
///
/// Ids are `u32`. The counter itself is 64-bit and only ever grows, so once
/// `u32::MAX` has been handed out every further `create` fails with
/// [`ItemError::UniqueIdsExhausted`] instead of wrapping back to 0.
#[derive(Debug)]
pub struct ItemContext {
    data: VersionData,
    era: Era,
    /// Next value handed out as `Item::unique_id`.
    next_unique_id: AtomicU64,
}

impl ItemContext {
    pub const DEFAULT_FIRST_UNIQUE_ID: u32 = 1000;

    /// Wrap a version table, starting ids at [`Self::DEFAULT_FIRST_UNIQUE_ID`].
    pub fn new(data: VersionData) -> Self {
        let era = Era::of(data.version());
        debug!("Loaded item context for {} ({era:?})", data.version());
        Self {
            data,
            era,
            next_unique_id: AtomicU64::new(u64::from(Self::DEFAULT_FIRST_UNIQUE_ID)),
        }
    }

    /// Context for a bundled version, e.g. `"1.12.2"` or `"bedrock_1.16.220"`.
    pub fn for_version(version: &str) -> Result<Self, ItemError> {
        Self::from_config(&ContextConfig::for_version(version))
    }

    pub fn from_config(config: &ContextConfig) -> Result<Self, ItemError> {
        config.validate()?;
        let data = match &config.data_file {
            Some(path) => {
                let data = VersionData::from_file(path)?;
                let wanted = GameVersion::parse(&config.version)?;
                if data.version() != wanted {
                    return Err(ItemError::InvalidConfig(format!(
                        "{} contains data for {}, not {wanted}",
                        path.display(),
                        data.version()
                    )));
                }
                data
            }
            None => VersionData::load(&config.version)?,
        };

        let ctx = Self::new(data);
        ctx.next_unique_id
            .store(u64::from(config.unique_id_start), Ordering::Relaxed);
        Ok(ctx)
    }

    pub fn data(&self) -> &VersionData {
        &self.data
    }

    pub fn version(&self) -> GameVersion {
        self.data.version()
    }

    pub fn edition(&self) -> Edition {
        self.data.version().edition
    }

    pub fn era(&self) -> Era {
        self.era
    }

    /// Hand out the next unique id. Never returns the same value twice for
    /// one context.
    pub fn next_unique_id(&self) -> Result<u32, ItemError> {
        let next = self.next_unique_id.fetch_add(1, Ordering::Relaxed);
        u32::try_from(next).map_err(|_| ItemError::UniqueIdsExhausted)
    }

    /// Build an item, resolving its name, display name, stack size and block
    /// id from the table. `metadata` defaults to 0.
    pub fn create(
        &self,
        item_type: i32,
        count: u16,
        metadata: Option<i32>,
        nbt: Option<NbtRoot>,
    ) -> Result<Item, ItemError> {
        let metadata = metadata.unwrap_or(0);
        let mut item = Item {
            item_type,
            count,
            metadata,
            nbt,
            ..Item::default()
        };

        match self.lookup(item_type) {
            Some(def) => {
                item.name = def.name.clone();
                item.display_name = def
                    .variations
                    .iter()
                    .find(|v| v.metadata == metadata)
                    .map_or_else(|| def.display_name.clone(), |v| v.display_name.clone());
                item.stack_size = def.stack_size;
                item.block_id = def.block_id;
            }
            None => {
                debug!("Unknown item id {item_type} for {}", self.version());
                item.name = UNKNOWN_ITEM_NAME.into();
                item.display_name = UNKNOWN_ITEM_NAME.into();
                item.stack_size = 1;
            }
        }

        item.unique_id = self.next_unique_id()?;
        Ok(item)
    }

    /// Shorthand for an item with no metadata and no tree.
    pub fn create_simple(&self, item_type: i32, count: u16) -> Result<Item, ItemError> {
        self.create(item_type, count, None, None)
    }

    /// Build an item by its unnamespaced name. `Ok(None)` if the table does
    /// not know the name.
    pub fn create_by_name(&self, name: &str, count: u16) -> Result<Option<Item>, ItemError> {
        match self.data.item_by_name(name) {
            Some(def) => self.create_simple(def.id, count).map(Some),
            None => Ok(None),
        }
    }

    /// Definition of the item's current name, if the table has one.
    pub fn definition_of(&self, item: &Item) -> Option<&ItemDefinition> {
        self.data.item_by_name(&item.name)
    }

    fn lookup(&self, id: i32) -> Option<&ItemDefinition> {
        match self.edition() {
            Edition::Java => self.data.find_item_or_block_by_id(id),
            Edition::Bedrock => self.data.find_item_by_id(id),
        }
    }
}
