//! Minecraft item stacks across protocol versions.
//!
//! An [`Item`] is built through an [`ItemContext`] for one game version and
//! converted to and from that version's wire shape:
//!
//! - Java: [`ItemContext::to_notch`] / [`ItemContext::from_notch`]
//! - Bedrock 1.16.220+: [`ItemContext::to_bedrock`] / [`ItemContext::from_bedrock`]
//!
//! Custom name, repair cost, enchantments, durability and spawn-egg mob are
//! read and written through methods on [`Item`] that take the context.

pub mod accessors;
pub mod bedrock;
pub mod config;
pub mod context;
pub mod era;
pub mod error;
pub mod item;
pub mod notch;

pub use mc_item_data as data;
pub use mc_item_nbt as nbt;

pub use accessors::{CustomName, Enchant};
pub use bedrock::{BedrockExtra, BedrockItem, BedrockNbt};
pub use config::ContextConfig;
pub use context::ItemContext;
pub use era::Era;
pub use error::ItemError;
pub use item::Item;
pub use notch::{LegacySlot, ModernSlot, NotchItem};
