//! Domain properties layered over the item's NBT tree.
//!
//! Each submodule adds getter/setter methods to [`Item`](crate::Item).
//! Reads on the empty placeholder return `None` (or 0) instead of failing;
//! setters create the root compound and any intermediate compounds on first
//! write.

mod display;
mod durability;
mod enchants;
mod spawn_egg;

pub use display::CustomName;
pub use enchants::Enchant;
