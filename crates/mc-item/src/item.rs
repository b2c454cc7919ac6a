//! The version-independent item stack.

use mc_item_nbt::NbtRoot;

/// Name, display name and stack size of ids the table does not know.
pub const UNKNOWN_ITEM_NAME: &str = "unknown";

/// A single item stack.
///
/// Built through an [`ItemContext`](crate::ItemContext), which resolves the
/// derived fields from its version table and assigns `unique_id`. The derived
/// fields are a snapshot: changing `item_type` or `metadata` afterwards does
/// not re-resolve them.
#[derive(Debug, Clone, Default)]
pub struct Item {
    /// Numeric item id on Java, network runtime id on Bedrock.
    pub item_type: i32,
    pub count: u16,
    /// Damage/variant value. Pre-1.13 Java only; 0 elsewhere.
    pub metadata: i32,
    /// Structured metadata (enchantments, display name, damage, ...).
    pub nbt: Option<NbtRoot>,

    /// Unnamespaced identifier, e.g. `"diamond_sword"`.
    pub name: String,
    pub display_name: String,
    pub stack_size: u8,
    /// Block runtime id of placeable items (Bedrock).
    pub block_id: Option<i32>,

    /// Per-context identity used for inventory tracking and as the Bedrock
    /// stack id. 0 = the empty placeholder.
    pub unique_id: u32,
}

impl Item {
    /// The empty placeholder: no type, no count, no tree, `unique_id == 0`.
    /// Accessors return neutral defaults on it.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// True for [`Item::placeholder`]. An item built by hand with
    /// `unique_id == 0` but a real type or count is not a placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.unique_id == 0 && self.item_type == 0 && self.count == 0 && self.nbt.is_none()
    }

    /// Compare two optional items.
    ///
    /// Absent items are only equal to each other. Otherwise `item_type`,
    /// `metadata`, the tree and (when `match_stack_size`) `count` must match.
    /// `unique_id` and the derived display fields are ignored.
    pub fn equal(a: Option<&Item>, b: Option<&Item>, match_stack_size: bool) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.item_type == b.item_type
                    && (!match_stack_size || a.count == b.count)
                    && a.metadata == b.metadata
                    && same_nbt(a.nbt.as_ref(), b.nbt.as_ref())
            }
            _ => false,
        }
    }

    /// The tree if it holds anything.
    pub fn nbt_if_present(&self) -> Option<&NbtRoot> {
        self.nbt.as_ref().filter(|root| !root.is_empty())
    }

    /// Root compound, created empty on first write.
    pub(crate) fn nbt_mut(&mut self) -> &mut NbtRoot {
        self.nbt.get_or_insert_with(NbtRoot::empty)
    }
}

/// Structural tree comparison. A missing tree and an empty root compound both
/// mean "no metadata"; root names are not compared and float leaves compare
/// by bit pattern.
fn same_nbt(a: Option<&NbtRoot>, b: Option<&NbtRoot>) -> bool {
    let a = a.filter(|root| !root.is_empty());
    let b = b.filter(|root| !root.is_empty());
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same_entries(b),
        _ => false,
    }
}
