//! NBT (Named Binary Tag) tree used for item metadata.
//!
//! Provides:
//! - **Tag tree**: [`NbtTag`] / [`NbtRoot`] with safe path reads and lazy
//!   creation of intermediate compounds on write.
//! - **Simplify**: plain nested values with the type markers dropped.
//! - **Typed JSON**: the `{"type": .., "value": ..}` form carried by wire item
//!   objects, also exposed through `Serialize`/`Deserialize`.

pub mod error;
pub mod json;
mod simplify;
pub mod tag;

pub use error::NbtError;
pub use simplify::simplify;
pub use tag::{compounds_eq, NbtCompound, NbtRoot, NbtTag};

/// Build a compound from `(key, tag)` pairs.
pub fn compound<K, I>(entries: I) -> NbtCompound
where
    K: Into<String>,
    I: IntoIterator<Item = (K, NbtTag)>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_builder() {
        let c = compound([("a", NbtTag::Int(1)), ("b", NbtTag::Byte(2))]);
        assert_eq!(c.len(), 2);
        assert_eq!(c["a"], NbtTag::Int(1));
    }

    #[test]
    fn typed_json_and_simplify_agree_on_leaves() {
        let root = NbtRoot::new(
            "",
            compound([("RepairCost", NbtTag::Int(3)), ("Name", NbtTag::String("x".into()))]),
        );
        let typed = json::root_to_json(&root).unwrap();
        let plain = simplify(&root);
        assert_eq!(typed["value"]["RepairCost"]["value"], plain["RepairCost"]);
        assert_eq!(typed["value"]["Name"]["value"], plain["Name"]);
    }

    #[test]
    fn structural_equality_ignores_insertion_order() {
        let a = NbtRoot::new("", compound([("x", NbtTag::Int(1)), ("y", NbtTag::Int(2))]));
        let b = NbtRoot::new("", compound([("y", NbtTag::Int(2)), ("x", NbtTag::Int(1))]));
        assert_eq!(a, b);
    }
}
