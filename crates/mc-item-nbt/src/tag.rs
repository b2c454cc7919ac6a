//! NBT tag types and path access.

use std::collections::HashMap;

use crate::error::NbtError;

/// A compound tag: map of name -> tag.
pub type NbtCompound = HashMap<String, NbtTag>;

/// A named root compound (the root always has a name, often empty string).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NbtRoot {
    pub name: String,
    pub compound: NbtCompound,
}

impl NbtRoot {
    pub fn new(name: impl Into<String>, compound: NbtCompound) -> Self {
        Self {
            name: name.into(),
            compound,
        }
    }

    /// An unnamed root with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.compound.is_empty()
    }

    /// Follow `path` through nested compounds.
    ///
    /// Returns `None` as soon as a segment is missing or a non-final node is
    /// not a compound. An empty path yields `None`; the root itself is not a
    /// tag.
    pub fn get(&self, path: &[&str]) -> Option<&NbtTag> {
        let (last, parents) = path.split_last()?;
        let mut current = &self.compound;
        for key in parents {
            current = current.get(*key)?.as_compound()?;
        }
        current.get(*last)
    }

    /// Mutable variant of [`NbtRoot::get`].
    pub fn get_mut(&mut self, path: &[&str]) -> Option<&mut NbtTag> {
        let (last, parents) = path.split_last()?;
        let mut current = &mut self.compound;
        for key in parents {
            current = current.get_mut(*key)?.as_compound_mut()?;
        }
        current.get_mut(*last)
    }

    /// Walk `path`, creating empty compounds for missing segments, and return
    /// the compound at the end. An empty path returns the root compound.
    ///
    /// Fails if an existing node along the path is not a compound; that node
    /// is left untouched.
    pub fn ensure_compound(&mut self, path: &[&str]) -> Result<&mut NbtCompound, NbtError> {
        let mut current = &mut self.compound;
        for key in path {
            let node = current
                .entry((*key).to_string())
                .or_insert_with(|| NbtTag::Compound(NbtCompound::new()));
            let got = node.type_name();
            current = node
                .as_compound_mut()
                .ok_or_else(|| NbtError::NotACompound {
                    key: (*key).to_string(),
                    got,
                })?;
        }
        Ok(current)
    }

    /// Same entries as `other`, compared with [`NbtTag::structurally_eq`].
    /// Root names are not compared.
    pub fn same_entries(&self, other: &NbtRoot) -> bool {
        compounds_eq(&self.compound, &other.compound)
    }

    /// Insert `tag` under `key` inside the compound at `path`, creating
    /// intermediate compounds as needed.
    pub fn insert_at(&mut self, path: &[&str], key: &str, tag: NbtTag) -> Result<(), NbtError> {
        self.ensure_compound(path)?.insert(key.to_string(), tag);
        Ok(())
    }
}

/// Represents any NBT value.
#[derive(Debug, Clone, PartialEq)]
pub enum NbtTag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Vec<NbtTag>),
    Compound(NbtCompound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl NbtTag {
    /// Type name used in the typed JSON form (`"int"`, `"compound"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            NbtTag::Byte(_) => "byte",
            NbtTag::Short(_) => "short",
            NbtTag::Int(_) => "int",
            NbtTag::Long(_) => "long",
            NbtTag::Float(_) => "float",
            NbtTag::Double(_) => "double",
            NbtTag::ByteArray(_) => "byteArray",
            NbtTag::String(_) => "string",
            NbtTag::List(_) => "list",
            NbtTag::Compound(_) => "compound",
            NbtTag::IntArray(_) => "intArray",
            NbtTag::LongArray(_) => "longArray",
        }
    }

    /// Any integral tag widened to `i64`. Item data written by different
    /// tools stores the same field as byte, short or int.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            NbtTag::Byte(v) => Some(i64::from(*v)),
            NbtTag::Short(v) => Some(i64::from(*v)),
            NbtTag::Int(v) => Some(i64::from(*v)),
            NbtTag::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            NbtTag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&NbtCompound> {
        match self {
            NbtTag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut NbtCompound> {
        match self {
            NbtTag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[NbtTag]> {
        match self {
            NbtTag::List(v) => Some(v),
            _ => None,
        }
    }

    /// Tree equality with floats compared by bit pattern, so a NaN leaf
    /// equals the same NaN and every tag equals its clone. The derived
    /// `PartialEq` follows IEEE rules instead.
    pub fn structurally_eq(&self, other: &NbtTag) -> bool {
        match (self, other) {
            (NbtTag::Float(a), NbtTag::Float(b)) => a.to_bits() == b.to_bits(),
            (NbtTag::Double(a), NbtTag::Double(b)) => a.to_bits() == b.to_bits(),
            (NbtTag::List(a), NbtTag::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structurally_eq(y))
            }
            (NbtTag::Compound(a), NbtTag::Compound(b)) => compounds_eq(a, b),
            (a, b) => a == b,
        }
    }
}

/// [`NbtTag::structurally_eq`] over two compounds. Key order never matters.
pub fn compounds_eq(a: &NbtCompound, b: &NbtCompound) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(key, tag)| b.get(key).is_some_and(|other| tag.structurally_eq(other)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword_root() -> NbtRoot {
        let mut display = NbtCompound::new();
        display.insert("Name".into(), NbtTag::String("Excalibur".into()));
        let mut c = NbtCompound::new();
        c.insert("display".into(), NbtTag::Compound(display));
        c.insert("Damage".into(), NbtTag::Int(12));
        NbtRoot::new("", c)
    }

    #[test]
    fn accessors() {
        assert_eq!(NbtTag::String("hello".into()).as_string(), Some("hello"));
        assert_eq!(NbtTag::Int(5).as_string(), None);
        assert_eq!(NbtTag::Int(5).type_name(), "int");
        assert_eq!(NbtTag::LongArray(vec![]).type_name(), "longArray");
    }

    #[test]
    fn integer_widening() {
        assert_eq!(NbtTag::Byte(-3).as_integer(), Some(-3));
        assert_eq!(NbtTag::Short(300).as_integer(), Some(300));
        assert_eq!(NbtTag::Long(1 << 40).as_integer(), Some(1 << 40));
        assert_eq!(NbtTag::Float(1.0).as_integer(), None);
    }

    #[test]
    fn get_follows_nested_path() {
        let root = sword_root();
        assert_eq!(
            root.get(&["display", "Name"]).and_then(NbtTag::as_string),
            Some("Excalibur")
        );
        assert_eq!(root.get(&["Damage"]).and_then(NbtTag::as_integer), Some(12));
        assert!(root.get(&["display", "Lore"]).is_none());
        // Walking through a leaf yields nothing rather than panicking.
        assert!(root.get(&["Damage", "value"]).is_none());
        assert!(root.get(&[]).is_none());
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut root = sword_root();
        *root.get_mut(&["Damage"]).unwrap() = NbtTag::Int(0);
        assert_eq!(root.get(&["Damage"]), Some(&NbtTag::Int(0)));
    }

    #[test]
    fn ensure_compound_creates_intermediates() {
        let mut root = NbtRoot::empty();
        root.ensure_compound(&["display"])
            .unwrap()
            .insert("Name".into(), NbtTag::String("Bob".into()));
        assert_eq!(
            root.get(&["display", "Name"]).and_then(NbtTag::as_string),
            Some("Bob")
        );

        root.insert_at(&["BlockEntityTag", "Items"], "Count", NbtTag::Byte(1))
            .unwrap();
        assert_eq!(
            root.get(&["BlockEntityTag", "Items", "Count"]),
            Some(&NbtTag::Byte(1))
        );
    }

    #[test]
    fn ensure_compound_keeps_existing_entries() {
        let mut root = sword_root();
        root.ensure_compound(&["display"])
            .unwrap()
            .insert("Lore".into(), NbtTag::List(vec![]));
        assert_eq!(
            root.get(&["display", "Name"]).and_then(NbtTag::as_string),
            Some("Excalibur")
        );
    }

    #[test]
    fn ensure_compound_rejects_leaf() {
        let mut root = sword_root();
        let err = root.ensure_compound(&["Damage", "inner"]).unwrap_err();
        assert!(matches!(
            err,
            NbtError::NotACompound { ref key, got: "int" } if key == "Damage"
        ));
        assert_eq!(root.get(&["Damage"]), Some(&NbtTag::Int(12)));
    }

    #[test]
    fn nan_leaves_equal_their_clone() {
        let mut c = sword_root().compound;
        c.insert("F".into(), NbtTag::Float(f32::NAN));
        c.insert("D".into(), NbtTag::List(vec![NbtTag::Double(f64::NAN)]));
        let root = NbtRoot::new("", c);
        let copy = root.clone();
        assert_ne!(root, copy);
        assert!(root.same_entries(&copy));

        let mut other = copy.clone();
        other.compound.insert("F".into(), NbtTag::Float(1.0));
        assert!(!root.same_entries(&other));
    }

    #[test]
    fn same_entries_ignores_root_name_and_key_order() {
        let a = sword_root();
        let mut b = NbtRoot::new("tag", NbtCompound::new());
        b.compound.insert("Damage".into(), NbtTag::Int(12));
        b.compound.insert("display".into(), a.compound["display"].clone());
        assert!(a.same_entries(&b));
        b.compound.insert("Extra".into(), NbtTag::Byte(1));
        assert!(!a.same_entries(&b));
    }

    #[test]
    fn empty_root() {
        assert!(NbtRoot::empty().is_empty());
        assert!(!sword_root().is_empty());
    }
}
