//! Conversion of a typed tree into plain nested values.
//!
//! The result drops every type marker: compounds become JSON objects, lists
//! and arrays become JSON arrays, and numbers lose their width. Useful when a
//! caller only cares about the shape of the data (e.g. deserializing a list
//! of enchantment compounds straight into a struct with serde).

use serde_json::{Map, Value};

use crate::tag::{NbtCompound, NbtRoot, NbtTag};

/// Simplify a whole root compound. The root name is dropped.
pub fn simplify(root: &NbtRoot) -> Value {
    simplify_compound(&root.compound)
}

fn simplify_compound(compound: &NbtCompound) -> Value {
    let map: Map<String, Value> = compound
        .iter()
        .map(|(k, v)| (k.clone(), v.simplify()))
        .collect();
    Value::Object(map)
}

impl NbtTag {
    /// Plain value of this tag, see the module docs.
    pub fn simplify(&self) -> Value {
        match self {
            NbtTag::Byte(v) => Value::from(*v),
            NbtTag::Short(v) => Value::from(*v),
            NbtTag::Int(v) => Value::from(*v),
            NbtTag::Long(v) => Value::from(*v),
            NbtTag::Float(v) => Value::from(f64::from(*v)),
            NbtTag::Double(v) => Value::from(*v),
            NbtTag::ByteArray(v) => v.iter().copied().map(Value::from).collect(),
            NbtTag::String(v) => Value::String(v.clone()),
            NbtTag::List(v) => v.iter().map(NbtTag::simplify).collect(),
            NbtTag::Compound(v) => simplify_compound(v),
            NbtTag::IntArray(v) => v.iter().copied().map(Value::from).collect(),
            NbtTag::LongArray(v) => v.iter().copied().map(Value::from).collect(),
        }
    }
}
