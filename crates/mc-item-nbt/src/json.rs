//! Typed JSON form of the tree.
//!
//! This is the shape carried in the `nbtData` field of wire item objects:
//!
//! ```text
//! root     {"type": "compound", "name": "", "value": {key: typed, ...}}
//! typed    {"type": "<type name>", "value": <payload>}
//! list     {"type": "<element type>", "value": [<payload>, ...]}
//! ```
//!
//! List elements are bare payloads since the element type is stated once on
//! the list, so every element must have that type; encoding a mixed list
//! fails. An empty list uses the element type `"end"`.
//!
//! Non-finite `float`/`double` payloads are written as the strings `"NaN"`,
//! `"Infinity"` and `"-Infinity"`, which JSON numbers cannot express.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

use crate::error::NbtError;
use crate::tag::{NbtCompound, NbtRoot, NbtTag};

/// Maximum nesting depth to prevent stack overflow.
const MAX_DEPTH: usize = 512;

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

/// Typed JSON for a root compound.
pub fn root_to_json(root: &NbtRoot) -> Result<Value, NbtError> {
    Ok(json!({
        "type": "compound",
        "name": root.name,
        "value": compound_payload(&root.compound)?,
    }))
}

/// Parse a root compound from its typed JSON. A missing `name` is read as "".
pub fn root_from_json(value: &Value) -> Result<NbtRoot, NbtError> {
    let obj = expect_object(value)?;
    let type_name = obj.get("type").and_then(Value::as_str).unwrap_or("compound");
    if type_name != "compound" {
        return Err(NbtError::InvalidJson(format!(
            "root must be a compound, got `{type_name}`"
        )));
    }
    let name = match obj.get("name") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(NbtError::InvalidJson(format!(
                "root name must be a string, got {other}"
            )))
        }
    };
    let payload = obj
        .get("value")
        .ok_or_else(|| NbtError::InvalidJson("root has no `value`".into()))?;
    let compound = parse_compound(payload, 0)?;
    Ok(NbtRoot { name, compound })
}

/// Typed JSON for a single tag.
pub fn tag_to_json(tag: &NbtTag) -> Result<Value, NbtError> {
    Ok(json!({ "type": tag.type_name(), "value": payload(tag)? }))
}

/// Parse a single tag from its typed JSON.
pub fn tag_from_json(value: &Value) -> Result<NbtTag, NbtError> {
    parse_typed(value, 0)
}

fn payload(tag: &NbtTag) -> Result<Value, NbtError> {
    match tag {
        NbtTag::List(items) => {
            let element_type = items.first().map_or("end", NbtTag::type_name);
            let values = items
                .iter()
                .map(|item| {
                    if item.type_name() != element_type {
                        return Err(NbtError::MixedList {
                            expected: element_type,
                            found: item.type_name(),
                        });
                    }
                    payload(item)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(json!({ "type": element_type, "value": values }))
        }
        NbtTag::Compound(c) => compound_payload(c),
        NbtTag::Float(v) => Ok(float_payload(f64::from(*v))),
        NbtTag::Double(v) => Ok(float_payload(*v)),
        // Remaining leaves and arrays share their plain form.
        other => Ok(other.simplify()),
    }
}

fn float_payload(v: f64) -> Value {
    if v.is_nan() {
        Value::from(NAN)
    } else if v == f64::INFINITY {
        Value::from(INFINITY)
    } else if v == f64::NEG_INFINITY {
        Value::from(NEG_INFINITY)
    } else {
        Value::from(v)
    }
}

fn compound_payload(compound: &NbtCompound) -> Result<Value, NbtError> {
    let map = compound
        .iter()
        .map(|(k, v)| tag_to_json(v).map(|typed| (k.clone(), typed)))
        .collect::<Result<Map<String, Value>, _>>()?;
    Ok(Value::Object(map))
}

fn parse_typed(value: &Value, depth: usize) -> Result<NbtTag, NbtError> {
    let obj = expect_object(value)?;
    let type_name = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| NbtError::InvalidJson(format!("missing `type` in {value}")))?;
    let payload = obj
        .get("value")
        .ok_or_else(|| NbtError::InvalidJson(format!("missing `value` in {value}")))?;
    parse_payload(type_name, payload, depth)
}

fn parse_payload(type_name: &str, value: &Value, depth: usize) -> Result<NbtTag, NbtError> {
    if depth > MAX_DEPTH {
        return Err(NbtError::NestingTooDeep { limit: MAX_DEPTH });
    }

    match type_name {
        "byte" => Ok(NbtTag::Byte(narrow("byte", integer(value)?)?)),
        "short" => Ok(NbtTag::Short(narrow("short", integer(value)?)?)),
        "int" => Ok(NbtTag::Int(narrow("int", integer(value)?)?)),
        "long" => Ok(NbtTag::Long(integer(value)?)),
        "float" => Ok(NbtTag::Float(float(value)? as f32)),
        "double" => Ok(NbtTag::Double(float(value)?)),
        "string" => value
            .as_str()
            .map(|s| NbtTag::String(s.to_string()))
            .ok_or_else(|| NbtError::InvalidJson(format!("expected string, got {value}"))),
        "byteArray" => array(value)?
            .iter()
            .map(|v| narrow("byte", integer(v)?))
            .collect::<Result<Vec<i8>, _>>()
            .map(NbtTag::ByteArray),
        "intArray" => array(value)?
            .iter()
            .map(|v| narrow("int", integer(v)?))
            .collect::<Result<Vec<i32>, _>>()
            .map(NbtTag::IntArray),
        "longArray" => array(value)?
            .iter()
            .map(integer)
            .collect::<Result<Vec<i64>, _>>()
            .map(NbtTag::LongArray),
        "list" => {
            let obj = expect_object(value)?;
            let element_type = obj.get("type").and_then(Value::as_str).unwrap_or("end");
            let items = match obj.get("value") {
                None | Some(Value::Null) => &[][..],
                Some(v) => array(v)?,
            };
            if element_type == "end" && !items.is_empty() {
                return Err(NbtError::InvalidJson(
                    "list of type `end` must be empty".into(),
                ));
            }
            items
                .iter()
                .map(|item| parse_payload(element_type, item, depth + 1))
                .collect::<Result<Vec<_>, _>>()
                .map(NbtTag::List)
        }
        "compound" => parse_compound(value, depth + 1).map(NbtTag::Compound),
        other => Err(NbtError::UnknownTagType(other.to_string())),
    }
}

fn parse_compound(value: &Value, depth: usize) -> Result<NbtCompound, NbtError> {
    if depth > MAX_DEPTH {
        return Err(NbtError::NestingTooDeep { limit: MAX_DEPTH });
    }
    expect_object(value)?
        .iter()
        .map(|(k, v)| parse_typed(v, depth + 1).map(|tag| (k.clone(), tag)))
        .collect()
}

fn expect_object(value: &Value) -> Result<&Map<String, Value>, NbtError> {
    value
        .as_object()
        .ok_or_else(|| NbtError::InvalidJson(format!("expected object, got {value}")))
}

fn array(value: &Value) -> Result<&[Value], NbtError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| NbtError::InvalidJson(format!("expected array, got {value}")))
}

fn integer(value: &Value) -> Result<i64, NbtError> {
    value
        .as_i64()
        .ok_or_else(|| NbtError::InvalidJson(format!("expected integer, got {value}")))
}

fn float(value: &Value) -> Result<f64, NbtError> {
    match value {
        Value::String(s) if s == NAN => Ok(f64::NAN),
        Value::String(s) if s == INFINITY => Ok(f64::INFINITY),
        Value::String(s) if s == NEG_INFINITY => Ok(f64::NEG_INFINITY),
        _ => value
            .as_f64()
            .ok_or_else(|| NbtError::InvalidJson(format!("expected number, got {value}"))),
    }
}

fn narrow<T: TryFrom<i64>>(tag_type: &'static str, value: i64) -> Result<T, NbtError> {
    T::try_from(value).map_err(|_| NbtError::OutOfRange { tag_type, value })
}

impl Serialize for NbtRoot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        root_to_json(self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NbtRoot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        root_from_json(&value).map_err(D::Error::custom)
    }
}

impl Serialize for NbtTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        tag_to_json(self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NbtTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        tag_from_json(&value).map_err(D::Error::custom)
    }
}
