//! NBT error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NbtError {
    #[error("expected TAG_Compound at `{key}`, found {got}")]
    NotACompound { key: String, got: &'static str },

    #[error("unknown tag type: {0}")]
    UnknownTagType(String),

    #[error("value {value} out of range for {tag_type}")]
    OutOfRange { tag_type: &'static str, value: i64 },

    #[error("invalid typed NBT JSON: {0}")]
    InvalidJson(String),

    #[error("list holds {found} after {expected} elements")]
    MixedList {
        expected: &'static str,
        found: &'static str,
    },

    #[error("nesting too deep (limit: {limit})")]
    NestingTooDeep { limit: usize },
}
