//! The `Kind`-discriminated JSON interchange format.
//!
//! Encoding writes a node's `Kind` plus its own fields. Decoding reads
//! `Kind` before anything else and dispatches to the concrete shape, so a
//! `PropertySignature` and a `PropertyDeclaration` with identical fields
//! still decode to different nodes. Every nested node checks its own
//! `Kind` as well, so a foreign kind is rejected at any depth.
//!
//! [`from_json`] accepts documents nested up to [`MAX_NESTING`] levels and
//! decodes them on a dedicated stack, so any tree the parser produces under
//! its default depth limit reads back.

use crate::node::{AstNode, Modifier};
use crate::syntax_kind::SyntaxKind;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name of the discriminator field.
pub const KIND_FIELD: &str = "Kind";

/// Deepest array/object nesting [`from_json`] accepts.
pub const MAX_NESTING: usize = 4096;

/// Stack reserved for decoding one document of up to [`MAX_NESTING`] levels.
const DECODE_STACK: usize = 64 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum InterchangeError {
    #[error("node has no integer `Kind` field")]
    MissingKind,
    #[error("unknown syntax kind {0}")]
    UnknownKind(u64),
    #[error("kind {kind:?} is not a valid {expected}")]
    UnexpectedKind { kind: SyntaxKind, expected: &'static str },
    #[error("document nests deeper than {0} levels")]
    TooDeep(usize),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Read the discriminator of an encoded node.
pub fn read_kind(value: &Value) -> Result<SyntaxKind, InterchangeError> {
    let raw = value
        .get(KIND_FIELD)
        .and_then(Value::as_u64)
        .ok_or(InterchangeError::MissingKind)?;
    u16::try_from(raw)
        .ok()
        .and_then(SyntaxKind::from_u16)
        .ok_or(InterchangeError::UnknownKind(raw))
}

/// Decode the `Kind` of a `T`, rejecting kinds `T` cannot carry.
pub fn deserialize_node_kind<'de, T, D>(deserializer: D) -> Result<SyntaxKind, D::Error>
where
    T: AstNode,
    D: Deserializer<'de>,
{
    let kind = SyntaxKind::deserialize(deserializer)?;
    if T::accepts(kind) {
        Ok(kind)
    } else {
        Err(D::Error::custom(InterchangeError::UnexpectedKind {
            kind,
            expected: short_type_name::<T>(),
        }))
    }
}

/// Decode a `Modifiers` list; every entry must be a modifier keyword.
pub fn deserialize_modifiers<'de, D>(deserializer: D) -> Result<Option<Vec<Modifier>>, D::Error>
where
    D: Deserializer<'de>,
{
    let modifiers = Option::<Vec<Modifier>>::deserialize(deserializer)?;
    match modifiers.iter().flatten().find(|m| !m.kind.is_modifier_kind()) {
        Some(bad) => Err(D::Error::custom(InterchangeError::UnexpectedKind {
            kind: bad.kind,
            expected: "Modifier",
        })),
        None => Ok(modifiers),
    }
}

/// Decode the `Operator` of a type operator: `keyof`, `unique` or `readonly`.
pub fn deserialize_type_operator<'de, D>(deserializer: D) -> Result<SyntaxKind, D::Error>
where
    D: Deserializer<'de>,
{
    let operator = SyntaxKind::deserialize(deserializer)?;
    match operator {
        SyntaxKind::KeyOfKeyword | SyntaxKind::UniqueKeyword | SyntaxKind::ReadonlyKeyword => Ok(operator),
        _ => Err(D::Error::custom(InterchangeError::UnexpectedKind {
            kind: operator,
            expected: "type operator",
        })),
    }
}

pub fn to_value<T: AstNode + Serialize>(node: &T) -> Result<Value, InterchangeError> {
    Ok(serde_json::to_value(node)?)
}

/// Decode a node of type `T`, rejecting a `Kind` that `T` cannot carry.
pub fn from_value<T: AstNode + DeserializeOwned>(value: Value) -> Result<T, InterchangeError> {
    let kind = read_kind(&value)?;
    if !T::accepts(kind) {
        return Err(InterchangeError::UnexpectedKind {
            kind,
            expected: short_type_name::<T>(),
        });
    }
    Ok(serde_json::from_value(value)?)
}

pub fn to_json<T: AstNode + Serialize>(node: &T) -> Result<String, InterchangeError> {
    Ok(serde_json::to_string(node)?)
}

pub fn to_json_pretty<T: AstNode + Serialize>(node: &T) -> Result<String, InterchangeError> {
    Ok(serde_json::to_string_pretty(node)?)
}

pub fn from_json<T: AstNode + DeserializeOwned>(json: &str) -> Result<T, InterchangeError> {
    let depth = nesting_depth(json);
    if depth > MAX_NESTING {
        return Err(InterchangeError::TooDeep(MAX_NESTING));
    }
    tsdecl_core::stack::with_stack(DECODE_STACK, || -> Result<T, InterchangeError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let value = Value::deserialize(&mut deserializer)?;
        deserializer.end()?;
        from_value(value)
    })
}

/// Deepest array/object nesting in `json`, ignoring brackets inside strings.
fn nesting_depth(json: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
