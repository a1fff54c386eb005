// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::ast::{Payload, Property};
use crate::error::KvError;

/// The scalar held by a leaf, or a type error naming what was expected.
fn leaf_value<'a>(prop: &'a Property, expected: &str) -> Result<&'a str, KvError> {
    prop.value().ok_or_else(|| {
        KvError::type_error(
            format!("Expected {}, but '{}' is a block", expected, prop.name),
            "Give the property a quoted value instead of { ... }",
            401,
        )
    })
}

impl TryFrom<&Property> for String {
    type Error = KvError;

    fn try_from(prop: &Property) -> Result<Self, Self::Error> {
        leaf_value(prop, "string").map(str::to_string)
    }
}

impl TryFrom<&Property> for bool {
    type Error = KvError;

    fn try_from(prop: &Property) -> Result<Self, Self::Error> {
        let raw = leaf_value(prop, "boolean")?;
        prop.as_bool().ok_or_else(|| {
            KvError::type_error(
                format!("Expected boolean for '{}', got '{}'", prop.name, raw),
                "Use 1/0, true/false or yes/no",
                404,
            )
        })
    }
}

macro_rules! impl_try_from_number {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl TryFrom<&Property> for $ty {
                type Error = KvError;

                fn try_from(prop: &Property) -> Result<Self, Self::Error> {
                    let raw = leaf_value(prop, $kind)?;
                    raw.trim().parse::<$ty>().map_err(|e| {
                        KvError::type_error(
                            format!("Expected {} for '{}', got '{}' ({})", $kind, prop.name, raw, e),
                            concat!("Use a value that fits in ", stringify!($ty)),
                            402,
                        )
                    })
                }
            }
        )*
    };
}

impl_try_from_number! {
    i32 => "integer",
    i64 => "integer",
    u16 => "integer",
    u32 => "integer",
    u64 => "integer",
    usize => "integer",
    f32 => "number",
    f64 => "number",
}

/// Values of a block's children, in order. Every child must be a leaf.
impl TryFrom<&Property> for Vec<String> {
    type Error = KvError;

    fn try_from(prop: &Property) -> Result<Self, Self::Error> {
        block_children(prop)?
            .iter()
            .map(String::try_from)
            .collect()
    }
}

/// A block of leaves as an ordered map. A repeated name keeps its first
/// position but takes the later value.
impl TryFrom<&Property> for IndexMap<String, String> {
    type Error = KvError;

    fn try_from(prop: &Property) -> Result<Self, Self::Error> {
        let mut map = IndexMap::new();
        for child in block_children(prop)? {
            map.insert(child.name.clone(), String::try_from(child)?);
        }
        Ok(map)
    }
}

fn block_children(prop: &Property) -> Result<&[Property], KvError> {
    match &prop.payload {
        Payload::Block(children) => Ok(children),
        Payload::Leaf(value) => Err(KvError::type_error(
            format!("Expected block for '{}', got value '{}'", prop.name, value),
            "Wrap the entries in { ... }",
            405,
        )),
    }
}
