use serde::{Deserialize, Serialize};

use crate::error::KvError;

/// What a property holds: one scalar value or an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    Leaf(String),
    Block(Vec<Property>),
}

/// A named node in a key-value tree.
///
/// Names keep their original case but are compared case-insensitively by
/// every lookup. Siblings may share a name; their order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub payload: Payload,
}

/// Case folding used for every name comparison: full Unicode lowercase.
pub(crate) fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl Property {
    pub fn leaf(name: impl Into<String>, value: impl Into<String>) -> Self {
        Property {
            name: name.into(),
            payload: Payload::Leaf(value.into()),
        }
    }

    pub fn block(name: impl Into<String>, children: Vec<Property>) -> Self {
        Property {
            name: name.into(),
            payload: Payload::Block(children),
        }
    }

    pub fn empty_block(name: impl Into<String>) -> Self {
        Self::block(name, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Case-insensitive name comparison.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name == name || fold(&self.name) == fold(name)
    }

    pub(crate) fn name_matches_folded(&self, folded: &str) -> bool {
        fold(&self.name) == folded
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.payload, Payload::Leaf(_))
    }

    pub fn is_block(&self) -> bool {
        matches!(self.payload, Payload::Block(_))
    }

    /// The scalar value, or `None` for a block.
    pub fn value(&self) -> Option<&str> {
        match &self.payload {
            Payload::Leaf(v) => Some(v),
            Payload::Block(_) => None,
        }
    }

    pub fn children(&self) -> Option<&[Property]> {
        match &self.payload {
            Payload::Block(children) => Some(children),
            Payload::Leaf(_) => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Property>> {
        match &mut self.payload {
            Payload::Block(children) => Some(children),
            Payload::Leaf(_) => None,
        }
    }

    /// Number of children; always 0 for a leaf.
    pub fn len(&self) -> usize {
        self.children().map_or(0, <[Property]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the payload with a scalar value, dropping any children.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.payload = Payload::Leaf(value.into());
    }

    /// Append a child. Fails on a leaf: a node never holds both.
    pub fn push(&mut self, child: Property) -> Result<(), KvError> {
        match &mut self.payload {
            Payload::Block(children) => {
                children.push(child);
                Ok(())
            }
            Payload::Leaf(_) => Err(KvError::NotABlock {
                name: self.name.clone(),
            }),
        }
    }

    /// Remove every direct child called `name`, returning how many went.
    pub fn remove_all(&mut self, name: &str) -> usize {
        let key = fold(name);
        match &mut self.payload {
            Payload::Block(children) => {
                let before = children.len();
                children.retain(|c| !c.name_matches_folded(&key));
                before - children.len()
            }
            Payload::Leaf(_) => 0,
        }
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Property) -> bool,
    {
        if let Payload::Block(children) = &mut self.payload {
            children.retain(f);
        }
    }

    /// All direct children called `name`, in document order.
    pub fn find_children<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Property> + 'a {
        let key = fold(name);
        self.children()
            .unwrap_or(&[])
            .iter()
            .filter(move |c| c.name_matches_folded(&key))
    }

    /// The last direct child called `name`. Later definitions override
    /// earlier ones, so the last match is the effective one.
    pub fn find_key(&self, name: &str) -> Option<&Property> {
        self.find_children(name).last()
    }

    pub fn find_key_mut(&mut self, name: &str) -> Option<&mut Property> {
        let key = fold(name);
        self.children_mut()?
            .iter_mut()
            .rev()
            .find(|c| c.name_matches_folded(&key))
    }

    /// Like `find_key`, but only considers blocks.
    pub fn find_block(&self, name: &str) -> Option<&Property> {
        self.find_children(name).filter(|c| c.is_block()).last()
    }

    /// Interpret a leaf as a boolean: `1/0`, `true/false`, `yes/no`,
    /// `y/n` and `t/f`, ignoring case and surrounding whitespace.
    pub fn as_bool(&self) -> Option<bool> {
        let v = self.value()?.trim().to_ascii_lowercase();
        match v.as_str() {
            "1" | "true" | "yes" | "y" | "t" => Some(true),
            "0" | "false" | "no" | "n" | "f" => Some(false),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        self.value()?.trim().parse().ok()
    }

    pub fn as_float(&self) -> Option<f64> {
        self.value()?.trim().parse().ok()
    }
}
