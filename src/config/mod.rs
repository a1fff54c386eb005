// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Property;
use crate::error::KvError;
use crate::export;
use crate::parser::{ParseOptions, Parser};
use crate::query;

mod access;
mod conversion;
mod validation;

/// A parsed key-value document with typed, path-based access.
///
/// Paths are written as `"`-separated expressions, e.g.
/// `Item"Exporting"Inputs`. When a path matches several nodes the last one
/// wins, since later definitions override earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KvConfig {
    forest: Vec<Property>,
}

impl KvConfig {
    /// Parse a config from already-read text lines.
    ///
    /// # Example
    /// ```
    /// # use kvtree::KvConfig;
    /// let config = KvConfig::from_lines(["Music { Volume 0.5 }"]).unwrap();
    /// let volume: f64 = config.get("Music\"Volume").unwrap();
    /// assert_eq!(volume, 0.5);
    /// ```
    pub fn from_lines<L>(lines: L) -> Result<Self, KvError>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        Self::from_lines_with(lines, &ParseOptions::default())
    }

    pub fn from_lines_with<L>(lines: L, options: &ParseOptions) -> Result<Self, KvError>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let forest = Parser::with_options(lines, options).parse_document()?;
        Ok(Self { forest })
    }

    /// Parse a config held in one string (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, KvError> {
        Self::from_lines(content.lines())
    }

    pub fn from_forest(forest: Vec<Property>) -> Self {
        Self { forest }
    }

    pub fn forest(&self) -> &[Property] {
        &self.forest
    }

    pub fn forest_mut(&mut self) -> &mut Vec<Property> {
        &mut self.forest
    }

    pub fn into_forest(self) -> Vec<Property> {
        self.forest
    }

    pub fn to_lines(&self) -> Vec<String> {
        export::serialize(&self.forest)
    }

    /// Every node matching `path`, in document order.
    pub fn find_all(&self, path: &str) -> Vec<&Property> {
        query::find_all_expr(&self.forest, path)
    }
}

#[cfg(test)]
mod tests;
