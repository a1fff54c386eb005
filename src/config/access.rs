use log::debug;

use super::*;

impl KvConfig {
    /// Get a typed value from the configuration.
    ///
    /// # Examples
    /// ```
    /// # use kvtree::KvConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = KvConfig::from_str("Server { Host localhost Port 8080 Debug yes }")?;
    /// let host: String = config.get("Server\"Host")?;
    /// let port: u16 = config.get("server\"port")?;
    /// let debug: bool = config.get("Server\"Debug")?;
    /// assert_eq!((host.as_str(), port, debug), ("localhost", 8080, true));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or the value can't be
    /// converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, KvError>
    where
        T: for<'a> TryFrom<&'a Property, Error = KvError>,
    {
        T::try_from(self.get_property(path)?)
    }

    /// The effective (last) node at `path`.
    pub fn get_property(&self, path: &str) -> Result<&Property, KvError> {
        query::find_last(&self.forest, &query::parse_path(path)).ok_or_else(|| {
            KvError::PathNotFound {
                path: path.to_string(),
            }
        })
    }

    /// Convert every node at `path`, in document order. Missing paths give
    /// an empty list.
    pub fn get_all<T>(&self, path: &str) -> Result<Vec<T>, KvError>
    where
        T: for<'a> TryFrom<&'a Property, Error = KvError>,
    {
        self.find_all(path).into_iter().map(T::try_from).collect()
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, KvError>
    where
        T: for<'a> TryFrom<&'a Property, Error = KvError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(KvError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// ```
    /// # use kvtree::KvConfig;
    /// let config = KvConfig::from_str("").unwrap();
    /// assert_eq!(config.get_or("Music\"Volume", 1.0), 1.0);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: for<'a> TryFrom<&'a Property, Error = KvError>,
    {
        self.get(path).unwrap_or(default)
    }

    pub fn has(&self, path: &str) -> bool {
        self.get_property(path).is_ok()
    }

    /// Names of the children of the block at `path`. The empty path lists
    /// the top-level names.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, KvError> {
        let siblings = if path.is_empty() {
            &self.forest[..]
        } else {
            let prop = self.get_property(path)?;
            prop.children().ok_or_else(|| KvError::NotABlock {
                name: prop.name.clone(),
            })?
        };
        Ok(siblings.iter().map(|p| p.name.clone()).collect())
    }

    /// Set the value at `path`.
    ///
    /// Replaces the value of the last matching leaf. Missing blocks along
    /// the way and a missing final leaf are appended. The last node named
    /// by each intermediate segment must be a block.
    pub fn set(&mut self, path: &str, value: impl Into<String>) -> Result<(), KvError> {
        let segments = query::parse_path(path);
        let Some((last, parents)) = segments.split_last() else {
            return Err(KvError::PathNotFound {
                path: path.to_string(),
            });
        };

        let mut siblings = &mut self.forest;
        for segment in parents {
            let idx = match siblings.iter().rposition(|p| p.name_matches(segment)) {
                Some(idx) => idx,
                None => {
                    debug!("creating block '{}' while setting '{}'", segment, path);
                    siblings.push(Property::empty_block(segment.clone()));
                    siblings.len() - 1
                }
            };
            let Some(children) = siblings[idx].children_mut() else {
                return Err(KvError::NotABlock {
                    name: segment.clone(),
                });
            };
            siblings = children;
        }

        match siblings.iter_mut().rev().find(|p| p.name_matches(last)) {
            Some(prop) if prop.is_block() => Err(KvError::NotALeaf {
                name: prop.name.clone(),
            }),
            Some(prop) => {
                prop.set_value(value);
                Ok(())
            }
            None => {
                siblings.push(Property::leaf(last.clone(), value));
                Ok(())
            }
        }
    }

    /// Remove every node at `path`, returning how many were removed.
    pub fn remove(&mut self, path: &str) -> usize {
        let segments = query::parse_path(path);
        let Some((last, parents)) = segments.split_last() else {
            return 0;
        };

        if parents.is_empty() {
            let before = self.forest.len();
            self.forest.retain(|p| !p.name_matches(last));
            return before - self.forest.len();
        }

        query::find_all_mut(&mut self.forest, parents)
            .into_iter()
            .map(|parent| parent.remove_all(last))
            .sum()
    }
}
