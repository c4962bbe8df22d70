//! The metadata mapping substituted into every template.

use std::collections::BTreeMap;

use serde::Serialize;

/// Well-known metadata keys.
///
/// The names are the placeholder names used by the shipped templates, so they
/// follow the templates' camelCase convention rather than Rust naming.
pub mod keys {
    /// Version tag of the generating tool, e.g. `R2019b`.
    pub const MATLAB_VERSION: &str = "matlabVersion";
    /// Top-level archive folder holding the generated model code.
    pub const FOLDER_NAME: &str = "folderName";
    /// Model name derived from the `<model>_<target>_rtw` folder.
    pub const MODEL_NAME: &str = "modelName";
    /// [`MODEL_NAME`] truncated to 28 characters.
    pub const MODEL_NAME_SHORT: &str = "modelNameS";
    /// Template root, with forward slashes.
    pub const BASE_PATH: &str = "path";
}

/// Key → string mapping consumed by template rendering.
///
/// Insertion is last-writer-wins. Stages run in a fixed order (archive
/// ingestion, then extension), so later stages override earlier ones through
/// [`Metadata::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    values: BTreeMap<String, String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Merge `other` into `self`; values from `other` win.
    ///
    /// Returns the keys whose previous value was replaced.
    pub fn merge(&mut self, other: Metadata) -> Vec<String> {
        let mut overridden = Vec::new();
        for (key, value) in other.values {
            match self.values.insert(key.clone(), value) {
                Some(previous) if self.values.get(&key) != Some(&previous) => overridden.push(key),
                _ => {}
            }
        }
        overridden
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites() {
        let mut md = Metadata::new();
        assert_eq!(md.insert(keys::MODEL_NAME, "a"), None);
        assert_eq!(md.insert(keys::MODEL_NAME, "b").as_deref(), Some("a"));
        assert_eq!(md.get(keys::MODEL_NAME), Some("b"));
    }

    #[test]
    fn merge_prefers_incoming_values() {
        let mut md = Metadata::new()
            .with(keys::MODEL_NAME, "from_archive")
            .with(keys::FOLDER_NAME, "proj");
        let overridden = md.merge(Metadata::new().with(keys::MODEL_NAME, "from_extension"));

        assert_eq!(md.get(keys::MODEL_NAME), Some("from_extension"));
        assert_eq!(md.get(keys::FOLDER_NAME), Some("proj"));
        assert_eq!(overridden, vec![keys::MODEL_NAME.to_string()]);
    }

    #[test]
    fn merge_same_value_is_not_reported() {
        let mut md = Metadata::new().with("k", "v");
        assert!(md.merge(Metadata::new().with("k", "v")).is_empty());
    }

    #[test]
    fn collects_from_pairs() {
        let md: Metadata = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(md.len(), 2);
        assert_eq!(md.iter().next(), Some(("a", "1")));
    }
}
