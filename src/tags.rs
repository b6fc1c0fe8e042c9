//! OSM tags produced for a translated feature.

use crate::attributes::Value;

use serde::{Deserialize, Serialize};

use std::collections::btree_map;
use std::collections::BTreeMap;

pub const NAME: &str = "name";
pub const HIGHWAY: &str = "highway";
pub const BRIDGE: &str = "bridge";
pub const OR_RESPONSIBILITY: &str = "or_responsibility";
pub const OR_WIDTH: &str = "or_width";

/// Tags of a single OSM way. Keys are unique; setting a key again replaces
/// its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(BTreeMap<String, Value>);

impl Tags {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets `key` to `value`, returning the value it replaced.
    pub fn set<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Finds a tag by its key and returns its value if it is text.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Checks if there is a tag with the given `key` and text `value`.
    pub fn has_tag(&self, key: &str, value: &str) -> bool {
        self.get_str(key) == Some(value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over tags, ordered by key.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for Tags {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_set_replaces() {
        let mut tags = Tags::new();
        assert_eq!(tags.set(HIGHWAY, "motorway"), None);
        assert_eq!(tags.set(HIGHWAY, "road"), Some(Value::from("motorway")));
        assert_eq!(tags.len(), 1);
        assert!(tags.has_tag(HIGHWAY, "road"));
        assert!(!tags.has_tag(HIGHWAY, "motorway"));
    }

    #[test]
    fn test_lookup() {
        let mut tags = Tags::new();
        tags.set(OR_WIDTH, 5);
        tags.set(NAME, "Le Loi");
        assert_eq!(tags.get(OR_WIDTH), Some(&Value::Integer(5)));
        assert_eq!(tags.get_str(OR_WIDTH), None);
        assert_eq!(tags.get_str(NAME), Some("Le Loi"));
        assert!(!tags.contains_key(BRIDGE));
        let keys: Vec<&str> = tags.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec![NAME, OR_WIDTH]);
    }

    #[test]
    fn test_serialize() {
        let mut tags = Tags::new();
        tags.set(HIGHWAY, "road");
        tags.set(OR_WIDTH, 3.5);
        assert_eq!(
            serde_json::to_string(&tags).unwrap(),
            r#"{"highway":"road","or_width":3.5}"#
        );
    }
}
