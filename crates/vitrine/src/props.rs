//! Properties handed from a route to the page it renders.
use rustc_hash::FxHashMap;
use serde_yaml::Value;

use crate::errors::PropsError;

/// String-keyed properties for a page, with opaque values.
///
/// The shell never looks inside: whatever a route puts in here is what the page receives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageProps(FxHashMap<String, Value>);

impl PageProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build properties out of a YAML mapping, e.g. the front matter of a markdown file.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine::props::PageProps;
    ///
    /// let props = PageProps::from_yaml_str("title: Post A\ndraft: false").unwrap();
    /// assert_eq!(props.get_str("title"), Some("Post A"));
    /// ```
    pub fn from_yaml_str(source: &str) -> Result<Self, PropsError> {
        Self::from_yaml_value(serde_yaml::from_str(source)?)
    }

    pub fn from_yaml_value(value: Value) -> Result<Self, PropsError> {
        let Value::Mapping(mapping) = value else {
            return Err(PropsError::NotAMapping);
        };

        let mut props = FxHashMap::default();
        for (key, value) in mapping {
            match key {
                Value::String(key) => {
                    props.insert(key, value);
                }
                other => {
                    let rendered = serde_yaml::to_string(&other)
                        .map(|s| s.trim_end().to_string())
                        .unwrap_or_else(|_| "<unprintable>".to_string());
                    return Err(PropsError::NonStringKey(rendered));
                }
            }
        }

        Ok(Self(props))
    }

    /// Insert a property, returning the previous value under that key if any.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Shorthand for string properties, returns `None` if the key is missing or isn't a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
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

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for PageProps
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a PageProps {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter_keeps_every_key() {
        let props: PageProps = [("title", "Post A"), ("author", "Erika")]
            .into_iter()
            .collect();

        assert_eq!(props.len(), 2);
        assert_eq!(props.get_str("title"), Some("Post A"));
        assert_eq!(props.get_str("author"), Some("Erika"));
    }

    #[test]
    fn test_order_does_not_matter() {
        let a: PageProps = [("a", 1), ("b", 2)].into_iter().collect();
        let b: PageProps = [("b", 2), ("a", 1)].into_iter().collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_get_str_on_non_string() {
        let mut props = PageProps::new();
        props.insert("count", 3);

        assert!(props.contains_key("count"));
        assert_eq!(props.get_str("count"), None);
        assert_eq!(props.get("count").and_then(Value::as_u64), Some(3));
    }

    #[test]
    fn test_from_yaml_front_matter() {
        let props = PageProps::from_yaml_str("title: Post A\ntags:\n  - rust\n  - css\n").unwrap();

        assert_eq!(props.get_str("title"), Some("Post A"));
        assert_eq!(
            props.get("tags").and_then(Value::as_sequence).map(Vec::len),
            Some(2)
        );
    }

    #[test]
    fn test_from_yaml_rejects_non_string_keys() {
        let result = PageProps::from_yaml_str("1: one\ntitle: Post A\n");

        assert!(matches!(result, Err(PropsError::NonStringKey(key)) if key == "1"));
    }

    #[test]
    fn test_from_yaml_rejects_scalars() {
        assert!(matches!(
            PageProps::from_yaml_str("just a string"),
            Err(PropsError::NotAMapping)
        ));
    }

    #[test]
    fn test_null_yaml_is_not_a_mapping() {
        assert!(matches!(
            PageProps::from_yaml_str("~"),
            Err(PropsError::NotAMapping)
        ));
    }

    #[test]
    fn test_malformed_yaml_keeps_parse_error() {
        let result = PageProps::from_yaml_str("title: [");

        assert!(matches!(result, Err(PropsError::Parse(_))));
    }
}
