use derive_more::{Deref, IntoIterator};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

///
/// MongoFilter
///
/// A compiled filter document. The empty document matches every record.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MongoFilter(Map<String, JsonValue>);

impl MongoFilter {
    /// Single-key document `{ key: value }`.
    #[must_use]
    pub fn single(key: impl Into<String>, value: JsonValue) -> Self {
        let mut map = Map::new();
        map.insert(key.into(), value);

        Self(map)
    }

    #[must_use]
    pub fn into_json(self) -> JsonValue {
        JsonValue::Object(self.0)
    }
}

impl From<Map<String, JsonValue>> for MongoFilter {
    fn from(map: Map<String, JsonValue>) -> Self {
        Self(map)
    }
}

impl From<MongoFilter> for JsonValue {
    fn from(filter: MongoFilter) -> Self {
        filter.into_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_filter_is_empty_document() {
        let filter = MongoFilter::default();

        assert!(filter.is_empty());
        assert_eq!(serde_json::to_value(&filter).unwrap(), json!({}));
    }

    #[test]
    fn single_key_document_iterates_its_entry() {
        let filter = MongoFilter::single("age", json!(30));

        assert_eq!(filter.len(), 1);
        assert_eq!(filter.get("age"), Some(&json!(30)));

        let entries: Vec<_> = filter.into_iter().collect();
        assert_eq!(entries, vec![("age".to_string(), json!(30))]);
    }
}
