use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Link from an output record back to the input item that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    pub item: usize,
}

/// One output record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutput {
    pub json: Value,
    pub paired_item: PairedItem,
}

impl ItemOutput {
    pub fn new(json: Value, item: usize) -> Self {
        Self {
            json,
            paired_item: PairedItem { item },
        }
    }

    /// The record a failed item leaves behind under continue-on-failure.
    pub fn error(message: impl Into<String>, item: usize) -> Self {
        Self::new(json!({ "error": message.into() }), item)
    }

    /// Whether this record is an error placeholder.
    pub fn is_error(&self) -> bool {
        self.json
            .as_object()
            .is_some_and(|o| o.len() == 1 && o.get("error").is_some_and(Value::is_string))
    }
}

/// What an action produced for one input item.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutput {
    /// A list result; each element becomes its own record.
    Many(Vec<Value>),
    /// A single-entity result. `Null` produces no record.
    One(Value),
}

impl ActionOutput {
    /// Expand into records tagged with the source item.
    pub fn into_items(self, item: usize) -> Vec<ItemOutput> {
        match self {
            Self::Many(values) => values
                .into_iter()
                .map(|value| ItemOutput::new(value, item))
                .collect(),
            Self::One(Value::Null) => Vec::new(),
            Self::One(value) => vec![ItemOutput::new(value, item)],
        }
    }

    /// Number of records this output expands to.
    pub fn len(&self) -> usize {
        match self {
            Self::Many(values) => values.len(),
            Self::One(Value::Null) => 0,
            Self::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_host_shape() {
        let record = ItemOutput::new(json!({ "id": "p1" }), 2);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "json": { "id": "p1" }, "pairedItem": { "item": 2 } })
        );
    }

    #[test]
    fn error_record() {
        let record = ItemOutput::error("boom", 1);
        assert_eq!(record.json, json!({ "error": "boom" }));
        assert_eq!(record.paired_item.item, 1);
        assert!(record.is_error());
        assert!(!ItemOutput::new(json!({ "error": "x", "id": 1 }), 0).is_error());
    }

    #[test]
    fn many_expands_per_element() {
        let output = ActionOutput::Many(vec![json!({ "id": 1 }), json!({ "id": 2 })]);
        assert_eq!(output.len(), 2);
        let items = output.into_items(4);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.paired_item.item == 4));
    }

    #[test]
    fn null_single_produces_nothing() {
        let output = ActionOutput::One(Value::Null);
        assert!(output.is_empty());
        assert!(output.into_items(0).is_empty());
        assert!(ActionOutput::Many(Vec::new()).into_items(0).is_empty());
    }

    #[test]
    fn single_produces_one_record() {
        let items = ActionOutput::One(json!({ "success": false })).into_items(0);
        assert_eq!(items, vec![ItemOutput::new(json!({ "success": false }), 0)]);
    }
}
