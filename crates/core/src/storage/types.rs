use serde_json::Value;

use crate::cursor::ContinuationKey;

/// One page of project records from a query or scan.
///
/// Items are normalized JSON objects (store-native numerics already
/// converted to plain JSON numbers). `last_evaluated_key` is present when
/// more results exist beyond this page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPage {
    pub items: Vec<Value>,
    pub last_evaluated_key: Option<ContinuationKey>,
}

impl ProjectPage {
    /// Sorts items by `createdAt` descending, best-effort.
    ///
    /// Scan results carry no ordering guarantee from the store. Items with
    /// a missing or non-integer `createdAt` sort as if it were 0.
    pub fn sort_newest_first(&mut self) {
        self.items
            .sort_by_key(|item| std::cmp::Reverse(created_at_of(item)));
    }
}

fn created_at_of(item: &Value) -> i64 {
    item.get("createdAt").and_then(Value::as_i64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_newest_first() {
        let mut page = ProjectPage {
            items: vec![
                json!({"id": "a", "createdAt": 100}),
                json!({"id": "b", "createdAt": 300}),
                json!({"id": "c", "createdAt": 200}),
            ],
            last_evaluated_key: None,
        };

        page.sort_newest_first();

        let ids: Vec<&str> = page
            .items
            .iter()
            .map(|i| i["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn test_missing_created_at_sorts_last() {
        let mut page = ProjectPage {
            items: vec![
                json!({"id": "a"}),
                json!({"id": "b", "createdAt": 1}),
                json!({"id": "c", "createdAt": "not-a-number"}),
            ],
            last_evaluated_key: None,
        };

        page.sort_newest_first();

        assert_eq!(page.items[0]["id"], "b");
    }
}
