//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps, the
//! domain record, and normalized JSON. These are testable in isolation
//! without DynamoDB access.
//!
//! Numeric normalization happens here, at the gateway boundary: the store's
//! arbitrary-precision `N` values become plain JSON integers when whole and
//! floats otherwise, recursively through nested lists and maps.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

use projectboard_core::cursor::ContinuationKey;
use projectboard_core::project::{keys, Project};

use crate::config::KeySchema;

/// Convert a Project to a DynamoDB item under the resolved key schema.
///
/// When the configured attribute names differ from the literal `pk`/`sk`,
/// the key values are duplicated under the literals as a compatibility shim
/// for mismatched table setups.
pub fn project_to_item(
    project: &Project,
    schema: &KeySchema,
) -> HashMap<String, AttributeValue> {
    let pk = AttributeValue::S(keys::PARTITION_VALUE.to_string());
    let sk = AttributeValue::S(project.sort_key());

    let mut item = HashMap::new();
    item.insert(schema.pk_attr.clone(), pk.clone());
    item.insert(schema.sk_attr.clone(), sk.clone());
    if let Some(alias) = schema.pk_alias() {
        item.insert(alias.to_string(), pk);
    }
    if let Some(alias) = schema.sk_alias() {
        item.insert(alias.to_string(), sk);
    }

    item.insert("id".to_string(), AttributeValue::S(project.id.to_string()));
    item.insert(
        "repo_url".to_string(),
        AttributeValue::S(project.repo_url.clone()),
    );
    item.insert("owner".to_string(), AttributeValue::S(project.owner.clone()));
    item.insert("repo".to_string(), AttributeValue::S(project.repo.clone()));
    item.insert("title".to_string(), AttributeValue::S(project.title.clone()));
    item.insert(
        "description".to_string(),
        AttributeValue::S(project.description.clone()),
    );
    item.insert(
        "submitter".to_string(),
        AttributeValue::S(project.submitter.clone()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::N(project.created_at.to_string()),
    );

    item
}

/// Convert a DynamoDB item to a normalized JSON object.
pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> Value {
    Value::Object(
        item.iter()
            .map(|(k, v)| (k.clone(), attr_to_json(v)))
            .collect(),
    )
}

/// Convert a continuation key (e.g. `LastEvaluatedKey`) to its JSON form.
pub fn attrs_to_key(attrs: &HashMap<String, AttributeValue>) -> ContinuationKey {
    attrs
        .iter()
        .map(|(k, v)| (k.clone(), attr_to_json(v)))
        .collect()
}

/// Reconstruct a DynamoDB key map from its JSON form, for replay as an
/// `ExclusiveStartKey`.
pub fn key_to_attrs(key: &ContinuationKey) -> HashMap<String, AttributeValue> {
    key.iter()
        .map(|(k, v)| (k.clone(), json_to_attr(v)))
        .collect()
}

fn attr_to_json(attr: &AttributeValue) -> Value {
    match attr {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(list) => Value::Array(list.iter().map(attr_to_json).collect()),
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), attr_to_json(v)))
                .collect(),
        ),
        AttributeValue::Ss(set) => {
            Value::Array(set.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(set) => Value::Array(set.iter().map(|n| parse_number(n)).collect()),
        // Binary and unknown attribute types have no JSON rendering here.
        _ => Value::Null,
    }
}

fn json_to_attr(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(list) => AttributeValue::L(list.iter().map(json_to_attr).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attr(v)))
                .collect(),
        ),
    }
}

/// Normalize a stored decimal string: whole values become integers, others
/// become floats. Unparseable values survive as strings.
fn parse_number(raw: &str) -> Value {
    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }

    match raw.parse::<f64>() {
        Ok(float) if float.fract() == 0.0 && float.abs() < (i64::MAX as f64) => {
            Value::Number((float as i64).into())
        }
        Ok(float) => Number::from_f64(float)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(raw.to_string())),
        Err(_) => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn sample_project() -> Project {
        Project {
            id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap(),
            repo_url: "https://github.com/acme/widget".to_string(),
            owner: "acme".to_string(),
            repo: "widget".to_string(),
            title: "Widget".to_string(),
            description: "a widget".to_string(),
            submitter: "jo".to_string(),
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_project_item_default_schema() {
        let item = project_to_item(&sample_project(), &KeySchema::default());

        assert_eq!(item.get("pk").unwrap().as_s().unwrap(), "PROJECT");
        assert_eq!(
            item.get("sk").unwrap().as_s().unwrap(),
            "1700000000#550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(item.get("createdAt").unwrap().as_n().unwrap(), "1700000000");
        // No duplicate attributes under the default schema.
        assert_eq!(item.len(), 10);
    }

    #[test]
    fn test_project_item_aliases_custom_schema() {
        let schema = KeySchema::new("Project", "created");
        let item = project_to_item(&sample_project(), &schema);

        assert_eq!(item.get("Project").unwrap().as_s().unwrap(), "PROJECT");
        assert_eq!(item.get("pk").unwrap().as_s().unwrap(), "PROJECT");
        assert_eq!(
            item.get("created").unwrap().as_s().unwrap(),
            item.get("sk").unwrap().as_s().unwrap()
        );
    }

    #[test]
    fn test_numbers_normalize_to_native_json() {
        assert_eq!(parse_number("42"), json!(42));
        assert_eq!(parse_number("-7"), json!(-7));
        assert_eq!(parse_number("4.0"), json!(4));
        assert_eq!(parse_number("3.5"), json!(3.5));
        assert_eq!(parse_number("not-a-number"), json!("not-a-number"));
    }

    #[test]
    fn test_attr_to_json_recurses() {
        let attr = AttributeValue::M(HashMap::from([
            (
                "nested".to_string(),
                AttributeValue::L(vec![
                    AttributeValue::N("1".to_string()),
                    AttributeValue::N("2.5".to_string()),
                ]),
            ),
            ("flag".to_string(), AttributeValue::Bool(true)),
        ]));

        assert_eq!(
            attr_to_json(&attr),
            json!({"nested": [1, 2.5], "flag": true})
        );
    }

    #[test]
    fn test_key_round_trip_is_stable() {
        let attrs = HashMap::from([
            ("pk".to_string(), AttributeValue::S("PROJECT".to_string())),
            (
                "sk".to_string(),
                AttributeValue::S("1700000000#abc".to_string()),
            ),
            (
                "createdAt".to_string(),
                AttributeValue::N("1700000000".to_string()),
            ),
        ]);

        let key = attrs_to_key(&attrs);
        let replayed = key_to_attrs(&key);
        // Normalizing again changes nothing.
        assert_eq!(attrs_to_key(&replayed), key);

        assert_eq!(replayed.get("pk").unwrap().as_s().unwrap(), "PROJECT");
        assert_eq!(
            replayed.get("createdAt").unwrap().as_n().unwrap(),
            "1700000000"
        );
    }

    #[test]
    fn test_item_to_json_round_trips_project() {
        let project = sample_project();
        let item = project_to_item(&project, &KeySchema::default());
        let value = item_to_json(&item);

        assert_eq!(value["id"], "550e8400-e29b-41d4-a716-446655440001");
        assert_eq!(value["createdAt"], 1_700_000_000_i64);
        assert_eq!(value["title"], "Widget");
    }
}
