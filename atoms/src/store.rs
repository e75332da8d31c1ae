use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;

use crate::error::StoreError;

pub type Item = HashMap<String, AttributeValue>;

/// Read a string attribute, empty string when absent.
pub fn str_attr(item: &Item, name: &str) -> String {
    item.get(name)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Read an optional string attribute.
pub fn opt_str_attr(item: &Item, name: &str) -> Option<String> {
    item.get(name)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Read a numeric attribute, zero when absent or unparseable.
pub fn num_attr<T: std::str::FromStr + Default>(item: &Item, name: &str) -> T {
    item.get(name)
        .and_then(|v| v.as_n().ok())
        .and_then(|n| n.parse().ok())
        .unwrap_or_default()
}

pub fn bool_attr(item: &Item, name: &str) -> bool {
    item.get(name)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .unwrap_or(false)
}

/// Extract the row id from an SK like "TASK#{id}".
pub fn id_from_sk(item: &Item, prefix: &str) -> Option<String> {
    item.get("SK")
        .and_then(|v| v.as_s().ok())
        .and_then(|sk| sk.strip_prefix(prefix))
        .map(|id| id.to_string())
}

/// Query one entity partition: PK = {collection}, SK begins_with "{collection}#".
///
/// An optional filter expression is applied server-side after the key
/// condition; callers supply its attribute names/values.
pub async fn query_collection(
    client: &DynamoClient,
    table_name: &str,
    collection: &'static str,
    filter: Option<&str>,
    names: Vec<(&str, String)>,
    values: Vec<(&str, AttributeValue)>,
) -> Result<Vec<Item>, StoreError> {
    let mut builder = client
        .query()
        .table_name(table_name)
        .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
        .expression_attribute_values(":pk", AttributeValue::S(collection.to_string()))
        .expression_attribute_values(
            ":sk_prefix",
            AttributeValue::S(format!("{}#", collection)),
        );

    if let Some(expr) = filter {
        builder = builder.filter_expression(expr);
    }
    for (k, v) in names {
        builder = builder.expression_attribute_names(k, v);
    }
    for (k, v) in values {
        builder = builder.expression_attribute_values(k, v);
    }

    let result = match builder.send().await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(
                "DynamoDB query failed for collection {} in table {}: {:?}",
                collection,
                table_name,
                e
            );
            return Err(StoreError::query("query", e));
        }
    };

    Ok(result.items().to_vec())
}
