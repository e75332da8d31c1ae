use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::Script;
use crate::error::StoreError;
use crate::store;

/// Scripts currently awaiting review.
pub async fn load_scripts_in_review(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<Script>, StoreError> {
    let items = store::query_collection(
        client,
        table_name,
        "SCRIPT",
        Some("#status = :status"),
        vec![("#status", "status".to_string())],
        vec![(":status", AttributeValue::S("In Review".to_string()))],
    )
    .await?;

    Ok(items
        .iter()
        .filter_map(|item| {
            store::id_from_sk(item, "SCRIPT#").map(|id| Script {
                script_id: id,
                title: store::str_attr(item, "title"),
                version: store::str_attr(item, "version"),
                status: store::str_attr(item, "status"),
                project_id: store::str_attr(item, "project_id"),
            })
        })
        .collect())
}
