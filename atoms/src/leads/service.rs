use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::Lead;
use crate::error::StoreError;
use crate::store;

/// Leads created on or after `since` (RFC3339), newest first.
/// The executive dashboard reads a trailing six-month window.
pub async fn load_recent_leads(
    client: &DynamoClient,
    table_name: &str,
    since: &str,
) -> Result<Vec<Lead>, StoreError> {
    let items = store::query_collection(
        client,
        table_name,
        "LEAD",
        Some("created_at >= :since"),
        vec![],
        vec![(":since", AttributeValue::S(since.to_string()))],
    )
    .await?;

    let mut leads: Vec<Lead> = items
        .iter()
        .filter_map(|item| {
            store::id_from_sk(item, "LEAD#").map(|id| Lead {
                lead_id: id,
                client_name: store::str_attr(item, "client_name"),
                client_id: store::opt_str_attr(item, "client_id"),
                status: store::str_attr(item, "status"),
                value: store::num_attr(item, "value"),
                created_at: store::str_attr(item, "created_at"),
            })
        })
        .collect();

    leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(leads)
}
