use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::Shoot;
use crate::error::StoreError;
use crate::store;

/// Shoots scheduled from `now` (RFC3339) onwards, soonest first, capped at
/// `limit`. Sorting and the cap happen in memory: a DynamoDB Limit applies
/// before the filter, which is not what we want here.
pub async fn load_upcoming_shoots(
    client: &DynamoClient,
    table_name: &str,
    now: &str,
    limit: usize,
) -> Result<Vec<Shoot>, StoreError> {
    let items = store::query_collection(
        client,
        table_name,
        "SHOOT",
        Some("shoot_date >= :now"),
        vec![],
        vec![(":now", AttributeValue::S(now.to_string()))],
    )
    .await?;

    let mut shoots: Vec<Shoot> = items
        .iter()
        .filter_map(|item| {
            store::id_from_sk(item, "SHOOT#").map(|id| Shoot {
                shoot_id: id,
                title: store::str_attr(item, "title"),
                shoot_date: store::str_attr(item, "shoot_date"),
                project_id: store::str_attr(item, "project_id"),
            })
        })
        .collect();

    shoots.sort_by(|a, b| a.shoot_date.cmp(&b.shoot_date));
    shoots.truncate(limit);
    Ok(shoots)
}
