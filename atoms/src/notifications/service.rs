use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::Notification;
use crate::error::StoreError;
use crate::store::{self, Item};

fn notification_from_item(notification_id: String, item: &Item) -> Notification {
    Notification {
        notification_id,
        user_id: store::str_attr(item, "user_id"),
        message: store::str_attr(item, "message"),
        is_read: store::bool_attr(item, "is_read"),
        created_at: store::str_attr(item, "created_at"),
    }
}

/// All notifications for one user, newest first.
pub async fn load_notifications_for_user(
    client: &DynamoClient,
    table_name: &str,
    user_id: &str,
) -> Result<Vec<Notification>, StoreError> {
    let items = store::query_collection(
        client,
        table_name,
        "NOTIFICATION",
        Some("user_id = :uid"),
        vec![],
        vec![(":uid", AttributeValue::S(user_id.to_string()))],
    )
    .await?;

    let mut notifications: Vec<Notification> = items
        .iter()
        .filter_map(|item| {
            store::id_from_sk(item, "NOTIFICATION#")
                .map(|id| notification_from_item(id, item))
        })
        .collect();

    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(notifications)
}

/// Mark a notification read and return the updated row. Idempotent.
///
/// The condition ties the row to the requesting user, so dismissing someone
/// else's notification (or a nonexistent id) surfaces as NotFound.
pub async fn dismiss_notification(
    client: &DynamoClient,
    table_name: &str,
    notification_id: &str,
    user_id: &str,
) -> Result<Notification, StoreError> {
    let result = client
        .update_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("NOTIFICATION".to_string()))
        .key(
            "SK",
            AttributeValue::S(format!("NOTIFICATION#{}", notification_id)),
        )
        .update_expression("SET is_read = :read")
        .condition_expression("attribute_exists(PK) AND user_id = :uid")
        .expression_attribute_values(":read", AttributeValue::Bool(true))
        .expression_attribute_values(":uid", AttributeValue::S(user_id.to_string()))
        .return_values(ReturnValue::AllNew)
        .send()
        .await;

    match result {
        Ok(out) => {
            let item = out
                .attributes()
                .ok_or_else(|| StoreError::query("update_item", "no attributes returned"))?;
            Ok(notification_from_item(notification_id.to_string(), item))
        }
        Err(e) => {
            let conditional_failed = e
                .as_service_error()
                .map(|se| se.is_conditional_check_failed_exception())
                .unwrap_or(false);
            if conditional_failed {
                return Err(StoreError::NotFound("notification"));
            }
            tracing::error!(
                "DynamoDB update_item failed for notification {}: {:?}",
                notification_id,
                e
            );
            Err(StoreError::query("update_item", e))
        }
    }
}
