use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::User;
use crate::error::StoreError;
use crate::store::{self, Item};

fn user_from_item(user_id: String, item: &Item) -> User {
    User {
        user_id,
        name: store::str_attr(item, "name"),
        email: store::str_attr(item, "email"),
        role: store::str_attr(item, "role"),
        joined_date: store::str_attr(item, "joined_date"),
        avatar_url: store::str_attr(item, "avatar_url"),
    }
}

/// Look a user up by email (the demo credential).
///
/// Emails are unique in the seed data; if the filter somehow matches more
/// than one row the first wins.
pub async fn find_user_by_email(
    client: &DynamoClient,
    table_name: &str,
    email: &str,
) -> Result<Option<User>, StoreError> {
    let items = store::query_collection(
        client,
        table_name,
        "USER",
        Some("email = :email"),
        vec![],
        vec![(":email", AttributeValue::S(email.to_string()))],
    )
    .await?;

    Ok(items.iter().find_map(|item| {
        store::id_from_sk(item, "USER#").map(|id| user_from_item(id, item))
    }))
}

/// Fetch a user by id. Used to resolve the session subject on each
/// dashboard request.
pub async fn get_user(
    client: &DynamoClient,
    table_name: &str,
    user_id: &str,
) -> Result<Option<User>, StoreError> {
    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("USER".to_string()))
        .key("SK", AttributeValue::S(format!("USER#{}", user_id)))
        .send()
        .await
        .map_err(|e| {
            tracing::error!("DynamoDB get_item failed for user {}: {:?}", user_id, e);
            StoreError::query("get_item", e)
        })?;

    Ok(result
        .item()
        .map(|item| user_from_item(user_id.to_string(), item)))
}
