use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

use goat_atoms::notifications::{self, DismissNotificationPayload, Notification};
use goat_shared::auth::SessionClaims;
use goat_shared::{respond, ApiError};

#[derive(Serialize)]
struct DismissResponse {
    message: String,
    data: Notification,
}

/// POST /notifications/dismiss
///
/// Marks one of the caller's notifications read. Idempotent; a notification
/// belonging to someone else is indistinguishable from a missing one.
pub async fn dismiss(
    client: &DynamoClient,
    table_name: &str,
    claims: &SessionClaims,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: DismissNotificationPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => {
            return respond::error(&ApiError::Validation(format!("Invalid request body: {}", e)))
        }
    };

    let notification_id = match payload.notification_id {
        Some(id) if !id.is_empty() => id,
        _ => {
            return respond::error(&ApiError::Validation(
                "Notification ID is required".to_string(),
            ))
        }
    };

    match notifications::dismiss_notification(client, table_name, &notification_id, &claims.user_id)
        .await
    {
        Ok(notification) => respond::json(
            StatusCode::OK,
            &DismissResponse {
                message: "Notification dismissed successfully".to_string(),
                data: notification,
            },
        ),
        Err(e) => respond::error(&e.into()),
    }
}
