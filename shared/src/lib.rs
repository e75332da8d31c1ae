pub mod auth;
pub mod error;
pub mod respond;

use aws_sdk_dynamodb::Client as DynamoClient;

pub use error::ApiError;

/// Clients shared across a Lambda invocation, built once at cold start.
pub struct AppState {
    pub dynamo_client: DynamoClient,
}
