use thiserror::Error;

/// Failures surfaced by the entity services.
///
/// `NotFound` is only produced by targeted single-row operations (a lookup or
/// conditional update that matched nothing); list reads return empty vectors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("DynamoDB {operation} failed: {message}")]
    Query {
        operation: &'static str,
        message: String,
    },
}

impl StoreError {
    pub fn query(operation: &'static str, err: impl std::fmt::Display) -> Self {
        StoreError::Query {
            operation,
            message: err.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
