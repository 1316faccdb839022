use thiserror::Error;

/// Errors produced while reading or writing stylesheet trees.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("node has no `type` field: {0}")]
    MissingType(String),

    #[error("invalid `{kind}` node: {reason}")]
    InvalidNode { kind: String, reason: String },
}

/// Convenience alias for tree model results.
pub type TypeResult<T> = Result<T, TypeError>;
