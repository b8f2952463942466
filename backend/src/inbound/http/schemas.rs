//! OpenAPI schema wrappers for response shapes not derived elsewhere.

use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorSchema {
    /// Human-readable description of the failure.
    #[schema(example = "booking not found")]
    pub error: String,
}
