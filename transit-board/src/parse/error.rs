//! Response parsing errors.

use crate::domain::{DomainError, TimeError};

/// Error turning an API response into domain records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Response carried no `data` object
    #[error("response has no data")]
    MissingData,

    /// Stop id unknown to the API (`data.stop` is null)
    #[error("stop not found")]
    StopNotFound,

    /// Plan query returned no `plan` object
    #[error("response has no plan")]
    MissingPlan,

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
