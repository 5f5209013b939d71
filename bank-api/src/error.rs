use tower_api_client::{Error as ApiError, StatusCode};

/// A failed request. Both variants display as "Request failed ...".
#[derive(Debug)]
pub enum BankApiError {
    /// The service answered with a 4xx or 5xx status. Holds the raw body.
    Status(StatusCode, String),
    /// Transport failure or a body that did not match the expected shape.
    Internal(ApiError),
}

impl BankApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BankApiError::Status(status, _) => Some(*status),
            BankApiError::Internal(_) => None,
        }
    }
}

impl From<ApiError> for BankApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, body) | ApiError::ServerError(status, body) => {
                BankApiError::Status(status, body)
            }
            e => BankApiError::Internal(e),
        }
    }
}

impl std::fmt::Display for BankApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankApiError::Status(status, _) => {
                write!(f, "Request failed with status code {}", status.as_u16())
            }
            BankApiError::Internal(e) => write!(f, "Request failed: {}", e),
        }
    }
}

impl std::error::Error for BankApiError {}
