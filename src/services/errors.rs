use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request carries no usable acting user.
    #[error("unauthorized")]
    Unauthorized,
    /// Requested category was not found.
    #[error("not found")]
    NotFound,
    /// The category exists but holds no specification with the requested id.
    #[error("specification not found")]
    SpecificationNotFound,
    /// The requested change would leave the stored document as it is.
    #[error("nothing to update")]
    NothingToUpdate,
    /// Request body failed validation.
    #[error("{0}")]
    Form(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
