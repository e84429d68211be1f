use common::format_validation_errors;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

/// The two failure tiers of every workflow and account operation.
///
/// `Validation` is raised before any store call and carries per-field messages.
/// `Database` is opaque on purpose: callers get no distinction between a missing row,
/// a constraint violation or a lost connection.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {}", format_validation_errors(.0))]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Logs a store fault for `operation` and wraps it.
pub(crate) fn store_fault(operation: &'static str) -> impl Fn(DbErr) -> ServiceError {
    move |err| {
        tracing::error!(operation, error = %err, "store operation failed");
        ServiceError::Database(err)
    }
}

/// Turns an accumulated set of field errors into a result.
pub(crate) fn into_result(errors: ValidationErrors) -> Result<(), ServiceError> {
    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(errors))
    }
}
