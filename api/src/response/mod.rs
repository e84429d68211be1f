use serde::Serialize;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// - `T` is the type of the `data` payload.
/// - `success` is a boolean indicating operation status.
/// - `message` provides a human-readable context string.
///
/// ## Example (error):
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Ticket not found"
/// }
/// ```
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response that still carries a payload, such as per-field
    /// validation messages.
    pub fn failure(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
