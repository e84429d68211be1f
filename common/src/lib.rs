pub mod validation;

use std::collections::BTreeMap;
use validator::ValidationErrors;

pub use validation::{InputError, validate_email_address, validate_input, validate_text};

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collapses `ValidationErrors` into one message per field (the first one reported),
/// keyed by field name. This is the shape returned to clients for inline form errors.
pub fn field_error_map(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}
