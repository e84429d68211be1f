//! Ticket status transitions.
//!
//! Any status may follow any other. What a transition needs depends only on where it
//! lands: On Hold carries a hold reason and Solved carries a cause and a solution. The
//! payload lives inside the variant as [`NonBlank`] text, so a Solved or On Hold change
//! without its fields cannot be built.

use common::{InputError, validate_input};
use db::models::ticket::{StatusFields, TicketStatus};
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Text that passed the shared input rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NonBlank(String);

impl NonBlank {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonBlank {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_input(&value)?;
        Ok(NonBlank(value))
    }
}

impl TryFrom<&str> for NonBlank {
    type Error = InputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        NonBlank::try_from(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    NotStarted,
    InProgress,
    OnHold { hold_reason: NonBlank },
    Solved { cause: NonBlank, solution: NonBlank },
}

impl StatusChange {
    /// Builds a transition from loosely-typed input (a request body).
    ///
    /// Fields that the destination does not need are ignored. Missing or invalid required
    /// fields are reported together, keyed by field name.
    pub fn from_parts(
        status: TicketStatus,
        cause: Option<String>,
        solution: Option<String>,
        hold_reason: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let change = match status {
            TicketStatus::NotStarted => Some(StatusChange::NotStarted),
            TicketStatus::InProgress => Some(StatusChange::InProgress),
            TicketStatus::OnHold => {
                required("hold_reason", hold_reason, &mut errors)
                    .map(|hold_reason| StatusChange::OnHold { hold_reason })
            }
            TicketStatus::Solved => {
                let cause = required("cause", cause, &mut errors);
                let solution = required("solution", solution, &mut errors);
                cause
                    .zip(solution)
                    .map(|(cause, solution)| StatusChange::Solved { cause, solution })
            }
        };

        match change {
            Some(change) if errors.errors().is_empty() => Ok(change),
            _ => Err(errors),
        }
    }

    pub fn status(&self) -> TicketStatus {
        match self {
            StatusChange::NotStarted => TicketStatus::NotStarted,
            StatusChange::InProgress => TicketStatus::InProgress,
            StatusChange::OnHold { .. } => TicketStatus::OnHold,
            StatusChange::Solved { .. } => TicketStatus::Solved,
        }
    }

    /// Columns to write with the new status. Fields of other destinations are left as
    /// they are, so a reopened ticket keeps its earlier cause and solution.
    pub fn into_fields(self) -> StatusFields {
        match self {
            StatusChange::NotStarted | StatusChange::InProgress => StatusFields::default(),
            StatusChange::OnHold { hold_reason } => StatusFields {
                hold_reason: Some(hold_reason.into_inner()),
                ..Default::default()
            },
            StatusChange::Solved { cause, solution } => StatusFields {
                cause: Some(cause.into_inner()),
                solution: Some(solution.into_inner()),
                hold_reason: None,
            },
        }
    }
}

fn required(
    field: &'static str,
    value: Option<String>,
    errors: &mut ValidationErrors,
) -> Option<NonBlank> {
    match NonBlank::try_from(value.unwrap_or_default()) {
        Ok(text) => Some(text),
        Err(err) => {
            errors.add(field, ValidationError::from(err));
            None
        }
    }
}
