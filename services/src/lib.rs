pub mod error;
pub mod ticket_service;
pub mod user_service;
pub mod workflow;

pub use error::ServiceError;
