//! Shared types for the order intake flow
//!
//! Common types used across the intake crates: the order domain model,
//! draft validation, form layout, and error types.

pub mod error;
pub mod form;
pub mod order;

// Re-exports
pub use error::{FieldError, ValidationError};
pub use form::{FieldKind, FieldSpec, FormLayout, OrderForm};
pub use order::{DateType, FileAttachment, OrderDraft, OrderSubmission};
