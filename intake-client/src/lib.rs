//! Intake Client - HTTP client for the order submission endpoint
//!
//! Transmits a validated order, text fields and file attachments
//! together, as one multipart request.

pub mod client;
pub mod config;
pub mod error;

pub use client::{IntakeClient, SubmitReceipt};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::{OrderDraft, OrderForm, OrderSubmission, ValidationError};
