//! HTTP client for transmitting order submissions

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use shared::{FileAttachment, OrderDraft, OrderSubmission};

/// Path of the submission endpoint, relative to the base URL
const SUBMIT_PATH: &str = "submit";

/// What the endpoint answered for an accepted submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmitReceipt {
    pub status: u16,
    /// Response body, verbatim; its format is up to the endpoint
    pub body: String,
}

/// HTTP client for the order submission endpoint
#[derive(Debug, Clone)]
pub struct IntakeClient {
    client: Client,
    base_url: String,
}

impl IntakeClient {
    /// Create a new intake client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Validate a raw draft and submit it in one step
    pub async fn submit_draft(&self, draft: OrderDraft) -> ClientResult<SubmitReceipt> {
        let order = draft.into_submission()?;
        self.submit_order(order).await
    }

    /// Transmit a validated order as a single multipart request
    ///
    /// The order is consumed; on failure nothing is retried and nothing
    /// is kept client-side.
    pub async fn submit_order(&self, order: OrderSubmission) -> ClientResult<SubmitReceipt> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), SUBMIT_PATH);
        tracing::debug!(%url, files = order.file_count(), "submitting order");

        let form = build_form(order)?;
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(%status, "endpoint rejected submission");
            return Err(ClientError::Rejected { status, body });
        }

        tracing::info!(%status, "order submitted");
        Ok(SubmitReceipt {
            status: status.as_u16(),
            body,
        })
    }
}

/// Assemble the multipart payload: one text part per filled field, one
/// file part per attachment under its set's part name.
fn build_form(order: OrderSubmission) -> ClientResult<Form> {
    let mut form = Form::new();

    for (name, value) in order.text_fields() {
        form = form.text(name, value);
    }
    for file in order.prod_files {
        form = form.part("prod_files", file_part(file)?);
    }
    for file in order.print_files {
        form = form.part("print_files", file_part(file)?);
    }

    Ok(form)
}

fn file_part(file: FileAttachment) -> ClientResult<Part> {
    let part = Part::bytes(file.bytes)
        .file_name(file.file_name)
        .mime_str(&file.content_type)?;
    Ok(part)
}
