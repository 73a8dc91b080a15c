// intake-client/examples/submit_order.rs
// Walks one order through render -> validate -> submit.

use intake_client::{ClientConfig, ClientError, OrderDraft, OrderForm};
use shared::FileAttachment;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <endpoint_url> [attachment ...]", args[0]);
        println!("  Example: {} http://localhost:8080 artwork/front.png", args[0]);
        return Ok(());
    }
    let endpoint = &args[1];

    // Show the operator-facing field layout
    let layout = OrderForm::render();
    for field in &layout.fields {
        let marker = if field.required { "*" } else { " " };
        println!("{} {:<14} {}", marker, field.name, field.label);
    }

    let mut draft = OrderDraft {
        company_name: "Acme Plush Co".to_string(),
        design_name: "Mountain Lion".to_string(),
        quantity: 25,
        product: "Keychain".to_string(),
        due_date: "11/05".to_string(),
        price: "12.50".to_string(),
        date_type: "Hard Date".to_string(),
        material1: "Short pile fur".to_string(),
        fur_color: "Tan".to_string(),
        backing_type: "Iron-on".to_string(),
        ..OrderDraft::default()
    };
    for path in &args[2..] {
        draft.prod_files.push(FileAttachment::from_path(path).await?);
    }

    let client = ClientConfig::new(endpoint).with_timeout(60).build_client();

    match client.submit_draft(draft).await {
        Ok(receipt) => {
            tracing::info!("Order accepted ({}): {}", receipt.status, receipt.body);
        }
        Err(ClientError::Validation(err)) => {
            for field in &err.fields {
                tracing::error!("{}: {}", field.field, field.message);
            }
            return Err(err.into());
        }
        Err(e) => {
            tracing::error!("Submission failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
