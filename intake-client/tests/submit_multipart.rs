// intake-client/tests/submit_multipart.rs
// End-to-end submission tests against a local multipart receiver.

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use intake_client::{ClientConfig, ClientError};
use shared::{FileAttachment, OrderDraft};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct ReceivedPart {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    text: Option<String>,
    len: usize,
}

type Received = Arc<Mutex<Vec<ReceivedPart>>>;

async fn receive(State(received): State<Received>, mut multipart: Multipart) -> &'static str {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.unwrap();
        let text = if file_name.is_none() {
            Some(String::from_utf8_lossy(&bytes).to_string())
        } else {
            None
        };
        received.lock().await.push(ReceivedPart {
            name,
            file_name,
            content_type,
            text,
            len: bytes.len(),
        });
    }
    "accepted"
}

/// Spin up a receiver on an ephemeral port, return its base URL and the
/// parts it captured.
async fn spawn_receiver() -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/submit", post(receive))
        .with_state(received.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), received)
}

/// Receiver that rejects everything with 422.
async fn spawn_rejecting_receiver() -> String {
    let app = Router::new().route(
        "/submit",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "quantity exceeds stock") }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn valid_draft() -> OrderDraft {
    OrderDraft {
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
    }
}

#[tokio::test]
async fn test_submission_without_files_has_no_file_parts() {
    let (base_url, received) = spawn_receiver().await;
    let client = ClientConfig::new(&base_url).build_client();

    let receipt = client.submit_draft(valid_draft()).await.unwrap();
    assert_eq!(receipt.status, 200);
    assert_eq!(receipt.body, "accepted");

    let parts = received.lock().await;
    assert!(parts.iter().all(|p| p.file_name.is_none()));
    assert!(!parts.iter().any(|p| p.name == "prod_files"));
    assert!(!parts.iter().any(|p| p.name == "print_files"));

    // All required text fields arrive; blank optionals are omitted
    let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "company_name",
            "design_name",
            "quantity",
            "product",
            "due_date",
            "price",
            "date_type",
            "material1",
            "fur_color",
            "backing_type",
        ]
    );

    let quantity = parts.iter().find(|p| p.name == "quantity").unwrap();
    assert_eq!(quantity.text.as_deref(), Some("25"));
    let date_type = parts.iter().find(|p| p.name == "date_type").unwrap();
    assert_eq!(date_type.text.as_deref(), Some("Hard Date"));
}

#[tokio::test]
async fn test_submission_with_attachments_carries_each_file_part() {
    let (base_url, received) = spawn_receiver().await;
    let client = ClientConfig::new(&base_url).build_client();

    let mut draft = valid_draft();
    draft.notes = Some("Rush if possible".to_string());
    draft.prod_files = vec![
        FileAttachment::new("front.png", vec![0xAA; 64]),
        FileAttachment::new("back.png", vec![0xBB; 32]),
        FileAttachment::new("stitch-guide.pdf", vec![0xCC; 128]),
    ];
    draft.print_files = vec![FileAttachment::new("tag-art.svg", b"<svg/>".to_vec())];

    client.submit_draft(draft).await.unwrap();

    let parts = received.lock().await;
    let prod: Vec<_> = parts.iter().filter(|p| p.name == "prod_files").collect();
    let print: Vec<_> = parts.iter().filter(|p| p.name == "print_files").collect();
    assert_eq!(prod.len(), 3);
    assert_eq!(print.len(), 1);

    assert_eq!(prod[0].file_name.as_deref(), Some("front.png"));
    assert_eq!(prod[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(prod[0].len, 64);
    assert_eq!(prod[2].file_name.as_deref(), Some("stitch-guide.pdf"));
    assert_eq!(prod[2].content_type.as_deref(), Some("application/pdf"));
    assert_eq!(print[0].file_name.as_deref(), Some("tag-art.svg"));

    // Text fields ride along in the same request
    let notes = parts.iter().find(|p| p.name == "notes").unwrap();
    assert_eq!(notes.text.as_deref(), Some("Rush if possible"));
    assert!(parts.iter().any(|p| p.name == "company_name"));
}

#[tokio::test]
async fn test_endpoint_rejection_is_surfaced_without_retry() {
    let base_url = spawn_rejecting_receiver().await;
    let client = ClientConfig::new(&base_url).build_client();

    let err = client.submit_draft(valid_draft()).await.unwrap_err();
    match err {
        ClientError::Rejected { status, body } => {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body, "quantity exceeds stock");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_the_wire() {
    // Nothing is listening here; validation must fail first
    let client = ClientConfig::new("http://127.0.0.1:9").build_client();

    let mut draft = valid_draft();
    draft.company_name.clear();
    draft.due_date = "13/45".to_string();

    let err = client.submit_draft(draft).await.unwrap_err();
    assert!(err.is_recoverable());
    match err {
        ClientError::Validation(v) => {
            assert!(v.contains("company_name"));
            assert!(v.contains("due_date"));
        }
        other => panic!("expected Validation, got {:?}", other),
    }
}
