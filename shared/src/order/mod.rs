//! Order submission model
//!
//! The intake flow goes through two types: [`OrderDraft`] holds the raw
//! operator input exactly as typed, and [`OrderSubmission`] is the
//! validated, typed order. The only way to obtain an `OrderSubmission`
//! is [`OrderDraft::into_submission`], so a submission is well-formed by
//! construction and never mutated afterwards.

use crate::error::ValidationError;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;
use validator::Validate;


/// Due date pattern: MM/DD with month 01-12 and day 01-31.
/// Pattern-only check, no calendar validation ("02/29" passes).
static DUE_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])$").expect("valid due date regex")
});

/// How firm the requested due date is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateType {
    #[serde(rename = "Hard Date")]
    HardDate,
    #[serde(rename = "Soft Date")]
    SoftDate,
}

impl DateType {
    /// The two accepted wire values, in form order
    pub const VALUES: [&'static str; 2] = ["Hard Date", "Soft Date"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateType::HardDate => "Hard Date",
            DateType::SoftDate => "Soft Date",
        }
    }

    /// Parse one of the two fixed wire values
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Hard Date" => Some(DateType::HardDate),
            "Soft Date" => Some(DateType::SoftDate),
            _ => None,
        }
    }
}

/// A binary file attached to an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub file_name: String,
    /// MIME type sent with the file part
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    /// Create an attachment, guessing the MIME type from the file name
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Create an attachment with an explicit MIME type
    pub fn with_content_type(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Load an attachment from disk
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "attachment".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Raw operator input for one form completion
///
/// Everything the operator types arrives as text; `quantity` is the one
/// field the form collects as a number, kept signed here so zero and
/// negative input reach validation instead of failing earlier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderDraft {
    #[validate(length(min = 1, message = "company_name is required"))]
    pub company_name: String,

    #[validate(length(min = 1, message = "design_name is required"))]
    pub design_name: String,

    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i64,

    #[validate(length(min = 1, message = "product is required"))]
    pub product: String,

    #[validate(regex(path = *DUE_DATE_RE, message = "due_date must match MM/DD"))]
    pub due_date: String,

    #[validate(custom(function = validate_price))]
    pub price: String,

    #[validate(custom(function = validate_date_type))]
    pub date_type: String,

    pub referral: Option<String>,

    #[validate(length(min = 1, message = "material1 is required"))]
    pub material1: String,

    pub material2: Option<String>,
    pub material3: Option<String>,
    pub material4: Option<String>,
    pub material5: Option<String>,
    pub back_material: Option<String>,

    #[validate(length(min = 1, message = "fur_color is required"))]
    pub fur_color: String,

    #[validate(length(min = 1, message = "backing_type is required"))]
    pub backing_type: String,

    pub notes: Option<String>,

    #[serde(skip)]
    pub prod_files: Vec<FileAttachment>,

    #[serde(skip)]
    pub print_files: Vec<FileAttachment>,
}

fn validate_price(value: &str) -> Result<(), validator::ValidationError> {
    let invalid = |msg: &'static str| {
        let mut err = validator::ValidationError::new("price");
        err.message = Some(msg.into());
        err
    };

    let parsed =
        Decimal::from_str(value.trim()).map_err(|_| invalid("price must be a number"))?;
    if parsed.scale() > 2 {
        return Err(invalid("price must have at most 2 decimal places"));
    }
    Ok(())
}

fn validate_date_type(value: &str) -> Result<(), validator::ValidationError> {
    if DateType::parse(value).is_some() {
        return Ok(());
    }
    let mut err = validator::ValidationError::new("date_type");
    err.message = Some("date_type must be \"Hard Date\" or \"Soft Date\"".into());
    Err(err)
}

impl OrderDraft {
    /// Validate the draft and produce the typed submission
    ///
    /// Runs every field rule and reports all failures together; the
    /// draft is only consumed when validation passes.
    pub fn into_submission(self) -> Result<OrderSubmission, ValidationError> {
        Validate::validate(&self).map_err(ValidationError::from)?;

        // Cannot fail once the field rules above have passed
        let quantity = u32::try_from(self.quantity)
            .map_err(|_| ValidationError::single("quantity", "quantity is out of range"))?;
        let price = Decimal::from_str(self.price.trim())
            .map_err(|_| ValidationError::single("price", "price must be a number"))?;
        let date_type = DateType::parse(&self.date_type).ok_or_else(|| {
            ValidationError::single("date_type", "date_type must be \"Hard Date\" or \"Soft Date\"")
        })?;

        Ok(OrderSubmission {
            company_name: self.company_name,
            design_name: self.design_name,
            quantity,
            product: self.product,
            due_date: self.due_date,
            price,
            date_type,
            referral: self.referral,
            material1: self.material1,
            material2: self.material2,
            material3: self.material3,
            material4: self.material4,
            material5: self.material5,
            back_material: self.back_material,
            fur_color: self.fur_color,
            backing_type: self.backing_type,
            notes: self.notes,
            prod_files: self.prod_files,
            print_files: self.print_files,
        })
    }
}

/// A validated order, ready to transmit
///
/// Field order matches the form layout; optional fields that were left
/// blank are omitted from the outbound payload entirely.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSubmission {
    pub company_name: String,
    pub design_name: String,
    pub quantity: u32,
    pub product: String,
    pub due_date: String,
    pub price: Decimal,
    pub date_type: DateType,
    pub referral: Option<String>,
    pub material1: String,
    pub material2: Option<String>,
    pub material3: Option<String>,
    pub material4: Option<String>,
    pub material5: Option<String>,
    pub back_material: Option<String>,
    pub fur_color: String,
    pub backing_type: String,
    pub notes: Option<String>,
    #[serde(skip)]
    pub prod_files: Vec<FileAttachment>,
    #[serde(skip)]
    pub print_files: Vec<FileAttachment>,
}

impl OrderSubmission {
    /// Text parts of the multipart payload, in form order
    ///
    /// `None` optionals produce no part at all.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields: Vec<(&'static str, String)> = vec![
            ("company_name", self.company_name.clone()),
            ("design_name", self.design_name.clone()),
            ("quantity", self.quantity.to_string()),
            ("product", self.product.clone()),
            ("due_date", self.due_date.clone()),
            ("price", self.price.to_string()),
            ("date_type", self.date_type.as_str().to_string()),
        ];

        if let Some(referral) = &self.referral {
            fields.push(("referral", referral.clone()));
        }
        fields.push(("material1", self.material1.clone()));

        let materials: [(&'static str, &Option<String>); 5] = [
            ("material2", &self.material2),
            ("material3", &self.material3),
            ("material4", &self.material4),
            ("material5", &self.material5),
            ("back_material", &self.back_material),
        ];
        for (name, value) in materials {
            if let Some(value) = value.as_ref() {
                fields.push((name, value.clone()));
            }
        }

        fields.push(("fur_color", self.fur_color.clone()));
        fields.push(("backing_type", self.backing_type.clone()));
        if let Some(notes) = &self.notes {
            fields.push(("notes", notes.clone()));
        }

        fields
    }

    /// Total number of attached files across both sets
    pub fn file_count(&self) -> usize {
        self.prod_files.len() + self.print_files.len()
    }
}
