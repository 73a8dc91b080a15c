//! Form layout for the order intake screen
//!
//! [`OrderForm::render`] produces the field layout a front end displays
//! to the operator. The layout is data only; how it is drawn (terminal,
//! HTML, native widgets) is up to the caller.

use crate::order::DateType;
use serde::Serialize;

/// What kind of input a field takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Whole number
    Integer,
    /// Monetary amount, two decimal places
    Decimal,
    /// MM/DD month-and-day
    MonthDay,
    /// One of a fixed set of options
    Select,
    /// Multi-line free text
    TextArea,
    /// Zero or more file attachments
    FileSet,
}

/// One field of the intake form
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    /// Part name used on the wire
    pub name: &'static str,
    /// Label shown to the operator
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Options for [`FieldKind::Select`] fields, empty otherwise
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub options: &'static [&'static str],
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            options: &[],
        }
    }

    const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select,
            required: true,
            options,
        }
    }
}

/// The rendered field layout, in display order
#[derive(Debug, Clone, Serialize)]
pub struct FormLayout {
    pub fields: Vec<FieldSpec>,
}

impl FormLayout {
    /// Look up a field by wire name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Wire names of all required fields, in display order
    pub fn required_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }
}

/// The order intake form
pub struct OrderForm;

impl OrderForm {
    /// Produce the field layout
    pub fn render() -> FormLayout {
        FormLayout {
            fields: vec![
                FieldSpec::new("company_name", "Company name", FieldKind::Text, true),
                FieldSpec::new("design_name", "Design name", FieldKind::Text, true),
                FieldSpec::new("quantity", "Quantity", FieldKind::Integer, true),
                FieldSpec::new("product", "Product", FieldKind::Text, true),
                FieldSpec::new("due_date", "Due date (MM/DD)", FieldKind::MonthDay, true),
                FieldSpec::new("price", "Price each", FieldKind::Decimal, true),
                FieldSpec::select("date_type", "Date type", &DateType::VALUES),
                FieldSpec::new("referral", "How did you hear about us?", FieldKind::Text, false),
                FieldSpec::new("material1", "Material 1", FieldKind::Text, true),
                FieldSpec::new("material2", "Material 2", FieldKind::Text, false),
                FieldSpec::new("material3", "Material 3", FieldKind::Text, false),
                FieldSpec::new("material4", "Material 4", FieldKind::Text, false),
                FieldSpec::new("material5", "Material 5", FieldKind::Text, false),
                FieldSpec::new("back_material", "Back material", FieldKind::Text, false),
                FieldSpec::new("fur_color", "Fur color", FieldKind::Text, true),
                FieldSpec::new("backing_type", "Backing type", FieldKind::Text, true),
                FieldSpec::new("notes", "Notes", FieldKind::TextArea, false),
                FieldSpec::new("prod_files", "Production files", FieldKind::FileSet, false),
                FieldSpec::new("print_files", "Print files", FieldKind::FileSet, false),
            ],
        }
    }
}
