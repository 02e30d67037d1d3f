// 📝 Add-Card Form - Field validators and the form controller
//
// Each field has an explicit validator returning a FieldValidation.
// AddCardForm composes them, tracks inline errors and owns the reactive
// category → subcategory relationship.

use crate::config::AppConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// FIELDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardField {
    Name,
    Category,
    Subcategory,
    Condition,
    PurchasePrice,
    PurchaseDate,
    Notes,
}

impl CardField {
    /// Fields in display order
    pub const ALL: [CardField; 7] = [
        CardField::Name,
        CardField::Category,
        CardField::Subcategory,
        CardField::Condition,
        CardField::PurchasePrice,
        CardField::PurchaseDate,
        CardField::Notes,
    ];

    /// Form-encoding key (matches the serde names of CardFormInput)
    pub fn key(&self) -> &'static str {
        match self {
            CardField::Name => "name",
            CardField::Category => "category",
            CardField::Subcategory => "subcategory",
            CardField::Condition => "condition",
            CardField::PurchasePrice => "purchase_price",
            CardField::PurchaseDate => "purchase_date",
            CardField::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardField::Name => "Card Name",
            CardField::Category => "Category",
            CardField::Subcategory => "Subcategory",
            CardField::Condition => "Condition",
            CardField::PurchasePrice => "Purchase Price",
            CardField::PurchaseDate => "Purchase Date",
            CardField::Notes => "Notes",
        }
    }

    /// Category, subcategory and condition are picked from configured options
    pub fn is_select(&self) -> bool {
        matches!(
            self,
            CardField::Category | CardField::Subcategory | CardField::Condition
        )
    }
}

// ============================================================================
// RAW INPUT
// ============================================================================

/// Raw field values exactly as the user entered them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardFormInput {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub condition: String,
    pub purchase_price: String,
    pub purchase_date: String,
    pub notes: String,
}

impl CardFormInput {
    pub fn get(&self, field: CardField) -> &str {
        match field {
            CardField::Name => &self.name,
            CardField::Category => &self.category,
            CardField::Subcategory => &self.subcategory,
            CardField::Condition => &self.condition,
            CardField::PurchasePrice => &self.purchase_price,
            CardField::PurchaseDate => &self.purchase_date,
            CardField::Notes => &self.notes,
        }
    }

    fn slot(&mut self, field: CardField) -> &mut String {
        match field {
            CardField::Name => &mut self.name,
            CardField::Category => &mut self.category,
            CardField::Subcategory => &mut self.subcategory,
            CardField::Condition => &mut self.condition,
            CardField::PurchasePrice => &mut self.purchase_price,
            CardField::PurchaseDate => &mut self.purchase_date,
            CardField::Notes => &mut self.notes,
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidation {
    Valid,
    Invalid(String),
}

impl FieldValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldValidation::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldValidation::Valid => None,
            FieldValidation::Invalid(message) => Some(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: CardField,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.key(), self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

pub fn validate_required(value: &str, message: &str) -> FieldValidation {
    if value.trim().is_empty() {
        FieldValidation::Invalid(message.to_string())
    } else {
        FieldValidation::Valid
    }
}

pub fn validate_name(value: &str) -> FieldValidation {
    validate_required(value, "Card name is required")
}

/// Category must be present and configured
pub fn validate_category(config: &AppConfig, value: &str) -> FieldValidation {
    if config.categories.find_by_id(value.trim()).is_none() {
        return FieldValidation::Invalid("Category is required".to_string());
    }
    FieldValidation::Valid
}

/// Subcategory must be one of the selected category's subcategories
pub fn validate_subcategory(config: &AppConfig, category: &str, value: &str) -> FieldValidation {
    let valid = config
        .categories
        .find_by_id(category.trim())
        .map(|c| c.has_subcategory(value))
        .unwrap_or(false);

    if valid {
        FieldValidation::Valid
    } else {
        FieldValidation::Invalid("Subcategory is required".to_string())
    }
}

pub fn validate_condition(config: &AppConfig, value: &str) -> FieldValidation {
    if config.conditions.find_by_id(value.trim()).is_none() {
        return FieldValidation::Invalid("Condition is required".to_string());
    }
    FieldValidation::Valid
}

/// Optional; when present it must be a finite number ≥ 0
pub fn validate_purchase_price(value: &str) -> FieldValidation {
    let value = value.trim();
    if value.is_empty() {
        return FieldValidation::Valid;
    }

    match value.parse::<f64>() {
        Ok(price) if !price.is_finite() => {
            FieldValidation::Invalid("Purchase price must be a number".to_string())
        }
        Ok(price) if price < 0.0 => {
            FieldValidation::Invalid("Purchase price must be at least 0".to_string())
        }
        Ok(_) => FieldValidation::Valid,
        Err(_) => FieldValidation::Invalid("Purchase price must be a number".to_string()),
    }
}

/// Optional; when present it must be YYYY-MM-DD
pub fn validate_purchase_date(value: &str) -> FieldValidation {
    let value = value.trim();
    if value.is_empty() {
        return FieldValidation::Valid;
    }

    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(_) => FieldValidation::Valid,
        Err(_) => FieldValidation::Invalid(
            "Purchase date must be a valid date (YYYY-MM-DD)".to_string(),
        ),
    }
}

// ============================================================================
// SUBMISSION
// ============================================================================

/// A validated card, typed. Only ever logged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSubmission {
    pub name: String,
    pub category_id: String,
    pub subcategory: String,
    pub condition_id: String,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Default downstream handler for a valid submission
///
/// Posting to the collection API is not implemented; the submission is
/// written to the debug log and dropped.
pub fn log_submission(submission: &CardSubmission) {
    tracing::debug!(
        name = %submission.name,
        category = %submission.category_id,
        subcategory = %submission.subcategory,
        condition = %submission.condition_id,
        price = ?submission.purchase_price,
        date = ?submission.purchase_date,
        "card submitted"
    );
}

// ============================================================================
// FORM CONTROLLER
// ============================================================================

/// Controlled add-card form bound to the application config
#[derive(Debug, Clone)]
pub struct AddCardForm<'a> {
    config: &'a AppConfig,
    input: CardFormInput,
    errors: Vec<ValidationError>,
}

impl<'a> AddCardForm<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        AddCardForm {
            config,
            input: CardFormInput::default(),
            errors: Vec::new(),
        }
    }

    /// Start from raw input, dropping a subcategory that does not belong to
    /// the chosen category
    pub fn with_input(config: &'a AppConfig, input: CardFormInput) -> Self {
        let category = input.category.clone();
        let mut form = AddCardForm {
            config,
            input,
            errors: Vec::new(),
        };
        form.select_category(&category);
        form
    }

    pub fn config(&self) -> &AppConfig {
        self.config
    }

    pub fn input(&self) -> &CardFormInput {
        &self.input
    }

    pub fn value(&self, field: CardField) -> &str {
        self.input.get(field)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_for(&self, field: CardField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Options for the subcategory select; empty until a category is chosen
    pub fn subcategory_options(&self) -> &[String] {
        self.config.categories.subcategories_of(&self.input.category)
    }

    /// Change category; a subcategory not in the new list is cleared
    pub fn select_category(&mut self, category_id: &str) {
        self.input.category = category_id.to_string();

        let keep = self
            .config
            .categories
            .find_by_id(category_id)
            .map(|c| c.has_subcategory(&self.input.subcategory))
            .unwrap_or(false);

        if !keep {
            self.input.subcategory.clear();
        }
        self.clear_error(CardField::Category);
    }

    /// Set one field; its previous inline error is dropped, others stay
    pub fn set_field(&mut self, field: CardField, value: impl Into<String>) {
        let value = value.into();
        if field == CardField::Category {
            self.select_category(&value);
            return;
        }
        *self.input.slot(field) = value;
        self.clear_error(field);
    }

    /// Mutable access for keystroke-level editing of free-text fields
    pub fn field_mut(&mut self, field: CardField) -> &mut String {
        self.clear_error(field);
        self.input.slot(field)
    }

    fn clear_error(&mut self, field: CardField) {
        self.errors.retain(|e| e.field != field);
    }

    pub fn validate_field(&self, field: CardField) -> FieldValidation {
        let input = &self.input;
        match field {
            CardField::Name => validate_name(&input.name),
            CardField::Category => validate_category(self.config, &input.category),
            CardField::Subcategory => {
                validate_subcategory(self.config, &input.category, &input.subcategory)
            }
            CardField::Condition => validate_condition(self.config, &input.condition),
            CardField::PurchasePrice => validate_purchase_price(&input.purchase_price),
            CardField::PurchaseDate => validate_purchase_date(&input.purchase_date),
            CardField::Notes => FieldValidation::Valid,
        }
    }

    /// Run every validator, collecting all failures
    pub fn validate(&self) -> ValidationResult<CardSubmission> {
        let errors: Vec<ValidationError> = CardField::ALL
            .iter()
            .filter_map(|&field| match self.validate_field(field) {
                FieldValidation::Valid => None,
                FieldValidation::Invalid(message) => Some(ValidationError { field, message }),
            })
            .collect();

        if errors.is_empty() {
            Ok(self.build_submission())
        } else {
            Err(errors)
        }
    }

    /// Validate and hand a valid submission to `on_valid`
    ///
    /// On failure the errors are kept for inline display and `on_valid` is
    /// not called.
    pub fn submit<F>(&mut self, on_valid: F) -> ValidationResult<CardSubmission>
    where
        F: FnOnce(&CardSubmission),
    {
        match self.validate() {
            Ok(submission) => {
                self.errors.clear();
                on_valid(&submission);
                Ok(submission)
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "add-card form rejected");
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    pub fn reset(&mut self) {
        self.input = CardFormInput::default();
        self.errors.clear();
    }

    fn build_submission(&self) -> CardSubmission {
        let input = &self.input;
        let notes = input.notes.trim();

        CardSubmission {
            name: input.name.trim().to_string(),
            category_id: input.category.trim().to_string(),
            subcategory: input.subcategory.clone(),
            condition_id: input.condition.trim().to_string(),
            purchase_price: input.purchase_price.trim().parse().ok(),
            purchase_date: NaiveDate::parse_from_str(input.purchase_date.trim(), DATE_FORMAT).ok(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
