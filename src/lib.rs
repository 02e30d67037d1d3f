// Card Collector - Core Library
// Exposes all modules for use in the terminal UI, web server, and tests

pub mod analytics;
pub mod config;
pub mod entities;
pub mod form;
pub mod views;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use analytics::{
    AnalyticsSnapshot, FixedMetrics, MetricsProvider, ProgressRow, RandomMetrics, Summary,
};
pub use config::{AppConfig, ServerSettings};
pub use entities::{Category, CategoryRegistry, ConditionGrade, ConditionRegistry};
pub use form::{
    AddCardForm, CardField, CardFormInput, CardSubmission, FieldValidation, ValidationError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
