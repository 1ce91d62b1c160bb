//! Library crate root re-exporting validator, configuration, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod validator;

pub use lib::errors::FormError;
pub use validator::{
    validate, FieldValue, FormRecord, FormValidator, MissingFieldPolicy, NotificationSink,
    RecordingSink, RequiredField, ValidationReport,
};
