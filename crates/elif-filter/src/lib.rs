//! # elif-filter
//!
//! Field-level validation and sanitization rules for the elif framework.
//! Validators judge a field of a record; sanitizers rewrite it in place.
//! Both work against the [`Record`] trait, so any key-value store can be
//! filtered.

pub mod config;
pub mod error;
pub mod isbn;
pub mod record;
pub mod sanitizers;
pub mod strings;
pub mod traits;
pub mod validators;
pub mod value;

// Re-exports for easy access
pub use config::{EncodingMode, FilterConfig};
pub use error::{ConfigError, FilterError, FilterResult};
pub use record::Record;
pub use strings::{PadSide, StringMetrics};
pub use traits::{Rule, SanitizeRule, ValidateRule};
pub use value::Value;

// Built-in rules
pub use sanitizers::{
    date::DateSanitizer,
    length::{
        ExactLengthSanitizer, LengthBetweenSanitizer, MaxLengthSanitizer, MinLengthSanitizer, Padding,
    },
    remove::FieldRemover,
};
pub use validators::{
    isbn::IsbnValidator,
    length::{ExactLengthValidator, LengthBetweenValidator, MaxLengthValidator, MinLengthValidator},
    strict_equal::StrictEqualValidator,
};
