//! Built-in sanitization rules

pub mod date;
pub mod length;
pub mod remove;

pub use date::DateSanitizer;
pub use length::{
    ExactLengthSanitizer, LengthBetweenSanitizer, MaxLengthSanitizer, MinLengthSanitizer,
};
pub use remove::FieldRemover;
