//! Built-in validation rules

pub mod isbn;
pub mod length;
pub mod strict_equal;

pub use isbn::IsbnValidator;
pub use length::{
    ExactLengthValidator, LengthBetweenValidator, MaxLengthValidator, MinLengthValidator,
};
pub use strict_equal::StrictEqualValidator;
