//! Built-in validator variants
//!
//! Each variant is plain configuration implementing
//! [`Validator`](super::validator::Validator).

pub mod conditional_required;
pub mod confirmation_checkbox;
pub mod date;
pub mod pattern;
pub mod required;
pub mod string_length;

pub use conditional_required::ConditionalRequiredValidator;
pub use confirmation_checkbox::ConfirmationCheckboxValidator;
pub use date::{DateCheck, DateValidator};
pub use pattern::PatternValidator;
pub use required::RequiredValidator;
pub use string_length::StringLengthValidator;
