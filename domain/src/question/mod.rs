//! Question domain
//!
//! - [`entities::Question`]: one form field's definition
//! - [`kind::QuestionKind`]: standard or specialized question types

pub mod entities;
pub mod kind;
