//! Journey domain
//!
//! - [`entities::Journey`]: ordered sections, addressable by `(section, question)`
//! - [`section::Section`]: a named group of questions
//! - [`response::JourneyResponse`]: one user's in-progress answers

pub mod entities;
pub mod response;
pub mod section;
