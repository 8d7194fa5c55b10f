//! Journey definitions loaded from TOML files

mod definition;
mod loader;

pub use definition::{
    JourneyDefinition, JourneyDefinitionError, QuestionDefinition, SectionDefinition,
    ValidatorDefinition,
};
pub use loader::JourneyLoader;
