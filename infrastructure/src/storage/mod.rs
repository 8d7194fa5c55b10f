//! Journey response store adapters

mod json_file;
mod memory;

pub use json_file::JsonFileResponseStore;
pub use memory::InMemoryResponseStore;
