//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod journey_provider;
pub mod progress;
pub mod response_store;
