//! CLI command implementations.

pub mod index;
pub mod interactive;
pub mod search;
pub mod status;
