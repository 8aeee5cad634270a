//! CLI command implementations.

pub mod location;
pub mod rollup;
pub mod trip;
