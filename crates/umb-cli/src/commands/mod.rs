//! CLI command implementations

mod setup;

pub use setup::setup;
