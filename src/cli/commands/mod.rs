//! Command implementations dispatched by the session loop.

pub mod generate;
pub mod get;
pub mod list;
pub mod set;
