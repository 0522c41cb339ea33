//! Small helpers shared by the service and bot layers.

pub mod format;
pub mod mention;
pub mod parse;
