//! Library surface of the survey CLI, shared by the binary and its tests.

pub mod logging;
pub mod render;
