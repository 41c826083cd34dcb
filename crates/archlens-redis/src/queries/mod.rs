//! Redis query implementations.

pub mod analyses;
