//! ArchLens Redis Data Layer
//!
//! Async Redis persistence for analyses, exposed through
//! [`archlens_core::AnalysisService`].

pub mod client;
pub mod queries;
pub mod service;

pub use client::{init_pool, RedisError, RedisPool, RedisResult};
pub use queries::analyses;
pub use service::RedisAnalysisService;
