//! Route handlers.

pub mod analysis;
pub mod blueprints;
pub mod dashboard;
pub mod health;
pub mod projects;
