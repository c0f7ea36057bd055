//! Application layer - Use case implementations
//!
//! This module coordinates domain and infrastructure layers to implement the
//! planner's load, print and search use cases.

pub mod loader;
pub mod planner;
