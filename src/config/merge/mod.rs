//! Merge policy and the service that composes all sources.

pub mod merge_policy;
pub mod service;
