//! Integration tests for the filesystem fingerprint store

mod skip_behavior;
mod test_utils;
