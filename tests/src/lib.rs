//! Cross-crate integration tests live in `integration_test.rs`.
