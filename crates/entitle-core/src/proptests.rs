//! Property-based tests for normalization.
