//! Integration test suite for the value classification workspace.
//!
//! This crate provides integration tests that verify the value model and
//! the classification surface work together correctly across the crate
//! boundary.

/// Re-export components for test convenience
pub mod components {
    pub use inspect;
    pub use value_types;
}
