//! Crate-level tests for solmod-engine.
