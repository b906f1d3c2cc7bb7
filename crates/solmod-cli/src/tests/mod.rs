//! Runtime tests for the solmod CLI.

mod support;
mod unit;
