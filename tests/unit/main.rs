//! Unit test harness for rotary-indexer.
//!
//! This module organizes the configuration tests that go through the public API.

mod config_parsing;
mod config_validation;
