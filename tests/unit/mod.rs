//! Unit test harness for trapezoid-motion.
//!
//! This module organizes configuration tests run against the public API.

mod config_parsing;
mod config_validation;
