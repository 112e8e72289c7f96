//! Common test utilities for sshw CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated home, working and config directories
//! - Host file fixtures

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
