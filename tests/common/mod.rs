//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Docs tree and built-site fixtures
//! - Binary lookup for CLI tests
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! fn test_clean_docs() {
//!     let docs = fixtures::create_docs_tree().unwrap();
//!     // run qdoc validate against docs.path()
//! }
//! ```

pub mod fixtures;

use assert_cmd::Command;

/// The qdoc binary with colors turned off
#[allow(dead_code)]
pub fn qdoc() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qdoc"));
    cmd.arg("--no-color").env_remove("RUST_LOG");
    cmd
}
