//! Parallax End-to-End Test Infrastructure
//!
//! Integration tests for the full configuration-to-PNG pipeline:
//!
//! - Generation: layer config file -> composited image -> PNG
//! - Determinism: byte-identical output across runs
//! - Validation: fatal configuration errors abort a reload end to end
//!
//! ```bash
//! cargo test -p parallax-tests
//! ```

pub mod harness;

pub use harness::{decode_png, demo_config_path, TestHarness};
