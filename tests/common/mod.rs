//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Fake Next.js and Vite projects with realistic build output
//! - Assertion helpers for report output
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! fn test_vite_profile() {
//!     let project = fixtures::vite_project_with_meta().unwrap();
//!     // run build-profiler against project.path()
//! }
//! ```

pub mod assertions;
pub mod fixtures;
