//! Activity Watch Test Utils
//!
//! Provides shared testing utilities for building unit tests for the bot. This crate
//! offers a builder pattern for creating test contexts backed by a temporary directory
//! holding the opt-in file, and factories for Serenity gateway models.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring the opt-in file a test starts with
//! - **TestContext**: Test environment owning the temporary directory
//! - **TestError**: Error types that can occur during test setup
//! - **RecordingResponder**: Interaction double recording command responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_registry_load() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_opted_in_users(["1001", "1002"])
//!         .build()?;
//!
//!     let path = test.opt_in_path();
//!     // Load the registry from `path`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod responder;
pub mod serenity;
