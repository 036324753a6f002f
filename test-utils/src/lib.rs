//! Omegabot Test Utils
//!
//! Shared testing utilities for the omegabot crate. Discord model objects such as
//! roles cannot be constructed directly because Serenity marks them non-exhaustive,
//! so the factories here build them by deserializing JSON shaped like Discord's API
//! responses.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_role, create_test_role_map};
//!
//! #[test]
//! fn resolves_support_role() {
//!     let roles = create_test_role_map(&[(111, "Owner"), (222, "Support")]);
//!     // Pass `&roles` wherever the guild role set is expected...
//! }
//! ```

pub mod serenity;
