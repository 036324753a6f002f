//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return, with sensible defaults for every field the
//! tests don't care about.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create a single Serenity Role
//! - `role::create_test_role_map` - Create a guild role set keyed by `RoleId`

pub mod role;

// Re-export commonly used functions for convenience
pub use role::{create_test_role, create_test_role_map, create_test_role_with_position};
