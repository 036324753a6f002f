//! Domain models shared by the services and the bot handlers.
//!
//! These types carry no Discord transport concerns beyond plain id types. They are
//! built per command invocation, passed through the composer, and dropped once the
//! message is sent.

pub mod button;
pub mod mention;
pub mod post;
pub mod template;
