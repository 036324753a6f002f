//! Business logic for composing and rendering bot messages.
//!
//! Everything here is synchronous and free of I/O: the bot handlers gather guild
//! data, call into these services, and send whatever they return.

pub mod access;
pub mod button;
pub mod mention;
pub mod post;
pub mod render;
pub mod template;
pub mod text;
