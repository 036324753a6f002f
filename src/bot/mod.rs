//! Discord bot integration.
//!
//! The bot registers the `/post` command group when it connects, answers slash
//! command interactions, and serves the prefix-command templates from guild
//! messages. All decisions are delegated to the service layer; this module only
//! gathers guild data, sends messages and replies to the requester.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data used to validate target channels
//! - `GUILD_MESSAGES` - Receive messages carrying prefix commands
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
