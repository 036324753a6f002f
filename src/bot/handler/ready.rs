//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after authentication. Besides logging the
//! connection, it registers the global `/post` command group so the command
//! definitions always match this build of the bot.

use serenity::all::{Command, Context, Ready};

use crate::bot::command::post_command;

/// Handles the ready event when the bot connects to Discord.
///
/// Command registration failures are logged and do not stop the bot; prefix
/// commands keep working and registration is retried on the next reconnect.
///
/// # Arguments
/// - `ctx` - Discord context used to register commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, vec![post_command()]).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
