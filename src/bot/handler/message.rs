//! Prefix command handler for the template catalog.

use serenity::all::{Context, CreateAllowedMentions, CreateMessage, Message};

use crate::{
    config::Config,
    service::template::{find_template, render_template},
};

/// Handle message creation in a channel
///
/// Posts the matching template embed when a guild message starts with the command
/// prefix followed by a known template name. Messages from bots, direct messages
/// and unknown commands are ignored.
pub async fn handle_message(config: &Config, ctx: Context, message: Message) {
    if message.author.bot || message.guild_id.is_none() {
        return;
    }

    let Some(command) = parse_prefix_command(&message.content, &config.command_prefix) else {
        return;
    };

    let Some(template) = find_template(command) else {
        return;
    };

    let embed = render_template(template, &config.brand_name, &config.command_prefix);
    let builder = CreateMessage::new()
        .embed(embed)
        .allowed_mentions(CreateAllowedMentions::new());

    if let Err(e) = message.channel_id.send_message(&ctx.http, builder).await {
        tracing::error!(
            "Failed to post template '{}' in channel {}: {}",
            template.command,
            message.channel_id,
            e
        );
    } else {
        tracing::debug!(
            "Posted template '{}' in channel {} for {}",
            template.command,
            message.channel_id,
            message.author.name
        );
    }
}

/// Extracts the command name from a prefixed message.
///
/// The name must follow the prefix directly; anything after the first whitespace
/// is ignored.
pub fn parse_prefix_command<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }

    let rest = content.trim_start().strip_prefix(prefix)?;
    if rest.starts_with(char::is_whitespace) {
        return None;
    }

    rest.split_whitespace().next()
}
