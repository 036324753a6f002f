//! Slash command handler for the `/post` command group.
//!
//! Each invocation is handled independently: the handler fetches the guild's
//! roles, resolves the target channel, and lets the composer decide. Rejections
//! are answered immediately and privately. Accepted posts are acknowledged with a
//! deferred ephemeral response, sent, and then confirmed with a followup carrying
//! the message link.

use std::collections::HashMap;

use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, Interaction, Mentionable,
    Role, RoleId,
};

use crate::{
    bot::command::{parse_post_command, CommandArgs, POST_COMMAND},
    config::Config,
    error::{post::PostError, AppError},
    model::post::{ComposedMessage, PostRequest, Privilege, Requester},
    service::{
        access::AccessGuard,
        post::{compose, is_text_capable},
        render::render_message,
        template::compose_setup_guide,
    },
};

const SEND_FAILED_MESSAGE: &str = "Failed to post the message. Please try again later.";
const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown /post sub-command. Discord may still be updating the command list.";

/// Handles an incoming interaction.
///
/// Only `/post` slash commands are processed. Transport failures are logged and
/// do not affect other invocations.
pub async fn handle_interaction(
    config: &Config,
    guard: &AccessGuard,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.data.name != POST_COMMAND {
        return;
    }

    if let Err(e) = handle_post_command(config, guard, &ctx, &command).await {
        tracing::error!(
            "Failed to handle /{} from {} in guild {:?}: {}",
            POST_COMMAND,
            command.user.name,
            command.guild_id,
            e
        );
    }
}

async fn handle_post_command(
    config: &Config,
    guard: &AccessGuard,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let Some((sub_command, args)) = parse_post_command(&options) else {
        tracing::warn!("Received /{} without a known sub-command", POST_COMMAND);
        return reply_ephemeral(ctx, command, UNKNOWN_COMMAND_MESSAGE).await;
    };

    let Some(guild_id) = command.guild_id else {
        return reply_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };

    let guild_roles = match guild_id.roles(&ctx.http).await {
        Ok(roles) => roles,
        Err(e) => {
            tracing::error!("Failed to fetch roles for guild {}: {}", guild_id, e);
            return reply_ephemeral(ctx, command, SEND_FAILED_MESSAGE).await;
        }
    };
    let requester = match &command.member {
        Some(member) => Requester::from_member(member.permissions, &member.roles, &guild_roles),
        None => Requester::default(),
    };

    match sub_command.target() {
        Some(target) => {
            let request = PostRequest {
                guild_id,
                requester,
                target,
                channel_available: is_text_channel(ctx, config.channel_id(target)).await,
                input: args.post_input(),
            };

            post_to_target(config, guard, ctx, command, request, &guild_roles).await
        }
        None => post_setup_guide(config, guard, ctx, command, &args, requester).await,
    }
}

/// Handles `/post announce` and `/post update`.
async fn post_to_target(
    config: &Config,
    guard: &AccessGuard,
    ctx: &Context,
    command: &CommandInteraction,
    request: PostRequest,
    guild_roles: &HashMap<RoleId, Role>,
) -> Result<(), AppError> {
    let target = request.target;
    let channel_id = config.channel_id(target);

    let message = match compose(&request, guard, guild_roles) {
        Ok(message) => message,
        Err(rejection) => return reject(ctx, command, rejection).await,
    };

    let Some(link) = send_composed(config, ctx, command, channel_id, &message).await? else {
        return Ok(());
    };

    tracing::info!(
        "{} posted \"{}\" to the {} channel {}",
        command.user.name,
        message.title,
        target,
        channel_id
    );

    let mut confirmation = format!("Posted to {}: {}", channel_id.mention(), link);
    if let Some(summary) = message.mention_summary() {
        confirmation.push_str(&format!(" (mentioned: {})", summary));
    }

    followup_ephemeral(ctx, command, &confirmation).await
}

/// Handles `/post info`, which posts the setup guide into the current channel.
async fn post_setup_guide(
    config: &Config,
    guard: &AccessGuard,
    ctx: &Context,
    command: &CommandInteraction,
    args: &CommandArgs,
    requester: Requester,
) -> Result<(), AppError> {
    if let Err(rejection) = guard.require(&requester, &[Privilege::Post]) {
        return reject(ctx, command, rejection).await;
    }

    let channel_id = command.channel_id;
    if !is_text_channel(ctx, channel_id).await {
        return reject(ctx, command, PostError::NotTextChannel).await;
    }

    let key = args.string("key").unwrap_or_default();
    if key.trim().is_empty() {
        return reject(ctx, command, PostError::ValidationEmpty("key")).await;
    }

    let message = compose_setup_guide(key, config.info_download_url.as_deref());
    let Some(link) = send_composed(config, ctx, command, channel_id, &message).await? else {
        return Ok(());
    };

    tracing::info!("{} posted the setup guide to channel {}", command.user.name, channel_id);

    followup_ephemeral(
        ctx,
        command,
        &format!("Posted setup guide to {}: {}", channel_id.mention(), link),
    )
    .await
}

/// Defers the interaction and sends the rendered message.
///
/// # Returns
/// - `Ok(Some(String))` - Link to the posted message
/// - `Ok(None)` - Sending failed; the requester was told and the failure logged
/// - `Err(AppError)` - The interaction itself could not be answered
async fn send_composed(
    config: &Config,
    ctx: &Context,
    command: &CommandInteraction,
    channel_id: ChannelId,
    message: &ComposedMessage,
) -> Result<Option<String>, AppError> {
    command.defer_ephemeral(&ctx.http).await?;

    match channel_id
        .send_message(&ctx.http, render_message(message, &config.brand_name))
        .await
    {
        Ok(sent) => Ok(Some(sent.link())),
        Err(e) => {
            tracing::error!("Failed to send message to channel {}: {}", channel_id, e);
            followup_ephemeral(ctx, command, SEND_FAILED_MESSAGE).await?;
            Ok(None)
        }
    }
}

/// Checks that the channel exists and can receive text messages.
async fn is_text_channel(ctx: &Context, channel_id: ChannelId) -> bool {
    match channel_id.to_channel(ctx).await {
        Ok(channel) => channel.guild().is_some_and(|c| is_text_capable(c.kind)),
        Err(e) => {
            tracing::warn!("Failed to resolve channel {}: {}", channel_id, e);
            false
        }
    }
}

async fn reject(
    ctx: &Context,
    command: &CommandInteraction,
    rejection: PostError,
) -> Result<(), AppError> {
    tracing::debug!(
        "Rejected /{} from {}: {:?}",
        POST_COMMAND,
        command.user.name,
        rejection
    );

    reply_ephemeral(ctx, command, &rejection.to_string()).await
}

async fn reply_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    command
        .create_response(&ctx.http, ephemeral_response(content))
        .await?;

    Ok(())
}

/// Private reply visible only to the requester.
fn ephemeral_response(content: &str) -> CreateInteractionResponse {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);

    CreateInteractionResponse::Message(message)
}

async fn followup_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    let followup = CreateInteractionResponseFollowup::new()
        .content(content)
        .ephemeral(true);

    command.create_followup(&ctx.http, followup).await?;

    Ok(())
}
