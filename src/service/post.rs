//! Composition of `/post` requests into outbound messages.
//!
//! `compose` is the single decision point for a post: it applies the permission and
//! channel gates, cleans up the text, resolves mentions and assembles buttons. It
//! performs no I/O, so the bot handler gathers the guild data first and does the
//! sending afterwards.

use std::collections::HashMap;

use serenity::all::{ChannelType, Role, RoleId};

use crate::{
    error::post::PostError,
    model::{
        mention::MentionRequest,
        post::{ComposedMessage, PostRequest, Privilege},
    },
    service::{
        access::AccessGuard,
        button::assemble_buttons,
        mention::{mention_text, resolve_roles},
        text::{normalize, truncate, BODY_LIMIT, FOOTER_LIMIT, TITLE_LIMIT},
    },
};

#[cfg(test)]
mod test;

/// Whether a channel of this kind can receive posted embeds.
///
/// Text and announcement channels qualify; voice, stage, forum, category and
/// thread channels do not.
pub fn is_text_capable(kind: ChannelType) -> bool {
    matches!(kind, ChannelType::Text | ChannelType::News)
}

/// Composes a post request into a message ready for rendering.
///
/// Gates are evaluated in order: posting privilege, `@everyone` privilege (only when
/// requested), target channel, then required fields. Title, body and footer have
/// their typed escapes normalized and are cut to 256, 4096 and 2048 characters. A
/// footer that ends up empty is dropped.
///
/// # Arguments
/// - `request` - Requester, target and raw command input
/// - `guard` - Allow-lists for each privilege
/// - `guild_roles` - Roles of the guild, used to resolve `mention_roles`
///
/// # Returns
/// - `Ok(ComposedMessage)` - Message to send, with the approved pings
/// - `Err(PostError::Forbidden)` - Requester lacks a required privilege
/// - `Err(PostError::ChannelNotFound)` - Target channel is missing or not text-capable
/// - `Err(PostError::ValidationEmpty)` - Title or body is blank after normalization
/// - `Err(PostError::InvalidButtonUrl)` - A button URL would be refused by Discord
pub fn compose(
    request: &PostRequest,
    guard: &AccessGuard,
    guild_roles: &HashMap<RoleId, Role>,
) -> Result<ComposedMessage, PostError> {
    let input = &request.input;

    let mut privileges = vec![Privilege::Post];
    if input.mention_everyone {
        privileges.push(Privilege::MentionEveryone);
    }
    guard.require(&request.requester, &privileges)?;

    if !request.channel_available {
        return Err(PostError::ChannelNotFound(request.target));
    }

    let title = normalize(Some(&input.title))
        .filter(|title| !title.is_empty())
        .ok_or(PostError::ValidationEmpty("title"))?;
    let body = normalize(Some(&input.body))
        .filter(|body| !body.is_empty())
        .ok_or(PostError::ValidationEmpty("body"))?;
    let footer = normalize(input.footer.as_deref())
        .filter(|footer| !footer.is_empty())
        .map(|footer| truncate(&footer, FOOTER_LIMIT));

    let mentions = MentionRequest::parse(input.mention_everyone, input.mention_roles.as_deref());
    let mention_roles = resolve_roles(&mentions, request.guild_id, guild_roles);
    let buttons = assemble_buttons(&input.buttons)?;

    Ok(ComposedMessage {
        title: truncate(&title, TITLE_LIMIT),
        body: truncate(&body, BODY_LIMIT),
        footer,
        mention_text: mention_text(mentions.everyone, &mention_roles),
        mention_everyone: mentions.everyone,
        mention_roles,
        buttons,
    })
}
