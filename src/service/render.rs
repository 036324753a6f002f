//! Conversion of composed messages into Serenity message builders.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateAllowedMentions, CreateButton, CreateEmbed,
    CreateEmbedAuthor, CreateEmbedFooter, CreateMessage, ReactionType,
};

use crate::model::{
    button::{ButtonSpec, ButtonStyleKind},
    post::ComposedMessage,
};

/// Discord's "blurple" brand colour used for posted embeds.
pub const EMBED_COLOUR: u32 = 0x5865F2;

/// Builds the outbound message for a composed post.
///
/// The embed carries the title, description, optional footer and the brand author
/// tag. Mention markup goes in the message content, and the allowed mentions are
/// limited to what the composer approved: `@everyone` only when approved and
/// exactly the resolved role ids. User pings are never allowed.
pub fn render_message(message: &ComposedMessage, brand_name: &str) -> CreateMessage {
    let mut embed = CreateEmbed::new()
        .title(&message.title)
        .description(&message.body)
        .colour(EMBED_COLOUR)
        .author(CreateEmbedAuthor::new(brand_name));

    if let Some(footer) = &message.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }

    let mut builder = CreateMessage::new()
        .embed(embed)
        .allowed_mentions(allowed_mentions(message));

    if !message.mention_text.is_empty() {
        builder = builder.content(&message.mention_text);
    }

    if let Some(row) = button_row(&message.buttons) {
        builder = builder.components(vec![row]);
    }

    builder
}

/// Allowed mentions mirroring exactly the pings the composer approved.
pub fn allowed_mentions(message: &ComposedMessage) -> CreateAllowedMentions {
    CreateAllowedMentions::new()
        .everyone(message.mention_everyone)
        .roles(message.mention_roles.iter().map(|role| role.id))
        .empty_users()
}

/// Builds a single action row holding the buttons, or `None` when there are none.
pub fn button_row(buttons: &[ButtonSpec]) -> Option<CreateActionRow> {
    if buttons.is_empty() {
        return None;
    }

    Some(CreateActionRow::Buttons(
        buttons
            .iter()
            .enumerate()
            .map(|(index, button)| render_button(index + 1, button))
            .collect(),
    ))
}

fn render_button(position: usize, button: &ButtonSpec) -> CreateButton {
    let mut created = match button.url() {
        Some(url) => CreateButton::new_link(url),
        None => CreateButton::new(button.custom_id(position)).style(button_style(button.style())),
    };
    created = created.label(button.label());

    if let Some(emoji) = button.emoji() {
        match ReactionType::try_from(emoji) {
            Ok(reaction) => created = created.emoji(reaction),
            Err(e) => tracing::warn!("Ignoring invalid button emoji '{}': {}", emoji, e),
        }
    }

    created
}

fn button_style(style: ButtonStyleKind) -> ButtonStyle {
    match style {
        ButtonStyleKind::Primary => ButtonStyle::Primary,
        ButtonStyleKind::Secondary => ButtonStyle::Secondary,
        ButtonStyleKind::Success => ButtonStyle::Success,
        ButtonStyleKind::Danger => ButtonStyle::Danger,
        // Link buttons without a URL cannot exist; render them as secondary.
        ButtonStyleKind::Link => ButtonStyle::Secondary,
    }
}
