//! Assembly of the positional button slots into validated buttons.

use url::Url;

use crate::{
    error::post::PostError,
    model::button::{ButtonSlot, ButtonSpec, ButtonStyleKind},
    service::text::{truncate, BUTTON_LABEL_LIMIT},
};

/// URL schemes Discord accepts on link buttons.
const LINK_SCHEMES: &[&str] = &["http", "https", "discord"];

/// Turns the raw button slots into buttons, in slot order.
///
/// A slot without a label is skipped entirely, whatever else it carries. Style
/// defaults to secondary; a URL forces the link style.
///
/// # Returns
/// - `Ok(Vec<ButtonSpec>)` - One button per labelled slot
/// - `Err(PostError::InvalidButtonUrl)` - A labelled slot has a URL Discord would reject
pub fn assemble_buttons(slots: &[ButtonSlot]) -> Result<Vec<ButtonSpec>, PostError> {
    let mut buttons = Vec::with_capacity(slots.len());

    for (index, slot) in slots.iter().enumerate() {
        let Some(label) = non_blank(slot.label.as_deref()) else {
            if slot.url.is_some() || slot.emoji.is_some() {
                tracing::debug!("Skipping button slot {} without a label", index + 1);
            }
            continue;
        };

        let url = match non_blank(slot.url.as_deref()) {
            Some(url) if is_link_url(url) => Some(url.to_string()),
            Some(_) => return Err(PostError::InvalidButtonUrl { slot: index + 1 }),
            None => None,
        };
        let style = slot
            .style
            .as_deref()
            .map(ButtonStyleKind::from_token)
            .unwrap_or_default();

        buttons.push(ButtonSpec::new(
            truncate(label, BUTTON_LABEL_LIMIT),
            url,
            non_blank(slot.emoji.as_deref()).map(str::to_string),
            style,
        ));
    }

    Ok(buttons)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Whether `value` is an absolute URL Discord accepts on a link button.
pub fn is_link_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| LINK_SCHEMES.contains(&url.scheme()))
}
