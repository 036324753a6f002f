//! Button models for the interactive row attached to posted embeds.

/// Visual style of a message button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyleKind {
    Primary,
    #[default]
    Secondary,
    Success,
    Danger,
    Link,
}

impl ButtonStyleKind {
    /// Maps a user-typed style token to a style.
    ///
    /// Matching ignores case and surrounding whitespace. Anything unrecognized
    /// falls back to `Secondary` rather than failing the request.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "success" => Self::Success,
            "danger" => Self::Danger,
            "link" => Self::Link,
            _ => Self::Secondary,
        }
    }
}

/// Raw positional input for one button slot, exactly as the command received it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonSlot {
    pub label: Option<String>,
    pub url: Option<String>,
    pub emoji: Option<String>,
    pub style: Option<String>,
}

/// A validated button ready to be rendered.
///
/// Invariant: when `url` is set the style is always `Link`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    label: String,
    url: Option<String>,
    emoji: Option<String>,
    style: ButtonStyleKind,
}

impl ButtonSpec {
    pub fn new(
        label: impl Into<String>,
        url: Option<String>,
        emoji: Option<String>,
        style: ButtonStyleKind,
    ) -> Self {
        let style = if url.is_some() {
            ButtonStyleKind::Link
        } else {
            style
        };

        Self {
            label: label.into(),
            url,
            emoji,
            style,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn emoji(&self) -> Option<&str> {
        self.emoji.as_deref()
    }

    pub fn style(&self) -> ButtonStyleKind {
        self.style
    }

    /// Custom id for non-link buttons, derived from the row position and the label.
    ///
    /// The position keeps ids unique when labels differ only in case, since Discord
    /// refuses a message with repeated custom ids.
    pub fn custom_id(&self, position: usize) -> String {
        format!(
            "btn_{}_{}",
            position,
            self.label.to_lowercase().replace(' ', "_")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_tokens_ignore_case() {
        assert_eq!(ButtonStyleKind::from_token("SUCCESS"), ButtonStyleKind::Success);
        assert_eq!(ButtonStyleKind::from_token(" Danger "), ButtonStyleKind::Danger);
        assert_eq!(ButtonStyleKind::from_token("primary"), ButtonStyleKind::Primary);
    }

    #[test]
    fn unknown_style_token_is_secondary() {
        assert_eq!(ButtonStyleKind::from_token("fancy"), ButtonStyleKind::Secondary);
        assert_eq!(ButtonStyleKind::from_token(""), ButtonStyleKind::Secondary);
    }

    #[test]
    fn url_forces_link_style() {
        let button = ButtonSpec::new(
            "Shop",
            Some("https://example.com".to_string()),
            None,
            ButtonStyleKind::Danger,
        );

        assert_eq!(button.style(), ButtonStyleKind::Link);
    }

    #[test]
    fn custom_id_is_derived_from_label() {
        let button = ButtonSpec::new("Open Ticket", None, None, ButtonStyleKind::Primary);

        assert_eq!(button.custom_id(1), "btn_1_open_ticket");
        assert_eq!(button.style(), ButtonStyleKind::Primary);
    }

    #[test]
    fn custom_ids_differ_for_labels_differing_in_case() {
        let upper = ButtonSpec::new("Open Ticket", None, None, ButtonStyleKind::Primary);
        let lower = ButtonSpec::new("open ticket", None, None, ButtonStyleKind::Primary);

        assert_ne!(upper.custom_id(1), lower.custom_id(2));
    }
}
