use thiserror::Error;

use crate::model::post::{Privilege, PostTarget};

/// Expected rejections of a post request.
///
/// Every variant is a normal, user-facing outcome: the `Display` text is sent back
/// privately to the requester and nothing is retried or logged above debug level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostError {
    /// The requester lacks the privilege needed for this request.
    #[error("{}", .0.denial_message())]
    Forbidden(Privilege),

    /// The configured target channel does not exist or cannot hold messages.
    #[error("{0} channel not found. Check the ID.")]
    ChannelNotFound(PostTarget),

    /// A required field is blank once escape sequences and whitespace are handled.
    #[error("The {0} cannot be empty.")]
    ValidationEmpty(&'static str),

    /// A button URL that Discord would refuse, which would fail the whole message.
    #[error("Button {slot} has an invalid URL. Use a full http(s) link.")]
    InvalidButtonUrl {
        /// One-based button slot
        slot: usize,
    },

    /// The command was invoked somewhere that cannot receive an embed.
    #[error("This command can only be used in text channels.")]
    NotTextChannel,
}
