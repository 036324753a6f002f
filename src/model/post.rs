//! Models for `/post` requests and the messages they produce.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serenity::all::{GuildId, Permissions, Role, RoleId};

use crate::model::{
    button::{ButtonSlot, ButtonSpec},
    mention::ResolvedRole,
};

/// Privileges checked before a post is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    /// Post embeds into the configured channels.
    Post,
    /// Ping `@everyone` alongside a post.
    MentionEveryone,
}

impl Privilege {
    /// Message shown to a requester who lacks this privilege.
    pub fn denial_message(&self) -> &'static str {
        match self {
            Self::Post => "You don't have permission to post here.",
            Self::MentionEveryone => "You don't have permission to use @everyone mentions.",
        }
    }
}

/// Fixed destinations of the `/post` sub-commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostTarget {
    Announcement,
    Update,
}

impl fmt::Display for PostTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Announcement => f.write_str("Announcement"),
            Self::Update => f.write_str("Update"),
        }
    }
}

/// The invoking member, reduced to what authorization needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requester {
    pub is_administrator: bool,
    pub role_names: BTreeSet<String>,
}

impl Requester {
    /// Builds a requester from an interaction member.
    ///
    /// `permissions` are the member's resolved channel permissions as sent with the
    /// interaction. Role ids that are not present in `guild_roles` are ignored.
    ///
    /// # Arguments
    /// - `permissions` - Resolved permissions of the member, if Discord sent them
    /// - `member_roles` - Role ids held by the member
    /// - `guild_roles` - All roles of the guild, used to look up role names
    pub fn from_member(
        permissions: Option<Permissions>,
        member_roles: &[RoleId],
        guild_roles: &HashMap<RoleId, Role>,
    ) -> Self {
        let is_administrator = permissions.is_some_and(|p| p.administrator());
        let role_names = member_roles
            .iter()
            .filter_map(|id| guild_roles.get(id))
            .map(|role| role.name.clone())
            .collect();

        Self {
            is_administrator,
            role_names,
        }
    }

    /// Returns true if the requester holds any role named in `allowed`.
    pub fn has_any_role(&self, allowed: &[String]) -> bool {
        allowed.iter().any(|name| self.role_names.contains(name))
    }
}

/// Raw `/post announce` and `/post update` arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub body: String,
    pub footer: Option<String>,
    pub mention_everyone: bool,
    pub mention_roles: Option<String>,
    pub buttons: [ButtonSlot; 3],
}

/// Everything the composer needs to decide on one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    /// Guild the command was used in; its default role is never mentioned.
    pub guild_id: GuildId,
    pub requester: Requester,
    pub target: PostTarget,
    /// Whether the target channel exists and can receive text messages.
    pub channel_available: bool,
    pub input: PostInput,
}

/// A fully-formed outbound message.
///
/// `mention_everyone` and `mention_roles` are exactly what the composer approved and
/// are the only pings the transport is allowed to deliver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedMessage {
    pub title: String,
    pub body: String,
    pub footer: Option<String>,
    pub mention_text: String,
    pub mention_everyone: bool,
    pub mention_roles: Vec<ResolvedRole>,
    pub buttons: Vec<ButtonSpec>,
}

impl ComposedMessage {
    /// Human-readable list of what was pinged, e.g. `@everyone, Support`.
    ///
    /// Returns `None` when nothing was mentioned.
    pub fn mention_summary(&self) -> Option<String> {
        let mut names = Vec::new();
        if self.mention_everyone {
            names.push("@everyone".to_string());
        }
        names.extend(self.mention_roles.iter().map(|role| role.name.clone()));

        if names.is_empty() {
            None
        } else {
            Some(names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_role_map;

    #[test]
    fn requester_from_member_resolves_role_names() {
        let roles = create_test_role_map(&[(1, "Owner"), (2, "Support"), (3, "Member")]);

        let requester = Requester::from_member(
            Some(Permissions::SEND_MESSAGES),
            &[RoleId::new(2), RoleId::new(3), RoleId::new(99)],
            &roles,
        );

        assert!(!requester.is_administrator);
        assert_eq!(
            requester.role_names.iter().collect::<Vec<_>>(),
            vec!["Member", "Support"]
        );
    }

    #[test]
    fn requester_from_member_reads_administrator_flag() {
        let roles = create_test_role_map(&[]);

        let requester =
            Requester::from_member(Some(Permissions::ADMINISTRATOR), &[], &roles);
        assert!(requester.is_administrator);

        let requester = Requester::from_member(None, &[], &roles);
        assert!(!requester.is_administrator);
    }

    #[test]
    fn mention_summary_lists_everyone_then_roles() {
        let message = ComposedMessage {
            mention_everyone: true,
            mention_roles: vec![ResolvedRole {
                id: RoleId::new(5),
                name: "Support".to_string(),
            }],
            ..Default::default()
        };

        assert_eq!(message.mention_summary().as_deref(), Some("@everyone, Support"));
        assert_eq!(ComposedMessage::default().mention_summary(), None);
    }
}
