//! Mention request and resolution models.

use serenity::all::RoleId;

/// What the requester asked to ping, before resolution against the guild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionRequest {
    pub everyone: bool,
    /// Role names or numeric ids, in input order.
    pub role_refs: Vec<String>,
}

impl MentionRequest {
    /// Builds a request from the `mention_everyone` flag and the comma-separated
    /// `mention_roles` input.
    ///
    /// Parts are trimmed and empty parts are dropped.
    pub fn parse(everyone: bool, role_input: Option<&str>) -> Self {
        let role_refs = role_input
            .map(|input| {
                input
                    .split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            everyone,
            role_refs,
        }
    }
}

/// A guild role that a mention reference resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRole {
    pub id: RoleId,
    pub name: String,
}

impl ResolvedRole {
    /// Discord mention markup for the role.
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.id)
    }
}
