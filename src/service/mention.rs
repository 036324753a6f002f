//! Resolution of mention requests against a guild's roles.

use std::collections::HashMap;

use serenity::all::{GuildId, Role, RoleId};

use crate::model::mention::{MentionRequest, ResolvedRole};

/// Resolves role references to guild roles.
///
/// A reference made only of digits is looked up by id first; if that fails, or
/// the reference is not numeric, it is matched against role names exactly. When
/// several roles share a name the lowest one in the hierarchy wins. Unmatched
/// references are dropped and duplicates are kept only once, in input order.
///
/// The guild's default role (named `@everyone`, with the guild's id) never
/// resolves; pinging everyone is only possible through the `everyone` flag.
pub fn resolve_roles(
    request: &MentionRequest,
    guild_id: GuildId,
    guild_roles: &HashMap<RoleId, Role>,
) -> Vec<ResolvedRole> {
    let default_role = RoleId::new(guild_id.get());
    let mut resolved: Vec<ResolvedRole> = Vec::new();

    for reference in &request.role_refs {
        let Some(role) = find_role(reference, default_role, guild_roles) else {
            tracing::debug!("Dropping unresolved role mention '{}'", reference);
            continue;
        };

        if resolved.iter().any(|r| r.id == role.id) {
            continue;
        }

        resolved.push(ResolvedRole {
            id: role.id,
            name: role.name.clone(),
        });
    }

    resolved
}

/// Builds the message content that carries the pings.
///
/// `@everyone` comes first when requested, followed by each role's mention markup,
/// separated by spaces. Empty when nothing is mentioned.
pub fn mention_text(everyone: bool, roles: &[ResolvedRole]) -> String {
    let mut parts = Vec::with_capacity(roles.len() + 1);
    if everyone {
        parts.push("@everyone".to_string());
    }
    parts.extend(roles.iter().map(ResolvedRole::mention));

    parts.join(" ")
}

fn find_role<'a>(
    reference: &str,
    default_role: RoleId,
    guild_roles: &'a HashMap<RoleId, Role>,
) -> Option<&'a Role> {
    let by_id = if reference.bytes().all(|b| b.is_ascii_digit()) {
        reference
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .map(RoleId::new)
            .filter(|id| *id != default_role)
            .and_then(|id| guild_roles.get(&id))
    } else {
        None
    };

    by_id.or_else(|| {
        guild_roles
            .values()
            .filter(|role| role.id != default_role && role.name == reference)
            .min_by_key(|role| (role.position, role.id))
    })
}
