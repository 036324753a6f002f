//! Test factory for creating Serenity Role objects.

use std::collections::HashMap;

use serenity::all::{Role, RoleId};

/// Creates a test Serenity Role at position 1.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Support");
/// assert_eq!(role.name, "Support");
/// ```
pub fn create_test_role(role_id: u64, name: &str) -> Role {
    create_test_role_with_position(role_id, name, 1)
}

/// Creates a test Serenity Role at the given hierarchy position.
///
/// Useful when a test needs several roles sharing a name and has to control which
/// one sorts first.
pub fn create_test_role_with_position(role_id: u64, name: &str, position: u16) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": { "primary_color": 0 },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}

/// Creates a guild role set from `(id, name)` pairs.
///
/// The returned map has the same shape as `GuildId::roles`, so it can stand in for
/// a guild's roles wherever the bot resolves names or mentions.
pub fn create_test_role_map(roles: &[(u64, &str)]) -> HashMap<RoleId, Role> {
    roles
        .iter()
        .map(|(id, name)| (RoleId::new(*id), create_test_role(*id, name)))
        .collect()
}
