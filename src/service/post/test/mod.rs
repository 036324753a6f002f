use std::collections::HashMap;

use serenity::all::{GuildId, Role, RoleId};
use test_utils::serenity::create_test_role_map;

use super::*;
use crate::model::{
    button::{ButtonSlot, ButtonStyleKind},
    post::{PostInput, PostTarget, Requester},
};

mod authorize;

const GUILD_ID: u64 = 900;

/// Guild roles used across the composer tests.
fn guild_roles() -> HashMap<RoleId, Role> {
    create_test_role_map(&[
        (GUILD_ID, "@everyone"),
        (100, "Owner"),
        (200, "Admin"),
        (300, "Support"),
        (400, "Member"),
        (123456789012345678, "Customers"),
    ])
}

fn requester(is_administrator: bool, roles: &[&str]) -> Requester {
    Requester {
        is_administrator,
        role_names: roles.iter().map(|r| r.to_string()).collect(),
    }
}

/// A valid announcement request from an Owner, with no mentions or buttons.
fn request() -> PostRequest {
    PostRequest {
        guild_id: GuildId::new(GUILD_ID),
        requester: requester(false, &["Owner"]),
        target: PostTarget::Announcement,
        channel_available: true,
        input: PostInput {
            title: "Title".to_string(),
            body: "Body".to_string(),
            ..Default::default()
        },
    }
}

fn compose_default(request: &PostRequest) -> Result<ComposedMessage, PostError> {
    compose(request, &AccessGuard::default(), &guild_roles())
}
