//! Definition and argument parsing of the `/post` command group.

use std::collections::HashMap;

use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, Permissions, ResolvedOption,
    ResolvedValue,
};

use crate::model::{
    button::ButtonSlot,
    post::{PostInput, PostTarget},
};

pub const POST_COMMAND: &str = "post";

/// Sub-commands of `/post`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSubCommand {
    Announce,
    Update,
    Info,
}

impl PostSubCommand {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "announce" => Some(Self::Announce),
            "update" => Some(Self::Update),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Configured channel the sub-command posts to, if it has a fixed one.
    pub fn target(&self) -> Option<PostTarget> {
        match self {
            Self::Announce => Some(PostTarget::Announcement),
            Self::Update => Some(PostTarget::Update),
            Self::Info => None,
        }
    }
}

/// Builds the global `/post` command with its sub-commands.
///
/// Hidden from non-administrators by default; server owners can grant it to other
/// roles through the integration settings.
pub fn post_command() -> CreateCommand {
    CreateCommand::new(POST_COMMAND)
        .description("Post announcements and updates")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(post_sub_command(
            "announce",
            "Post to the announcement channel",
            "Headline of the post",
        ))
        .add_option(post_sub_command(
            "update",
            "Post to the update channel",
            "Headline of the update",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "info",
                "Post the setup guide to the current channel",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "key",
                    "The access key to display",
                )
                .required(true),
            ),
        )
}

fn post_sub_command(name: &str, description: &str, title_description: &str) -> CreateCommandOption {
    let mut sub = CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
        .add_sub_option(
            CreateCommandOption::new(CommandOptionType::String, "title", title_description)
                .required(true),
        )
        .add_sub_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "body",
                "Main content (supports Markdown, type \\n for a new line)",
            )
            .required(true),
        )
        .add_sub_option(string_option("footer", "Optional small footer"))
        .add_sub_option(CreateCommandOption::new(
            CommandOptionType::Boolean,
            "mention_everyone",
            "Mention @everyone (Admin only)",
        ))
        .add_sub_option(string_option(
            "mention_roles",
            "Comma-separated role names/IDs to mention",
        ));

    for (slot, ordinal) in [(1, "first"), (2, "second"), (3, "third")] {
        sub = sub
            .add_sub_option(string_option(
                &format!("button{slot}_label"),
                &format!("Label for {ordinal} button"),
            ))
            .add_sub_option(string_option(
                &format!("button{slot}_url"),
                &format!("URL for {ordinal} button"),
            ))
            .add_sub_option(string_option(
                &format!("button{slot}_emoji"),
                &format!("Emoji for {ordinal} button (optional)"),
            ))
            .add_sub_option(string_option(
                &format!("button{slot}_style"),
                &format!("Style for {ordinal} button (primary/secondary/success/danger)"),
            ));
    }

    sub
}

fn string_option(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description)
}

/// Flattened string and boolean arguments of one sub-command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    strings: HashMap<String, String>,
    booleans: HashMap<String, bool>,
}

impl CommandArgs {
    /// Collects the string and boolean options; other option kinds are ignored.
    pub fn from_options(options: &[ResolvedOption<'_>]) -> Self {
        let mut args = Self::default();

        for option in options {
            match option.value {
                ResolvedValue::String(value) => args.insert_string(option.name, value),
                ResolvedValue::Boolean(value) => args.insert_bool(option.name, value),
                _ => tracing::debug!("Ignoring unsupported option '{}'", option.name),
            }
        }

        args
    }

    pub fn insert_string(&mut self, name: &str, value: &str) {
        self.strings.insert(name.to_string(), value.to_string());
    }

    pub fn insert_bool(&mut self, name: &str, value: bool) {
        self.booleans.insert(name.to_string(), value);
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.strings.get(name).map(String::as_str)
    }

    pub fn boolean(&self, name: &str) -> bool {
        self.booleans.get(name).copied().unwrap_or(false)
    }

    /// Arguments of `/post announce` and `/post update`.
    pub fn post_input(&self) -> PostInput {
        let owned = |name: &str| self.string(name).map(str::to_string);
        let slot = |index: usize| ButtonSlot {
            label: owned(&format!("button{index}_label")),
            url: owned(&format!("button{index}_url")),
            emoji: owned(&format!("button{index}_emoji")),
            style: owned(&format!("button{index}_style")),
        };

        PostInput {
            title: owned("title").unwrap_or_default(),
            body: owned("body").unwrap_or_default(),
            footer: owned("footer"),
            mention_everyone: self.boolean("mention_everyone"),
            mention_roles: owned("mention_roles"),
            buttons: [slot(1), slot(2), slot(3)],
        }
    }
}

/// Extracts the sub-command and its arguments from `/post` options.
///
/// Returns `None` when the invocation carries no known sub-command.
pub fn parse_post_command(options: &[ResolvedOption<'_>]) -> Option<(PostSubCommand, CommandArgs)> {
    options.iter().find_map(|option| match &option.value {
        ResolvedValue::SubCommand(sub_options) => PostSubCommand::from_name(option.name)
            .map(|sub| (sub, CommandArgs::from_options(sub_options))),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_command_names_and_targets() {
        assert_eq!(
            PostSubCommand::from_name("announce").and_then(|s| s.target()),
            Some(PostTarget::Announcement)
        );
        assert_eq!(
            PostSubCommand::from_name("update").and_then(|s| s.target()),
            Some(PostTarget::Update)
        );
        assert_eq!(PostSubCommand::from_name("info").and_then(|s| s.target()), None);
        assert_eq!(PostSubCommand::from_name("delete"), None);
    }

    /// Tests mapping named arguments onto the positional button slots.
    ///
    /// Expected: slot 2 only carries its URL, slot 3 is empty
    #[test]
    fn post_input_maps_button_slots() {
        let mut args = CommandArgs::default();
        args.insert_string("title", "Sale");
        args.insert_string("body", "Everything 10% off");
        args.insert_bool("mention_everyone", true);
        args.insert_string("mention_roles", "Customers");
        args.insert_string("button1_label", "Shop");
        args.insert_string("button1_url", "https://example.com");
        args.insert_string("button1_style", "danger");
        args.insert_string("button2_url", "https://example.com/orphan");

        let input = args.post_input();

        assert_eq!(input.title, "Sale");
        assert_eq!(input.body, "Everything 10% off");
        assert_eq!(input.footer, None);
        assert!(input.mention_everyone);
        assert_eq!(input.mention_roles.as_deref(), Some("Customers"));
        assert_eq!(input.buttons[0].label.as_deref(), Some("Shop"));
        assert_eq!(input.buttons[0].style.as_deref(), Some("danger"));
        assert_eq!(input.buttons[1].label, None);
        assert_eq!(
            input.buttons[1].url.as_deref(),
            Some("https://example.com/orphan")
        );
        assert_eq!(input.buttons[2], ButtonSlot::default());
    }

    #[test]
    fn missing_boolean_is_false() {
        assert!(!CommandArgs::default().boolean("mention_everyone"));
    }

    /// Tests the registered command shape.
    ///
    /// Expected: three sub-commands, the post ones with 17 options and required
    /// options first
    #[test]
    fn post_command_definition() {
        let command = serde_json::to_value(post_command()).unwrap();

        assert_eq!(command["name"], "post");
        let subs = command["options"].as_array().unwrap();
        let names: Vec<_> = subs.iter().map(|s| s["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["announce", "update", "info"]);

        let announce = subs[0]["options"].as_array().unwrap();
        assert_eq!(announce.len(), 17);
        assert_eq!(announce[0]["name"], "title");
        assert_eq!(announce[0]["required"], true);
        assert_eq!(announce[1]["name"], "body");
        assert_eq!(announce[16]["name"], "button3_style");
        for option in announce {
            assert!(option["description"].as_str().unwrap().chars().count() <= 100);
        }
    }
}
