use serenity::all::ChannelId;

use crate::{
    error::{config::ConfigError, AppError},
    model::post::PostTarget,
    service::button::is_link_url,
};

const DEFAULT_COMMAND_PREFIX: &str = "!!";
const DEFAULT_BRAND_NAME: &str = "Omegaberg | Official Shop";
const DEFAULT_POST_ROLES: &[&str] = &["Owner", "Admin", "Support"];
const DEFAULT_EVERYONE_ROLES: &[&str] = &["Owner", "Admin"];

/// Read-only bot configuration, built once at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub discord_token: String,

    pub announcement_channel_id: u64,
    pub update_channel_id: u64,

    pub command_prefix: String,
    pub brand_name: String,

    /// Role names allowed to post (administrators always may).
    pub post_roles: Vec<String>,
    /// Role names allowed to ping `@everyone` (administrators always may).
    pub everyone_roles: Vec<String>,

    /// Download link attached to the `/post info` setup guide.
    pub info_download_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated the same as unset ones.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a channel ID
    ///   is not a valid snowflake
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            announcement_channel_id: parse_channel_id(
                "ANNOUNCEMENT_CHANNEL_ID",
                required("ANNOUNCEMENT_CHANNEL_ID")?,
            )?,
            update_channel_id: parse_channel_id(
                "UPDATE_CHANNEL_ID",
                required("UPDATE_CHANNEL_ID")?,
            )?,
            command_prefix: var("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            brand_name: var("BRAND_NAME").unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string()),
            post_roles: var("POST_ROLES")
                .map(|value| split_list(&value))
                .unwrap_or_else(|| to_owned_list(DEFAULT_POST_ROLES)),
            everyone_roles: var("EVERYONE_ROLES")
                .map(|value| split_list(&value))
                .unwrap_or_else(|| to_owned_list(DEFAULT_EVERYONE_ROLES)),
            info_download_url: var("INFO_DOWNLOAD_URL")
                .map(|url| parse_link_url("INFO_DOWNLOAD_URL", url))
                .transpose()?,
        })
    }

    /// Channel that a `/post` sub-command writes to.
    pub fn channel_id(&self, target: PostTarget) -> ChannelId {
        match target {
            PostTarget::Announcement => ChannelId::new(self.announcement_channel_id),
            PostTarget::Update => ChannelId::new(self.update_channel_id),
        }
    }
}

/// Parses a channel snowflake, rejecting zero which Discord never issues.
fn parse_channel_id(name: &str, value: String) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

/// Checks a URL used on a link button, so a bad value fails at startup.
fn parse_link_url(name: &str, value: String) -> Result<String, ConfigError> {
    if is_link_url(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("DISCORD_TOKEN", "token"),
        ("ANNOUNCEMENT_CHANNEL_ID", "1389417490651807869"),
        ("UPDATE_CHANNEL_ID", "1420408382845751306"),
    ];

    /// Tests loading a configuration with only the required variables.
    ///
    /// Expected: Ok with defaults for every optional setting
    #[test]
    fn loads_required_variables_with_defaults() {
        let config = Config::from_lookup(lookup_from(REQUIRED)).unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.announcement_channel_id, 1389417490651807869);
        assert_eq!(config.update_channel_id, 1420408382845751306);
        assert_eq!(config.command_prefix, "!!");
        assert_eq!(config.brand_name, "Omegaberg | Official Shop");
        assert_eq!(config.post_roles, vec!["Owner", "Admin", "Support"]);
        assert_eq!(config.everyone_roles, vec!["Owner", "Admin"]);
        assert_eq!(config.info_download_url, None);
        assert_eq!(
            config.channel_id(PostTarget::Update),
            ChannelId::new(1420408382845751306)
        );
    }

    /// Tests that a missing token is reported by name.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar("DISCORD_TOKEN"))
    #[test]
    fn missing_token_is_fatal() {
        let result = Config::from_lookup(lookup_from(&REQUIRED[1..]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_TOKEN"
        ));
    }

    /// Tests that a blank token counts as missing.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar("DISCORD_TOKEN"))
    #[test]
    fn blank_token_is_missing() {
        let mut vars = REQUIRED.to_vec();
        vars[0] = ("DISCORD_TOKEN", "   ");

        let result = Config::from_lookup(lookup_from(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_TOKEN"
        ));
    }

    /// Tests that a non-numeric channel id is rejected.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar) naming the variable and value
    #[test]
    fn invalid_channel_id_is_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars[1] = ("ANNOUNCEMENT_CHANNEL_ID", "announcements");

        let result = Config::from_lookup(lookup_from(&vars));

        match result {
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name, value })) => {
                assert_eq!(name, "ANNOUNCEMENT_CHANNEL_ID");
                assert_eq!(value, "announcements");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    /// Tests that a download URL Discord would refuse is rejected at startup.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar) naming INFO_DOWNLOAD_URL
    #[test]
    fn invalid_download_url_is_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("INFO_DOWNLOAD_URL", "example.com/loader"));

        let result = Config::from_lookup(lookup_from(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "INFO_DOWNLOAD_URL"
        ));
    }

    /// Tests overriding the optional settings.
    ///
    /// Expected: Ok with role lists split on commas and trimmed
    #[test]
    fn optional_overrides_are_applied() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("COMMAND_PREFIX", "?"),
            ("BRAND_NAME", "Test Shop"),
            ("POST_ROLES", "Staff, Moderator ,"),
            ("EVERYONE_ROLES", "Staff"),
            ("INFO_DOWNLOAD_URL", "https://example.com/loader"),
        ]);

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.command_prefix, "?");
        assert_eq!(config.brand_name, "Test Shop");
        assert_eq!(config.post_roles, vec!["Staff", "Moderator"]);
        assert_eq!(config.everyone_roles, vec!["Staff"]);
        assert_eq!(
            config.info_download_url.as_deref(),
            Some("https://example.com/loader")
        );
    }
}
