use crate::{
    config::Config,
    error::post::PostError,
    model::post::{Privilege, Requester},
};

/// Role-name allow-lists for each privilege.
///
/// Administrators pass every check regardless of their roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGuard {
    post_roles: Vec<String>,
    everyone_roles: Vec<String>,
}

impl AccessGuard {
    pub fn new(post_roles: Vec<String>, everyone_roles: Vec<String>) -> Self {
        Self {
            post_roles,
            everyone_roles,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.post_roles.clone(), config.everyone_roles.clone())
    }

    /// Checks every privilege in order.
    ///
    /// # Returns
    /// - `Ok(())` - The requester holds all privileges
    /// - `Err(PostError::Forbidden)` - The first privilege the requester lacks
    pub fn require(
        &self,
        requester: &Requester,
        privileges: &[Privilege],
    ) -> Result<(), PostError> {
        if requester.is_administrator {
            return Ok(());
        }

        for privilege in privileges {
            let allowed = match privilege {
                Privilege::Post => &self.post_roles,
                Privilege::MentionEveryone => &self.everyone_roles,
            };

            if !requester.has_any_role(allowed) {
                return Err(PostError::Forbidden(*privilege));
            }
        }

        Ok(())
    }
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::new(
            vec!["Owner".into(), "Admin".into(), "Support".into()],
            vec!["Owner".into(), "Admin".into()],
        )
    }
}
