//! Profile domain types.
//!
//! Profiles are read-only join targets for the snippet API.

use serde::{Deserialize, Serialize};

use super::snippet::UserId;

/// A user's public profile, keyed by the owner reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

/// The subset of a profile surfaced on each snippet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<Profile> for ProfileSummary {
    fn from(profile: Profile) -> Self {
        Self {
            username: profile.username,
            avatar_url: profile.avatar_url,
        }
    }
}
