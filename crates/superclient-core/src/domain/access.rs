//! Access Management Entities
//!
//! Roles, feature modules and pending invites for the workspace.

use serde::{Deserialize, Serialize};

use super::entity::deserialize_id;

/// Invite status the backend uses for invites still awaiting an answer
pub const PENDING_INVITE_STATUS: &str = "Pendente";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invite {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub status: String,
}

impl Invite {
    pub fn is_pending(&self) -> bool {
        self.status == PENDING_INVITE_STATUS
    }
}

/// Counters shown on the access dashboard card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessSummary {
    pub roles_count: usize,
    pub members_count: u64,
    pub enabled_modules: usize,
    pub pending_invites: usize,
}

pub fn summarize_access(roles: &[Role], modules: &[Module], invites: &[Invite]) -> AccessSummary {
    AccessSummary {
        roles_count: roles.len(),
        members_count: roles.iter().map(|r| u64::from(r.members)).sum(),
        enabled_modules: modules.iter().filter(|m| m.enabled).count(),
        pending_invites: invites.iter().filter(|i| i.is_pending()).count(),
    }
}
