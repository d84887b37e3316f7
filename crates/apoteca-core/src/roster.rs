//! The team-member roster used for notifications.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::item::ItemId;

/// A colleague who can receive note notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: ItemId,
    pub name: String,
    pub email: String,
    /// e.g. "Apotheker" or "Apothekersassistent"
    pub role: String,
}

/// Owns the team members.
pub struct Roster {
    members: Vec<TeamMember>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    pub fn from_members(members: Vec<TeamMember>) -> Self {
        Self { members }
    }

    pub fn all(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn get(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Register a member. Name and email are required.
    pub fn add(&mut self, name: &str, email: &str, role: &str) -> Result<&TeamMember> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(CoreError::IncompleteMember);
        }
        let member = TeamMember {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            role: role.trim().to_string(),
        };
        self.members.push(member);
        Ok(&self.members[self.members.len() - 1])
    }

    /// Full replace by id. An unknown id is silently ignored.
    pub fn update(&mut self, member: TeamMember) -> bool {
        match self.members.iter_mut().find(|m| m.id == member.id) {
            Some(slot) => {
                *slot = member;
                true
            }
            None => {
                debug!(member = %member.id, "update ignored, member not found");
                false
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        self.members.len() < before
    }

    /// Case-insensitive filter on name and email.
    pub fn filter(&self, term: &str) -> Vec<&TeamMember> {
        let needle = term.to_lowercase();
        self.members
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&needle)
                    || m.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Members with a plausible email address, the set a notification
    /// actually goes out to.
    pub fn notification_recipients(&self) -> Vec<&TeamMember> {
        self.members
            .iter()
            .filter(|m| m.email.contains('@'))
            .collect()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
