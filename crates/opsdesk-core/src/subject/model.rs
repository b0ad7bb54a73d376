//! Subject domain model.

use crate::error::OpsdeskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of entity a conversation is attached to.
///
/// This is a closed set: every kind resolves to its own API endpoint family,
/// so adding a variant forces every dispatch site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A support/service request raised by a client.
    Request,
    /// A delivery project.
    Project,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Request => "request",
            EntityKind::Project => "project",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = OpsdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "request" | "requests" => Ok(EntityKind::Request),
            "project" | "projects" => Ok(EntityKind::Project),
            other => Err(OpsdeskError::InvalidSubject(format!(
                "unknown entity kind '{}'",
                other
            ))),
        }
    }
}

/// Identifies which entity's conversational history is being viewed.
///
/// Subjects are immutable values: navigating to another entity replaces the
/// subject wholesale. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    /// Remote identifier of the entity.
    pub entity_id: String,
    /// Which endpoint family the entity belongs to.
    pub entity_kind: EntityKind,
}

impl Subject {
    pub fn new(entity_id: impl Into<String>, entity_kind: EntityKind) -> Self {
        Self {
            entity_id: entity_id.into(),
            entity_kind,
        }
    }

    /// Shorthand for a `Request` subject.
    pub fn request(entity_id: impl Into<String>) -> Self {
        Self::new(entity_id, EntityKind::Request)
    }

    /// Shorthand for a `Project` subject.
    pub fn project(entity_id: impl Into<String>) -> Self {
        Self::new(entity_id, EntityKind::Project)
    }

    /// Returns true when the subject can be used to address the remote API.
    ///
    /// A blank entity id is treated the same as no subject at all.
    pub fn is_defined(&self) -> bool {
        !self.entity_id.trim().is_empty()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_kind, self.entity_id)
    }
}
