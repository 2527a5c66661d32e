//! Access-controlled resource kinds.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Entities whose fields are subject to field-level access control.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Client,
    Employee,
    Interview,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Client, Self::Employee, Self::Interview];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Employee => "employee",
            Self::Interview => "interview",
        }
    }
}

impl core::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = DomainError;

    /// Accepts the singular or plural name, ignoring ASCII case
    /// (`"Client"`, `"clients"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == singular)
            .ok_or_else(|| DomainError::unknown("resource", s))
    }
}
