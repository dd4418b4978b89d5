//! Wire identifiers, roles and work-wire cleanliness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a wire supplied by the caller.
///
/// The synthesizer never creates or destroys wires; it only refers to
/// them by identity for the duration of a single synthesis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WireId(pub u32);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl From<u32> for WireId {
    fn from(id: u32) -> Self {
        WireId(id)
    }
}

/// Initial-state guarantee for a work wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cleanliness {
    /// Starts in the fixed reference state (logical 0).
    #[default]
    Clean,
    /// Starts in an arbitrary state that must be restored bit-for-bit.
    Dirty,
}

impl Cleanliness {
    /// Get the lowercase name of this cleanliness mode.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Cleanliness::Clean => "clean",
            Cleanliness::Dirty => "dirty",
        }
    }

    /// Check if this is the dirty mode.
    #[inline]
    pub fn is_dirty(self) -> bool {
        matches!(self, Cleanliness::Dirty)
    }
}

impl fmt::Display for Cleanliness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Cleanliness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clean" => Ok(Cleanliness::Clean),
            "dirty" => Ok(Cleanliness::Dirty),
            other => Err(format!("unknown cleanliness '{other}'")),
        }
    }
}

/// The role a wire plays in a multi-controlled X operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireRole {
    /// One of the AND-ed control inputs.
    Control,
    /// The wire flipped when every control is 1.
    Target,
    /// A borrowed auxiliary wire.
    Work(Cleanliness),
}

impl fmt::Display for WireRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireRole::Control => f.write_str("control"),
            WireRole::Target => f.write_str("target"),
            WireRole::Work(c) => write!(f, "{c} work"),
        }
    }
}

/// A wire together with its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wire {
    /// The unique identifier.
    pub id: WireId,
    /// The role within the current synthesis call.
    pub role: WireRole,
}

impl Wire {
    /// Create a control wire.
    pub fn control(id: impl Into<WireId>) -> Self {
        Self {
            id: id.into(),
            role: WireRole::Control,
        }
    }

    /// Create a target wire.
    pub fn target(id: impl Into<WireId>) -> Self {
        Self {
            id: id.into(),
            role: WireRole::Target,
        }
    }

    /// Create a work wire with the given cleanliness.
    pub fn work(id: impl Into<WireId>, cleanliness: Cleanliness) -> Self {
        Self {
            id: id.into(),
            role: WireRole::Work(cleanliness),
        }
    }
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.role)
    }
}
