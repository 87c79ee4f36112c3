//! Enum types for the liftdesk domain.
//!
//! [`Stage`] is a closed six-value enumeration: the pipeline board is a
//! fixed partition, so unknown stage strings are a parse error at the
//! boundary rather than a catch-all variant. Lead classification enums
//! carry an `Other(String)` fallback instead, since lead sources arrive
//! from free-form capture channels.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ===========================================================================
// Stage
// ===========================================================================

/// Pipeline stage of a sales opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    #[default]
    Lead,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

/// Raised when a stage string does not name one of the six pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stage: {0} (expected lead, qualified, proposal, negotiation, won or lost)")]
pub struct ParseStageError(pub String);

impl Stage {
    /// The six stages in board order.
    pub const ALL: [Stage; 6] = [
        Stage::Lead,
        Stage::Qualified,
        Stage::Proposal,
        Stage::Negotiation,
        Stage::Won,
        Stage::Lost,
    ];

    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Qualified => "qualified",
            Self::Proposal => "proposal",
            Self::Negotiation => "negotiation",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Column heading used by board renderers.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Qualified => "Qualified",
            Self::Proposal => "Proposal",
            Self::Negotiation => "Negotiation",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    /// `won` and `lost` are terminal: no transition leads out of them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Advisory win probability assigned when an opportunity first enters
    /// a stage at creation time. Never enforced on later edits.
    pub fn default_probability(&self) -> u8 {
        match self {
            Self::Lead => 25,
            Self::Qualified => 50,
            Self::Proposal => 75,
            Self::Negotiation => 90,
            Self::Won => 100,
            Self::Lost => 0,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lead" => Ok(Self::Lead),
            "qualified" => Ok(Self::Qualified),
            "proposal" => Ok(Self::Proposal),
            "negotiation" => Ok(Self::Negotiation),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            other => Err(ParseStageError(other.to_owned())),
        }
    }
}

impl Serialize for Stage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Stage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ===========================================================================
// LeadSource
// ===========================================================================

/// Capture channel of a lead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LeadSource {
    WalkIn,
    Website,
    Reference,
    PhoneCall,
    Email,
    SocialMedia,
    /// Catch-all for channels not in the standard list.
    Other(String),
}

impl LeadSource {
    /// Returns the string representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::WalkIn => "walk-in",
            Self::Website => "website",
            Self::Reference => "reference",
            Self::PhoneCall => "phone-call",
            Self::Email => "email",
            Self::SocialMedia => "social-media",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl Default for LeadSource {
    fn default() -> Self {
        Self::Website
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LeadSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LeadSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

impl From<&str> for LeadSource {
    fn from(s: &str) -> Self {
        match s {
            "walk-in" => Self::WalkIn,
            "website" => Self::Website,
            "reference" => Self::Reference,
            "phone-call" => Self::PhoneCall,
            "email" => Self::Email,
            "social-media" => Self::SocialMedia,
            other => Self::Other(other.to_owned()),
        }
    }
}

// ===========================================================================
// LeadStatus
// ===========================================================================

/// Working state of a captured lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeadStatus {
    #[default]
    New,
    Qualified,
    Quoted,
    Won,
    Lost,
}

impl LeadStatus {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Qualified => "qualified",
            Self::Quoted => "quoted",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "qualified" => Ok(Self::Qualified),
            "quoted" => Ok(Self::Quoted),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            other => Err(format!("unknown lead status: {other}")),
        }
    }
}

impl Serialize for LeadStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LeadStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ===========================================================================
// ProjectStatus
// ===========================================================================

/// Execution state of a converted project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(Self::Planning),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "on_hold" => Ok(Self::OnHold),
            other => Err(format!("unknown project status: {other}")),
        }
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
