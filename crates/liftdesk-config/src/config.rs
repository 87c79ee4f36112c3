//! Configuration types and loading for the liftdesk system.
//!
//! The main entry point is [`LiftdeskConfig`], the contents of
//! `.liftdesk/config.yaml`: record-id prefixes, the pricing rate table and
//! the installation team roster. Loaded with [`load_config`] and saved
//! with [`save_config`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use liftdesk_pricing::rates::RateTable;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// The `.liftdesk/` directory was not found.
    #[error("no .liftdesk directory found (run 'liftdesk init' first)")]
    WorkspaceNotFound,

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Team roster
// ---------------------------------------------------------------------------

/// One person on the installation roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,

    #[serde(default)]
    pub role: String,
}

/// The staffing pool the conversion workflow draws from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Candidates for the single team-leader slot.
    #[serde(default = "default_leaders")]
    pub leaders: Vec<TeamMember>,

    /// Candidates for the team-member selection.
    #[serde(default = "default_members")]
    pub members: Vec<TeamMember>,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            leaders: default_leaders(),
            members: default_members(),
        }
    }
}

fn member(name: &str, role: &str) -> TeamMember {
    TeamMember {
        name: name.to_owned(),
        role: role.to_owned(),
    }
}

fn default_leaders() -> Vec<TeamMember> {
    vec![
        member("Suresh Menon", "Senior Engineer"),
        member("Arun Kumar", "Project Manager"),
        member("Deepak Singh", "Installation Head"),
        member("Ravi Krishnan", "Senior Technician"),
    ]
}

fn default_members() -> Vec<TeamMember> {
    vec![
        member("Ravi Krishnan", "Technician"),
        member("Manoj Kumar", "Electrician"),
        member("Vinod Thomas", "Helper"),
        member("Anil Kumar", "Technician"),
        member("Rajesh Nair", "Welder"),
        member("Sunil Varma", "Fitter"),
    ]
}

impl TeamConfig {
    /// Returns `true` if `name` is on the leader roster.
    pub fn is_leader(&self, name: &str) -> bool {
        self.leaders.iter().any(|m| m.name == name)
    }

    /// Returns `true` if `name` is on the member roster.
    pub fn is_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }
}

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The full liftdesk configuration, corresponding to `.liftdesk/config.yaml`.
///
/// All fields use serde defaults so that a partially-specified YAML file
/// deserializes correctly with sensible default values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LiftdeskConfig {
    /// Opportunity record-id prefix (e.g. `"op"`).
    #[serde(default, rename = "id-prefix")]
    pub id_prefix: Option<String>,

    /// Lead record-id prefix (e.g. `"ld"`).
    #[serde(default, rename = "lead-prefix")]
    pub lead_prefix: Option<String>,

    /// Actor identity override for audit fields.
    #[serde(default)]
    pub actor: Option<String>,

    /// Output JSON instead of human-readable text.
    #[serde(default)]
    pub json: bool,

    /// Pricing rate table.
    #[serde(default)]
    pub rates: RateTable,

    /// Installation team roster.
    #[serde(default)]
    pub team: TeamConfig,
}

impl LiftdeskConfig {
    /// The effective opportunity-id prefix.
    pub fn opportunity_prefix(&self) -> &str {
        self.id_prefix.as_deref().unwrap_or("op")
    }

    /// The effective lead-id prefix.
    pub fn lead_id_prefix(&self) -> &str {
        self.lead_prefix.as_deref().unwrap_or("ld")
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from `config.yaml` inside the given `.liftdesk/`
/// directory.
///
/// If the file does not exist, a default [`LiftdeskConfig`] is returned.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be
/// read, or [`ConfigError::ParseError`] if it contains invalid YAML.
pub fn load_config(workspace_dir: &Path) -> Result<LiftdeskConfig> {
    let config_path = workspace_dir.join("config.yaml");

    if !config_path.exists() {
        return Ok(LiftdeskConfig::default());
    }

    let content = std::fs::read_to_string(&config_path)?;

    // An empty file is valid and yields default config.
    if content.trim().is_empty() {
        return Ok(LiftdeskConfig::default());
    }

    let config: LiftdeskConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to `config.yaml` inside the given `.liftdesk/`
/// directory, creating the directory if needed.
pub fn save_config(workspace_dir: &Path, config: &LiftdeskConfig) -> Result<()> {
    std::fs::create_dir_all(workspace_dir)?;

    let config_path = workspace_dir.join("config.yaml");
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(config_path, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
