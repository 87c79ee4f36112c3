//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds everything a command handler needs:
//! resolved workspace directory, actor name and global flags. The
//! [`Workspace`] wraps an opened workspace with its configuration and
//! record files.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

use liftdesk_config::config::{self, LiftdeskConfig};
use liftdesk_config::workspace_dir;
use liftdesk_core::lead::Lead;
use liftdesk_core::project::ProjectDraft;
use liftdesk_storage::{JsonlStore, RecordFile};

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Explicit workspace directory from `--dir`, if given.
    pub dir: Option<PathBuf>,

    /// Actor name for record attribution.
    pub actor: String,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Resolves the actor name through the priority chain:
    /// `--actor` flag > `LIFTDESK_ACTOR` env > `git config user.name` >
    /// `$USER` > `"unknown"`.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            dir: global.dir.as_ref().map(PathBuf::from),
            actor: resolve_actor(global.actor.as_deref()),
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// Resolves the `.liftdesk/` directory: explicit `--dir` first, then
    /// auto-discovery walking up from the current directory.
    pub fn resolve_workspace_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.dir {
            return Some(dir.clone());
        }
        let cwd = env::current_dir().ok()?;
        workspace_dir::find_workspace_dir(&cwd)
    }

    /// Opens the workspace, loading its configuration.
    pub fn workspace(&self) -> anyhow::Result<Workspace> {
        let dir = self
            .resolve_workspace_dir()
            .context("no liftdesk workspace found. Run 'liftdesk init' to create one.")?;
        let config = config::load_config(&dir)
            .with_context(|| format!("failed to load config from {}", dir.display()))?;
        tracing::debug!(dir = %dir.display(), "opened workspace");
        Ok(Workspace { dir, config })
    }
}

/// An opened `.liftdesk/` workspace.
pub struct Workspace {
    pub dir: PathBuf,
    pub config: LiftdeskConfig,
}

impl Workspace {
    /// Opens the opportunity store (full list loaded up front).
    pub fn opportunities(&self) -> anyhow::Result<JsonlStore> {
        let path = self.dir.join("opportunities.jsonl");
        JsonlStore::open(&path)
            .with_context(|| format!("failed to open opportunity store at {}", path.display()))
    }

    /// The lead record file.
    pub fn leads(&self) -> RecordFile<Lead> {
        RecordFile::new(self.dir.join("leads.jsonl"))
    }

    /// The committed-project record file.
    pub fn projects(&self) -> RecordFile<ProjectDraft> {
        RecordFile::new(self.dir.join("projects.jsonl"))
    }
}

/// Resolves the actor name using the priority chain.
fn resolve_actor(flag_value: Option<&str>) -> String {
    // 1. Explicit flag value
    if let Some(actor) = flag_value {
        if !actor.is_empty() {
            return actor.to_string();
        }
    }

    // 2. LIFTDESK_ACTOR env
    if let Ok(actor) = env::var("LIFTDESK_ACTOR") {
        if !actor.is_empty() {
            return actor;
        }
    }

    // 3. git config user.name
    if let Ok(output) = Command::new("git").args(["config", "user.name"]).output() {
        if output.status.success() {
            let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !name.is_empty() {
                return name;
            }
        }
    }

    // 4. USER env (Unix) or USERNAME env (Windows)
    if let Ok(user) = env::var("USER").or_else(|_| env::var("USERNAME")) {
        if !user.is_empty() {
            return user;
        }
    }

    // 5. Fallback
    "unknown".to_string()
}

/// Returns `true` if a `.liftdesk` directory exists under the given path.
pub fn workspace_exists(base: &Path) -> bool {
    base.join(".liftdesk").is_dir()
}
