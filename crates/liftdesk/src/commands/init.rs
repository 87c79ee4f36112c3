//! `liftdesk init` -- create a workspace in the current directory.

use anyhow::{Context, Result, bail};

use liftdesk_config::config::{self, LiftdeskConfig};
use liftdesk_config::workspace_dir;

use crate::cli::InitArgs;
use crate::context::RuntimeContext;

/// Execute the `liftdesk init` command.
pub fn run(ctx: &RuntimeContext, args: &InitArgs) -> Result<()> {
    let base = match ctx.dir {
        Some(ref dir) => dir.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    if crate::context::workspace_exists(&base) {
        bail!(
            "a liftdesk workspace already exists at {}",
            base.join(".liftdesk").display()
        );
    }

    let workspace = workspace_dir::ensure_workspace_dir(&base)
        .with_context(|| format!("failed to create workspace under {}", base.display()))?;

    let mut cfg = LiftdeskConfig::default();
    if args.prefix != "op" {
        cfg.id_prefix = Some(args.prefix.clone());
    }
    config::save_config(&workspace, &cfg)
        .with_context(|| format!("failed to write config to {}", workspace.display()))?;

    // Seed empty record files so the data layout is visible from day one.
    for file in ["opportunities.jsonl", "leads.jsonl", "projects.jsonl"] {
        let path = workspace.join(file);
        if !path.exists() {
            std::fs::write(&path, "")
                .with_context(|| format!("failed to create {}", path.display()))?;
        }
    }

    if !ctx.quiet {
        println!("Initialized liftdesk workspace at {}", workspace.display());
        println!("  Id prefix: {}", cfg.opportunity_prefix());
    }
    Ok(())
}
