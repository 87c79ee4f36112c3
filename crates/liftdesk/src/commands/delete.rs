//! `liftdesk delete` -- explicit destructive removal of an opportunity.

use anyhow::{Result, bail};

use liftdesk_core::repo::OpportunityStore;

use crate::cli::DeleteArgs;
use crate::context::RuntimeContext;

/// Execute the `liftdesk delete` command.
///
/// Opportunities are never silently removed: without `--yes` the command
/// refuses and nothing changes.
pub fn run(ctx: &RuntimeContext, args: &DeleteArgs) -> Result<()> {
    let workspace = ctx.workspace()?;
    let store = workspace.opportunities()?;

    // Look the record up first so the refusal message can name it.
    let opportunity = store.get(&args.id).map_err(|e| anyhow::anyhow!("{e}"))?;

    if !args.yes {
        bail!(
            "refusing to delete '{}' ({}): pass --yes to confirm",
            opportunity.title,
            args.id
        );
    }

    store.remove(&args.id).map_err(|e| anyhow::anyhow!("{e}"))?;

    if !ctx.quiet {
        println!("Deleted opportunity: {}", args.id);
    }
    Ok(())
}
