//! `liftdesk export` -- write opportunities as JSONL.

use anyhow::{Context, Result};
use std::io::Write;

use liftdesk_core::jsonl;
use liftdesk_core::repo::OpportunityStore;

use crate::cli::ExportArgs;
use crate::context::RuntimeContext;

/// Execute the `liftdesk export` command.
pub fn run(ctx: &RuntimeContext, args: &ExportArgs) -> Result<()> {
    let workspace = ctx.workspace()?;
    let opportunities = workspace.opportunities()?.list()?;

    match args.output {
        Some(ref path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create {path}"))?;
            let mut writer = std::io::BufWriter::new(file);
            jsonl::write_jsonl(&mut writer, &opportunities)
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            if !ctx.quiet {
                println!("Exported {} opportunities to {path}", opportunities.len());
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            jsonl::write_jsonl(&mut lock, &opportunities)
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            lock.flush()?;
        }
    }
    Ok(())
}
