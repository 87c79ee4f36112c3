//! `liftdesk import` -- load opportunities from a JSONL file.

use anyhow::{Context, Result, bail};
use std::io::BufReader;

use liftdesk_core::jsonl;
use liftdesk_core::opportunity::Opportunity;
use liftdesk_core::repo::OpportunityStore;
use liftdesk_core::validation;

use crate::cli::ImportArgs;
use crate::context::RuntimeContext;

/// Execute the `liftdesk import` command.
///
/// Records are upserted by id; existing opportunities with matching ids
/// are replaced. The whole file is validated before anything is written.
pub fn run(ctx: &RuntimeContext, args: &ImportArgs) -> Result<()> {
    let file = std::fs::File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input))?;
    let reader = BufReader::new(file);

    let records: Vec<Opportunity> = jsonl::read_jsonl(reader)
        .collect::<jsonl::Result<Vec<_>>>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    for record in &records {
        if record.id.is_empty() {
            bail!("import rejected: record '{}' has no id", record.title);
        }
        validation::validate(record)
            .map_err(|e| anyhow::anyhow!("import rejected for '{}': {e}", record.id))?;
    }

    let workspace = ctx.workspace()?;
    let store = workspace.opportunities()?;
    for record in &records {
        store
            .upsert(record)
            .with_context(|| format!("failed to import {}", record.id))?;
    }

    if !ctx.quiet {
        println!("Imported {} opportunities from {}", records.len(), args.input);
    }
    Ok(())
}
