//! `liftdesk list` -- list opportunities.

use anyhow::{Context, Result};

use liftdesk_core::enums::Stage;
use liftdesk_core::repo::OpportunityStore;
use liftdesk_ui::styles;

use crate::cli::ListArgs;
use crate::context::RuntimeContext;
use crate::output::{OpportunityView, output_json};

/// Execute the `liftdesk list` command.
pub fn run(ctx: &RuntimeContext, args: &ListArgs) -> Result<()> {
    let stage_filter: Option<Stage> = args
        .stage
        .as_deref()
        .map(|s| s.parse().with_context(|| format!("invalid stage '{s}'")))
        .transpose()?;

    let workspace = ctx.workspace()?;
    let store = workspace.opportunities()?;

    let mut opportunities = store.list()?;
    if let Some(stage) = stage_filter {
        opportunities.retain(|o| o.stage == stage);
    }
    if let Some(ref owner) = args.owner {
        opportunities.retain(|o| &o.owner == owner);
    }
    if let Some(limit) = args.limit {
        opportunities.truncate(limit);
    }

    if ctx.json {
        let views: Vec<OpportunityView> = opportunities
            .iter()
            .map(OpportunityView::from_opportunity)
            .collect();
        output_json(&views);
        return Ok(());
    }

    if opportunities.is_empty() {
        if !ctx.quiet {
            println!("No opportunities found");
        }
        return Ok(());
    }

    for opportunity in &opportunities {
        println!("{}", styles::render_opportunity_compact(opportunity));
    }
    Ok(())
}
