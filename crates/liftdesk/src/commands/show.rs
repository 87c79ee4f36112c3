//! `liftdesk show` -- opportunity detail view.

use anyhow::Result;

use liftdesk_core::repo::OpportunityStore;

use crate::cli::ShowArgs;
use crate::context::RuntimeContext;
use crate::output::{OpportunityView, output_json, print_opportunity_detail};

/// Execute the `liftdesk show` command.
pub fn run(ctx: &RuntimeContext, args: &ShowArgs) -> Result<()> {
    let workspace = ctx.workspace()?;
    let store = workspace.opportunities()?;

    let opportunity = store
        .get(&args.id)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    if ctx.json {
        output_json(&OpportunityView::from_opportunity(&opportunity));
    } else {
        print_opportunity_detail(&opportunity);
    }
    Ok(())
}
