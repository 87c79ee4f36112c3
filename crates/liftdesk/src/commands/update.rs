//! `liftdesk update` -- partial field edits on an opportunity.

use anyhow::{Context, Result, bail};

use liftdesk_core::repo::{OpportunityStore, OpportunityUpdates};
use liftdesk_core::validation;

use crate::cli::UpdateArgs;
use crate::commands::create::parse_close_date;
use crate::context::RuntimeContext;
use crate::output::{OpportunityView, output_json};

/// Execute the `liftdesk update` command.
pub fn run(ctx: &RuntimeContext, args: &UpdateArgs) -> Result<()> {
    let expected_close = match args.close.as_deref() {
        None => None,
        Some("none") => Some(None),
        Some(s) => Some(Some(parse_close_date(s)?)),
    };

    let updates = OpportunityUpdates {
        title: args.title.clone(),
        company: args.company.clone(),
        contact_person: args.contact.clone(),
        phone: args.phone.clone(),
        email: args.email.clone(),
        amount: args.amount,
        product_summary: args.product.clone(),
        probability: args.probability,
        expected_close,
        owner: args.owner.clone(),
        notes: args.notes.clone(),
    };

    if updates.is_empty() {
        bail!("nothing to update: pass at least one field flag");
    }

    let workspace = ctx.workspace()?;
    let store = workspace.opportunities()?;

    let mut opportunity = store.get(&args.id).map_err(|e| anyhow::anyhow!("{e}"))?;
    updates.apply_to(&mut opportunity);

    validation::validate(&opportunity)
        .map_err(|e| anyhow::anyhow!("update rejected: {e}"))?;

    store
        .upsert(&opportunity)
        .with_context(|| format!("failed to update opportunity {}", args.id))?;

    if ctx.json {
        output_json(&OpportunityView::from_opportunity(&opportunity));
    } else if !ctx.quiet {
        println!("Updated opportunity: {}", args.id);
    }
    Ok(())
}
