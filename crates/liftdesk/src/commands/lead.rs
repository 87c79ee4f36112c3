//! `liftdesk lead` -- capture, list and promote leads.

use anyhow::{Context, Result, bail};
use chrono::Utc;

use liftdesk_core::enums::{LeadSource, LeadStatus};
use liftdesk_core::idgen;
use liftdesk_core::lead::Lead;
use liftdesk_core::repo::OpportunityStore;

use crate::cli::{LeadAddArgs, LeadCommands, LeadListArgs, LeadPromoteArgs};
use crate::commands::create::generate_unique_id;
use crate::context::RuntimeContext;
use crate::output::{OpportunityView, output_json};

/// Execute the `liftdesk lead` subcommands.
pub fn run(ctx: &RuntimeContext, command: &LeadCommands) -> Result<()> {
    match command {
        LeadCommands::Add(args) => run_add(ctx, args),
        LeadCommands::List(args) => run_list(ctx, args),
        LeadCommands::Promote(args) => run_promote(ctx, args),
    }
}

fn run_add(ctx: &RuntimeContext, args: &LeadAddArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        bail!("lead name must not be empty");
    }

    let workspace = ctx.workspace()?;
    let leads = workspace.leads();
    let existing = leads.load().map_err(|e| anyhow::anyhow!("{e}"))?;

    let id = {
        let now = Utc::now();
        let mut generated = None;
        for nonce in 0..10 {
            let candidate = idgen::generate_record_id(
                workspace.config.lead_id_prefix(),
                &args.name,
                args.phone.as_deref().unwrap_or(""),
                &ctx.actor,
                now,
                nonce,
            );
            if !existing.iter().any(|l| l.id == candidate) {
                generated = Some(candidate);
                break;
            }
        }
        generated.context("failed to generate unique lead id after 10 attempts")?
    };

    let mut lead = Lead::new(
        &id,
        &args.name,
        LeadSource::from(args.source.as_str()),
        args.assigned_to.clone().unwrap_or_else(|| ctx.actor.clone()),
    );
    lead.email = args.email.clone().unwrap_or_default();
    lead.phone = args.phone.clone().unwrap_or_default();
    lead.company = args.company.clone().unwrap_or_default();
    lead.notes = args.notes.clone().unwrap_or_default();

    leads.append(&lead).map_err(|e| anyhow::anyhow!("{e}"))?;

    if ctx.json {
        output_json(&lead);
    } else if !ctx.quiet {
        println!("Captured lead: {id}");
        println!("  Name: {}", lead.name);
        println!("  Source: {}", lead.source);
        println!("  Assigned to: {}", lead.assigned_to);
    }
    Ok(())
}

fn run_list(ctx: &RuntimeContext, args: &LeadListArgs) -> Result<()> {
    let status_filter: Option<LeadStatus> = args
        .status
        .as_deref()
        .map(|s| s.parse().map_err(|e: String| anyhow::anyhow!(e)))
        .transpose()?;

    let workspace = ctx.workspace()?;
    let mut leads = workspace.leads().load().map_err(|e| anyhow::anyhow!("{e}"))?;

    if let Some(status) = status_filter {
        leads.retain(|l| l.status == status);
    }
    if let Some(ref source) = args.source {
        leads.retain(|l| l.source.as_str() == source);
    }

    if ctx.json {
        output_json(&leads);
        return Ok(());
    }

    if leads.is_empty() {
        if !ctx.quiet {
            println!("No leads found");
        }
        return Ok(());
    }
    for lead in &leads {
        let company = if lead.company.is_empty() {
            String::new()
        } else {
            format!(" ({})", lead.company)
        };
        println!(
            "{} [{}] {}{} - {} - {}",
            lead.id, lead.status, lead.name, company, lead.source, lead.assigned_to
        );
    }
    Ok(())
}

fn run_promote(ctx: &RuntimeContext, args: &LeadPromoteArgs) -> Result<()> {
    let workspace = ctx.workspace()?;
    let leads_file = workspace.leads();
    let mut leads = leads_file.load().map_err(|e| anyhow::anyhow!("{e}"))?;

    let lead = leads
        .iter_mut()
        .find(|l| l.id == args.id)
        .with_context(|| format!("lead not found: {}", args.id))?;

    let store = workspace.opportunities()?;
    let title = args.title.clone().unwrap_or_else(|| {
        let company = if lead.company.is_empty() {
            lead.name.clone()
        } else {
            lead.company.clone()
        };
        format!("{} - {}", company, args.product)
    });

    let opportunity_id = generate_unique_id(
        &store,
        workspace.config.opportunity_prefix(),
        &title,
        &lead.name,
        &ctx.actor,
    )?;

    let opportunity = lead.promote(&opportunity_id, &title, args.amount, &args.product);
    store
        .upsert(&opportunity)
        .context("failed to store promoted opportunity")?;

    // The lead stays on file, marked as qualified.
    lead.status = LeadStatus::Qualified;
    leads_file.save(&leads).map_err(|e| anyhow::anyhow!("{e}"))?;

    if ctx.json {
        output_json(&OpportunityView::from_opportunity(&opportunity));
    } else if !ctx.quiet {
        println!("Promoted lead {} to opportunity {}", args.id, opportunity_id);
        println!("  Title: {}", opportunity.title);
        println!("  Amount: {}", opportunity.amount);
        println!("  Stage: {}", opportunity.stage);
    }
    Ok(())
}
