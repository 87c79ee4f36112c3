//! `liftdesk create` -- manual opportunity entry.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Utc};

use liftdesk_core::enums::Stage;
use liftdesk_core::idgen;
use liftdesk_core::opportunity::{Opportunity, OpportunityBuilder};
use liftdesk_core::repo::OpportunityStore;
use liftdesk_core::validation;

use crate::cli::CreateArgs;
use crate::context::RuntimeContext;
use crate::output::{OpportunityView, output_json};

/// Execute the `liftdesk create` command.
pub fn run(ctx: &RuntimeContext, args: &CreateArgs) -> Result<()> {
    // Resolve title from positional arg or --title flag
    let title = match (&args.title, &args.title_flag) {
        (Some(pos), Some(flag)) if pos != flag => {
            bail!(
                "cannot specify different titles as both positional argument and --title flag\n  \
                Positional: {:?}\n  --title:    {:?}",
                pos,
                flag
            );
        }
        (Some(t), _) => t.clone(),
        (None, Some(t)) => t.clone(),
        (None, None) => bail!("title required"),
    };

    let stage: Stage = args
        .stage
        .parse()
        .with_context(|| format!("invalid stage '{}'", args.stage))?;

    let expected_close = args
        .close
        .as_deref()
        .map(parse_close_date)
        .transpose()?;

    let workspace = ctx.workspace()?;
    let store = workspace.opportunities()?;

    let id = match args.id {
        Some(ref explicit) => explicit.clone(),
        None => generate_unique_id(
            &store,
            workspace.config.opportunity_prefix(),
            &title,
            args.contact.as_deref().unwrap_or(""),
            &ctx.actor,
        )?,
    };

    let mut builder = OpportunityBuilder::new(&title)
        .id(&id)
        .amount(args.amount)
        .stage(stage)
        .owner(args.owner.clone().unwrap_or_else(|| ctx.actor.clone()));
    if let Some(ref company) = args.company {
        builder = builder.company(company);
    }
    if let Some(ref contact) = args.contact {
        builder = builder.contact_person(contact);
    }
    if let Some(ref phone) = args.phone {
        builder = builder.phone(phone);
    }
    if let Some(ref email) = args.email {
        builder = builder.email(email);
    }
    if let Some(ref product) = args.product {
        builder = builder.product_summary(product);
    }
    if let Some(probability) = args.probability {
        builder = builder.probability(probability);
    }
    if let Some(close) = expected_close {
        builder = builder.expected_close(close);
    }
    if let Some(ref notes) = args.notes {
        builder = builder.notes(notes);
    }
    let opportunity = builder.build();

    validation::validate(&opportunity)
        .map_err(|e| anyhow::anyhow!("invalid opportunity: {e}"))?;

    if args.dry_run {
        if ctx.json {
            output_json(&OpportunityView::from_opportunity(&opportunity));
        } else {
            println!("[DRY RUN] Would create opportunity:");
            print_summary(&opportunity);
        }
        return Ok(());
    }

    store
        .upsert(&opportunity)
        .with_context(|| format!("failed to create opportunity {id}"))?;

    if ctx.json {
        output_json(&OpportunityView::from_opportunity(&opportunity));
    } else if args.silent {
        println!("{id}");
    } else {
        println!("Created opportunity: {id}");
        print_summary(&opportunity);
    }
    Ok(())
}

fn print_summary(opportunity: &Opportunity) {
    println!("  Title: {}", opportunity.title);
    println!("  Stage: {}", opportunity.stage);
    println!("  Amount: {}", opportunity.amount);
    println!("  Probability: {}%", opportunity.probability);
}

/// Parse an expected-close date in ISO `YYYY-MM-DD` form.
pub fn parse_close_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{s}': expected YYYY-MM-DD"))
}

/// Generates a record id, retrying the nonce on the rare hash collision.
pub fn generate_unique_id(
    store: &dyn OpportunityStore,
    prefix: &str,
    title: &str,
    contact: &str,
    actor: &str,
) -> Result<String> {
    let now = Utc::now();
    for nonce in 0..10 {
        let candidate = idgen::generate_record_id(prefix, title, contact, actor, now, nonce);
        if store.get(&candidate).is_err() {
            return Ok(candidate);
        }
    }
    bail!("failed to generate unique id after 10 attempts");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_close_date_valid() {
        let d = parse_close_date("2025-01-20").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
    }

    #[test]
    fn parse_close_date_invalid() {
        assert!(parse_close_date("20-01-2025").is_err());
        assert!(parse_close_date("soon").is_err());
    }
}
