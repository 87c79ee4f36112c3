//! `liftdesk convert` -- turn a won opportunity into a project.

use anyhow::{Result, bail};
use chrono::Utc;

use liftdesk_core::project::ProjectDraft;
use liftdesk_core::repo::OpportunityStore;
use liftdesk_ui::{money, styles};

use crate::cli::ConvertArgs;
use crate::commands::create::parse_close_date;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `liftdesk convert` command.
pub fn run(ctx: &RuntimeContext, args: &ConvertArgs) -> Result<()> {
    let workspace = ctx.workspace()?;
    let store = workspace.opportunities()?;

    let opportunity = store.get(&args.id).map_err(|e| anyhow::anyhow!("{e}"))?;

    // Eligibility first: a non-won deal never yields a partial draft.
    let today = Utc::now().date_naive();
    let mut draft =
        ProjectDraft::from_opportunity(&opportunity, today).map_err(|e| anyhow::anyhow!("{e}"))?;

    // Apply the user's edits over the defaults.
    if let Some(ref name) = args.name {
        draft.name = name.clone();
    }
    if let Some(ref leader) = args.leader {
        draft.team_leader = leader.clone();
    }
    draft.team_members = args.members.clone();
    if let Some(ref site) = args.site {
        draft.site_address = site.clone();
    }
    if let Some(ref contact) = args.contact {
        draft.contact_person = contact.clone();
    }
    if let Some(ref phone) = args.phone {
        draft.contact_phone = phone.clone();
    }
    if let Some(ref email) = args.email {
        draft.contact_email = email.clone();
    }
    if let Some(ref start) = args.start {
        draft.start_date = parse_close_date(start)?;
    }
    if let Some(ref completion) = args.completion {
        draft.completion_date = parse_close_date(completion)?;
    }
    if let Some(ref specs) = args.specifications {
        draft.specifications = specs.clone();
    }

    // Roster check is advisory; the hard rules live in draft.validate().
    if !ctx.quiet {
        if !draft.team_leader.is_empty() && !workspace.config.team.is_leader(&draft.team_leader) {
            eprintln!(
                "warning: '{}' is not on the leader roster",
                draft.team_leader
            );
        }
        for member in &draft.team_members {
            if !workspace.config.team.is_member(member) {
                eprintln!("warning: '{member}' is not on the member roster");
            }
        }
    }

    if args.dry_run {
        if ctx.json {
            output_json(&draft);
        } else {
            print_draft(&draft);
            let errors = draft.validate();
            if !errors.is_empty() {
                println!();
                println!("Outstanding before commit:");
                for error in &errors {
                    println!("  {} {}", styles::render_fail("-"), error);
                }
            }
        }
        return Ok(());
    }

    let errors = draft.validate();
    if !errors.is_empty() {
        let listing: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
        bail!("project draft is incomplete:\n{}", listing.join("\n"));
    }

    workspace
        .projects()
        .append(&draft)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    if ctx.json {
        output_json(&draft);
    } else if !ctx.quiet {
        println!("Created project {}", styles::render_bold(&draft.code));
        print_draft(&draft);
    }
    Ok(())
}

fn print_draft(draft: &ProjectDraft) {
    println!("  Name:        {}", draft.name);
    println!("  Code:        {}", draft.code);
    println!("  Value:       {}", money::format_inr(draft.amount));
    if !draft.team_leader.is_empty() {
        println!("  Leader:      {}", draft.team_leader);
    }
    if !draft.team_members.is_empty() {
        println!("  Team:        {}", draft.team_members.join(", "));
    }
    if !draft.site_address.is_empty() {
        println!("  Site:        {}", draft.site_address);
    }
    println!("  Start:       {}", draft.start_date);
    println!("  Completion:  {}", draft.completion_date);
    if !draft.contact_person.is_empty() {
        println!("  Contact:     {}", draft.contact_person);
    }
    println!("  Status:      {}", draft.status);
}
