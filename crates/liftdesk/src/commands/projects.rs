//! `liftdesk projects` -- list converted projects.

use anyhow::Result;

use liftdesk_ui::money;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `liftdesk projects` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let workspace = ctx.workspace()?;
    let projects = workspace
        .projects()
        .load()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    if ctx.json {
        output_json(&projects);
        return Ok(());
    }

    if projects.is_empty() {
        if !ctx.quiet {
            println!("No projects found");
        }
        return Ok(());
    }

    for project in &projects {
        println!(
            "{} [{}] {} - {} ({} -> {})",
            project.code,
            project.status,
            project.name,
            money::format_inr(project.amount),
            project.start_date,
            project.completion_date,
        );
    }
    Ok(())
}
