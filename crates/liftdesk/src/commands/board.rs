//! `liftdesk board` -- render the six-column pipeline board.

use anyhow::Result;

use liftdesk_core::pipeline::BoardController;
use liftdesk_ui::{money, styles};

use crate::cli::BoardArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `liftdesk board` command.
pub fn run(ctx: &RuntimeContext, args: &BoardArgs) -> Result<()> {
    let workspace = ctx.workspace()?;
    let controller = BoardController::new(workspace.opportunities()?);
    let board = controller.board().map_err(|e| anyhow::anyhow!("{e}"))?;

    if ctx.json {
        output_json(&board);
        return Ok(());
    }

    for column in &board.columns {
        let heading = format!(
            "{} ({}) {}",
            styles::render_stage_header(column.stage),
            column.count(),
            styles::render_muted(&money::format_inr(column.value())),
        );
        println!("{heading}");

        if !args.compact {
            for opportunity in &column.opportunities {
                println!(
                    "  {} {} ({}) - {}",
                    styles::render_muted(&opportunity.id),
                    opportunity.title,
                    opportunity.company,
                    money::format_inr(opportunity.amount),
                );
            }
        }
    }

    println!("{}", styles::render_separator());
    println!(
        "Pipeline value: {}   Won: {}",
        styles::render_bold(&money::format_inr(board.total_pipeline_value())),
        styles::render_pass(&money::format_inr(board.won_value())),
    );
    Ok(())
}
