//! `liftdesk move` -- move an opportunity to another pipeline stage.

use anyhow::{Context, Result};

use liftdesk_core::enums::Stage;
use liftdesk_core::pipeline::{BoardController, BoardError};
use liftdesk_ui::styles;

use crate::cli::MoveArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `liftdesk move` command.
pub fn run(ctx: &RuntimeContext, args: &MoveArgs) -> Result<()> {
    let target: Stage = args
        .stage
        .parse()
        .with_context(|| format!("invalid stage '{}'", args.stage))?;

    let workspace = ctx.workspace()?;
    let controller = BoardController::new(workspace.opportunities()?);

    let change = match controller.move_stage(&args.id, target) {
        Ok(change) => change,
        // Not-found and terminal refusals leave the board untouched; report
        // them verbatim so the caller can distinguish the two.
        Err(e @ (BoardError::NotFound(_) | BoardError::Transition(_))) => {
            return Err(anyhow::anyhow!("{e}"));
        }
        Err(BoardError::Store(e)) => {
            return Err(anyhow::anyhow!(e)).context("failed to move opportunity");
        }
    };

    if ctx.json {
        output_json(&change);
    } else if !ctx.quiet {
        println!(
            "Moved {} from {} to {} (probability {}%)",
            change.id,
            styles::render_stage(change.from),
            styles::render_stage(change.to),
            change.probability
        );
    }
    Ok(())
}
