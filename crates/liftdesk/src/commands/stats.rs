//! `liftdesk stats` -- pipeline statistics.

use anyhow::Result;
use serde::Serialize;

use liftdesk_core::pipeline::BoardController;
use liftdesk_ui::money;

use crate::context::RuntimeContext;
use crate::output::output_json;

#[derive(Serialize)]
struct StageStat {
    stage: String,
    count: usize,
    value: i64,
}

#[derive(Serialize)]
struct PipelineStats {
    total_opportunities: usize,
    pipeline_value: i64,
    won_value: i64,
    by_stage: Vec<StageStat>,
}

/// Execute the `liftdesk stats` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let workspace = ctx.workspace()?;
    let controller = BoardController::new(workspace.opportunities()?);
    let board = controller.board().map_err(|e| anyhow::anyhow!("{e}"))?;

    let stats = PipelineStats {
        total_opportunities: board.total_count(),
        pipeline_value: board.total_pipeline_value(),
        won_value: board.won_value(),
        by_stage: board
            .columns
            .iter()
            .map(|c| StageStat {
                stage: c.stage.as_str().to_owned(),
                count: c.count(),
                value: c.value(),
            })
            .collect(),
    };

    if ctx.json {
        output_json(&stats);
        return Ok(());
    }

    println!("Opportunities: {}", stats.total_opportunities);
    println!("Pipeline value: {}", money::format_inr(stats.pipeline_value));
    println!("Won value: {}", money::format_inr(stats.won_value));
    println!();
    for stat in &stats.by_stage {
        println!(
            "  {:<12} {:>4}  {}",
            stat.stage,
            stat.count,
            money::format_inr(stat.value)
        );
    }
    Ok(())
}
