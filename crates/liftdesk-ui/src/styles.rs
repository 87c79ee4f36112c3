//! Color theme and styling functions for liftdesk CLI output.
//!
//! Stage colors mirror the board column palette; everything else uses a
//! small set of semantic colors. Color is applied only when the terminal
//! supports it (see [`crate::terminal::supports_color`]).

use liftdesk_core::enums::Stage;
use liftdesk_core::opportunity::Opportunity;
use owo_colors::OwoColorize;

use crate::money::format_inr;
use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Palette (RGB values)
// ---------------------------------------------------------------------------

// Stage colors -- one per board column.
const STAGE_LEAD: (u8, u8, u8) = (0x3b, 0x82, 0xf6); // #3b82f6 - blue
const STAGE_QUALIFIED: (u8, u8, u8) = (0x8b, 0x5c, 0xf6); // #8b5cf6 - violet
const STAGE_PROPOSAL: (u8, u8, u8) = (0xf5, 0x9e, 0x0b); // #f59e0b - amber
const STAGE_NEGOTIATION: (u8, u8, u8) = (0xec, 0x48, 0x99); // #ec4899 - pink
const STAGE_WON: (u8, u8, u8) = (0x10, 0xb9, 0x81); // #10b981 - emerald
const STAGE_LOST: (u8, u8, u8) = (0xef, 0x44, 0x44); // #ef4444 - red

// Semantic colors
const PASS: (u8, u8, u8) = (0x10, 0xb9, 0x81);
const FAIL: (u8, u8, u8) = (0xef, 0x44, 0x44);
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80);
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff);

// Separators
pub const SEPARATOR_LIGHT: &str = "------------------------------------------";

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

fn stage_rgb(stage: Stage) -> (u8, u8, u8) {
    match stage {
        Stage::Lead => STAGE_LEAD,
        Stage::Qualified => STAGE_QUALIFIED,
        Stage::Proposal => STAGE_PROPOSAL,
        Stage::Negotiation => STAGE_NEGOTIATION,
        Stage::Won => STAGE_WON,
        Stage::Lost => STAGE_LOST,
    }
}

// ---------------------------------------------------------------------------
// Semantic render helpers
// ---------------------------------------------------------------------------

/// Renders text with pass (green) styling.
pub fn render_pass(s: &str) -> String {
    color_str(s, PASS)
}

/// Renders text with fail (red) styling.
pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

/// Renders text with muted (gray) styling.
pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

/// Renders text with accent (blue) styling.
pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

/// Renders text in bold.
pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// Renders the light separator line in muted color.
pub fn render_separator() -> String {
    render_muted(SEPARATOR_LIGHT)
}

// ---------------------------------------------------------------------------
// Stage rendering
// ---------------------------------------------------------------------------

/// Renders a stage name in its column color.
pub fn render_stage(stage: Stage) -> String {
    color_str(stage.as_str(), stage_rgb(stage))
}

/// Renders a bold column heading, e.g. `NEGOTIATION`.
pub fn render_stage_header(stage: Stage) -> String {
    let upper = stage.title().to_uppercase();
    color_bold_str(&upper, stage_rgb(stage))
}

// ---------------------------------------------------------------------------
// Amount and probability rendering
// ---------------------------------------------------------------------------

/// Renders a deal amount with the currency symbol.
pub fn render_amount(amount: i64) -> String {
    format_inr(amount)
}

/// Renders a probability as `NN%`, green at 100 and red at 0.
pub fn render_probability(probability: u8) -> String {
    let label = format!("{probability}%");
    match probability {
        100 => color_str(&label, PASS),
        0 => color_str(&label, FAIL),
        _ => label,
    }
}

// ---------------------------------------------------------------------------
// Compact opportunity rendering
// ---------------------------------------------------------------------------

/// Renders a compact one-line opportunity summary.
/// Format: `ID [stage] Title (Company) - amount, probability`
///
/// Lost deals are dimmed as a whole line.
pub fn render_opportunity_compact(opportunity: &Opportunity) -> String {
    if opportunity.stage == Stage::Lost {
        let line = format!(
            "{} [{}] {} ({}) - {}",
            opportunity.id,
            opportunity.stage.as_str(),
            opportunity.title,
            opportunity.company,
            format_inr(opportunity.amount),
        );
        color_str(&line, MUTED)
    } else {
        format!(
            "{} [{}] {} ({}) - {}, {}",
            opportunity.id,
            render_stage(opportunity.stage),
            opportunity.title,
            opportunity.company,
            format_inr(opportunity.amount),
            render_probability(opportunity.probability),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftdesk_core::opportunity::OpportunityBuilder;

    #[test]
    fn stage_render_contains_name() {
        for stage in Stage::ALL {
            assert!(render_stage(stage).contains(stage.as_str()));
        }
    }

    #[test]
    fn stage_header_is_uppercase() {
        let header = render_stage_header(Stage::Negotiation);
        assert!(header.contains("NEGOTIATION"));
    }

    #[test]
    fn probability_render_contains_percent() {
        assert!(render_probability(75).contains("75%"));
        assert!(render_probability(100).contains("100%"));
    }

    #[test]
    fn compact_render_contains_fields() {
        let opp = OpportunityBuilder::new("Corporate Office Building")
            .id("op-x92f")
            .company("Tech Park Ltd")
            .amount(3_200_000)
            .stage(Stage::Negotiation)
            .build();

        let rendered = render_opportunity_compact(&opp);
        assert!(rendered.contains("op-x92f"));
        assert!(rendered.contains("Corporate Office Building"));
        assert!(rendered.contains("32,00,000"));
    }

    #[test]
    fn lost_deal_renders_dimmed_line() {
        let opp = OpportunityBuilder::new("Budget Housing Project")
            .id("op-lost")
            .company("ABC Builders")
            .stage(Stage::Lost)
            .build();
        let rendered = render_opportunity_compact(&opp);
        assert!(rendered.contains("Budget Housing Project"));
        assert!(rendered.contains("op-lost"));
    }
}
