//! `liftdesk quote` -- price a product configuration.

use anyhow::Result;

use liftdesk_pricing::catalog::{
    self, ControlSystem, DoorConfig, DriveType, ElevatorCategory,
};
use liftdesk_pricing::engine::compute_price;
use liftdesk_pricing::types::ProductConfiguration;
use liftdesk_ui::{money, styles};

use crate::cli::QuoteArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `liftdesk quote` command.
pub fn run(ctx: &RuntimeContext, args: &QuoteArgs) -> Result<()> {
    if args.options {
        print_catalog();
        return Ok(());
    }

    let config = build_configuration(args);
    warn_on_unknown_keys(ctx, &config);

    let workspace = ctx.workspace()?;
    let rates = &workspace.config.rates;

    match compute_price(&config, rates) {
        Ok(breakdown) => {
            if ctx.json {
                output_json(&breakdown);
                return Ok(());
            }
            println!("{}", styles::render_bold("Quotation"));
            println!("  Base:          {}", money::format_inr(breakdown.base_amount));
            println!("  Floors:        {}", money::format_inr(breakdown.floor_amount));
            println!("  Multiplier:    x{}", breakdown.category_multiplier);
            if breakdown.speed_adder != 0 {
                println!("  Speed:         {}", money::format_inr(breakdown.speed_adder));
            }
            if breakdown.capacity_adder != 0 {
                println!("  Capacity:      {}", money::format_inr(breakdown.capacity_adder));
            }
            println!("  Equipment:     {}", money::format_inr(breakdown.equipment_amount));
            println!("  Installation:  {}", money::format_inr(breakdown.installation_amount));
            println!("  Maintenance:   {}", money::format_inr(breakdown.maintenance_amount));
            println!("{}", styles::render_separator());
            println!("  Subtotal:      {}", money::format_inr(breakdown.subtotal));
            println!("  Tax (1):       {}", money::format_inr(breakdown.tax1));
            println!("  Tax (2):       {}", money::format_inr(breakdown.tax2));
            println!(
                "  Total:         {}",
                styles::render_bold(&money::format_inr(breakdown.grand_total))
            );
            Ok(())
        }
        // The breakdown is withheld rather than zeroed; say exactly why.
        Err(e) => Err(anyhow::anyhow!("{e}")),
    }
}

fn build_configuration(args: &QuoteArgs) -> ProductConfiguration {
    ProductConfiguration {
        category: args
            .category
            .as_deref()
            .map(ElevatorCategory::from),
        floors: args.floors,
        doors: args
            .doors
            .as_deref()
            .map(DoorConfig::from)
            .unwrap_or_default(),
        speed: args.speed.clone().unwrap_or_default(),
        capacity: args.capacity.clone().unwrap_or_default(),
        drive: args
            .drive
            .as_deref()
            .map(DriveType::from)
            .unwrap_or_default(),
        control: args
            .control
            .as_deref()
            .map(ControlSystem::from)
            .unwrap_or_default(),
        installation_included: !args.no_installation,
        maintenance_years: args.amc_years,
    }
}

/// Unlisted option keys still price (with neutral defaults); tell the user.
fn warn_on_unknown_keys(ctx: &RuntimeContext, config: &ProductConfiguration) {
    if ctx.quiet {
        return;
    }
    if let Some(ref category) = config.category {
        if !category.is_builtin() {
            eprintln!(
                "warning: category '{category}' is not in the catalog; pricing with multiplier x1"
            );
        }
    }
    if !config.speed.is_empty()
        && !catalog::SPEED_OPTIONS.iter().any(|e| e.key == config.speed)
    {
        eprintln!(
            "warning: speed '{}' is not in the catalog; no adder applied",
            config.speed
        );
    }
    if !config.capacity.is_empty()
        && !catalog::CAPACITY_OPTIONS.iter().any(|e| e.key == config.capacity)
    {
        eprintln!(
            "warning: capacity '{}' is not in the catalog; no adder applied",
            config.capacity
        );
    }
}

fn print_catalog() {
    println!("{}", styles::render_accent("CATEGORIES"));
    for info in catalog::CATEGORIES {
        println!("  {:<14} {} -- {}", info.key, info.name, info.description);
    }
    println!("{}", styles::render_accent("SPEEDS"));
    for entry in catalog::SPEED_OPTIONS {
        println!("  {:<14} {}", entry.key, entry.label);
    }
    println!("{}", styles::render_accent("CAPACITIES"));
    for entry in catalog::CAPACITY_OPTIONS {
        println!("  {:<14} {}", entry.key, entry.label);
    }
    println!("{}", styles::render_accent("DOORS"));
    for entry in catalog::DOOR_OPTIONS {
        println!("  {:<14} {}", entry.key, entry.label);
    }
    println!("{}", styles::render_accent("DRIVES"));
    for entry in catalog::DRIVE_OPTIONS {
        println!("  {:<14} {}", entry.key, entry.label);
    }
    println!("{}", styles::render_accent("CONTROLS"));
    for entry in catalog::CONTROL_OPTIONS {
        println!("  {:<14} {}", entry.key, entry.label);
    }
}
