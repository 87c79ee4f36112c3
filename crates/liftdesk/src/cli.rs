//! Clap CLI definitions for the `liftdesk` command.
//!
//! The complete CLI structure using clap 4 derive macros: global flags,
//! one subcommand per sales operation.

use clap::{Args, Parser, Subcommand};

/// liftdesk -- sales pipeline for elevator projects.
///
/// Captures leads, prices quotations, tracks deals across the pipeline
/// board and converts won deals into installation projects.
#[derive(Parser, Debug)]
#[command(
    name = "liftdesk",
    about = "Sales pipeline and quotation pricing for elevator projects",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Workspace directory (default: auto-discover .liftdesk/).
    #[arg(long, global = true)]
    pub dir: Option<String>,

    /// Actor name for record attribution (default: $LIFTDESK_ACTOR, git user.name, $USER).
    #[arg(long, global = true, env = "LIFTDESK_ACTOR")]
    pub actor: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // ===== Setup =====
    /// Initialize a liftdesk workspace in the current directory.
    Init(InitArgs),

    // ===== Leads =====
    /// Capture and manage inbound leads.
    #[command(subcommand)]
    Lead(LeadCommands),

    // ===== Opportunities =====
    /// Create an opportunity directly (manual deal entry).
    #[command(alias = "new")]
    Create(CreateArgs),

    /// List opportunities.
    List(ListArgs),

    /// Show opportunity details.
    #[command(alias = "view")]
    Show(ShowArgs),

    /// Update opportunity fields.
    Update(UpdateArgs),

    /// Move an opportunity to another pipeline stage.
    #[command(name = "move")]
    MoveCmd(MoveArgs),

    /// Delete an opportunity (requires confirmation).
    Delete(DeleteArgs),

    // ===== Board & reports =====
    /// Render the six-column pipeline board.
    Board(BoardArgs),

    /// Show pipeline statistics.
    Stats,

    // ===== Quotations =====
    /// Price a product configuration.
    Quote(QuoteArgs),

    // ===== Projects =====
    /// Convert a won opportunity into a project.
    Convert(ConvertArgs),

    /// List converted projects.
    Projects,

    // ===== Data exchange =====
    /// Export opportunities as JSONL.
    Export(ExportArgs),

    /// Import opportunities from JSONL.
    Import(ImportArgs),

    // ===== Utilities =====
    /// Generate shell completions.
    Completion(CompletionArgs),
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Opportunity record-id prefix.
    #[arg(long, default_value = "op")]
    pub prefix: String,
}

// ---------------------------------------------------------------------------
// Leads
// ---------------------------------------------------------------------------

#[derive(Subcommand, Debug)]
pub enum LeadCommands {
    /// Capture a new lead.
    Add(LeadAddArgs),

    /// List captured leads.
    List(LeadListArgs),

    /// Promote a lead into a pipeline opportunity.
    Promote(LeadPromoteArgs),
}

#[derive(Args, Debug)]
pub struct LeadAddArgs {
    /// Contact name.
    pub name: String,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    /// Capture channel (walk-in, website, reference, phone-call, email, social-media).
    #[arg(long, default_value = "website")]
    pub source: String,

    /// Salesperson the lead is assigned to (defaults to the actor).
    #[arg(long)]
    pub assigned_to: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct LeadListArgs {
    /// Filter by status (new, qualified, quoted, won, lost).
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by capture channel.
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Args, Debug)]
pub struct LeadPromoteArgs {
    /// Lead id to promote.
    pub id: String,

    /// Deal value in currency units.
    #[arg(long)]
    pub amount: i64,

    /// Product summary, e.g. "8-Floor Passenger Elevator".
    #[arg(long)]
    pub product: String,

    /// Opportunity title (default: "<company> - <product>").
    #[arg(long)]
    pub title: Option<String>,
}

// ---------------------------------------------------------------------------
// Opportunities
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Opportunity title.
    pub title: Option<String>,

    /// Opportunity title (alternative to the positional argument).
    #[arg(long = "title")]
    pub title_flag: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub contact: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Deal value in currency units.
    #[arg(long, default_value_t = 0)]
    pub amount: i64,

    /// Product summary, e.g. "8-Floor Passenger Elevator".
    #[arg(long)]
    pub product: Option<String>,

    /// Starting stage (lead, qualified, proposal, negotiation, won, lost).
    #[arg(long, default_value = "lead")]
    pub stage: String,

    /// Win probability 0-100 (default: the stage's advisory value).
    #[arg(long)]
    pub probability: Option<u8>,

    /// Expected close date (YYYY-MM-DD).
    #[arg(long)]
    pub close: Option<String>,

    /// Deal owner (defaults to the actor).
    #[arg(long)]
    pub owner: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Explicit record id (default: generated).
    #[arg(long)]
    pub id: Option<String>,

    /// Print what would be created without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print only the new record id.
    #[arg(long)]
    pub silent: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by stage.
    #[arg(long)]
    pub stage: Option<String>,

    /// Filter by owner.
    #[arg(long)]
    pub owner: Option<String>,

    /// Maximum number of rows.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Opportunity id.
    pub id: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Opportunity id.
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub contact: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub amount: Option<i64>,

    #[arg(long)]
    pub product: Option<String>,

    /// Win probability 0-100 (advisory outside won/lost).
    #[arg(long)]
    pub probability: Option<u8>,

    /// Expected close date (YYYY-MM-DD), or "none" to clear.
    #[arg(long)]
    pub close: Option<String>,

    #[arg(long)]
    pub owner: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Opportunity id.
    pub id: String,

    /// Target stage (lead, qualified, proposal, negotiation, won, lost).
    pub stage: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Opportunity id.
    pub id: String,

    /// Confirm the destructive removal.
    #[arg(long)]
    pub yes: bool,
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct BoardArgs {
    /// One line per column, counts and values only.
    #[arg(long)]
    pub compact: bool,
}

// ---------------------------------------------------------------------------
// Quotations
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Elevator category (home, commercial, shaft-with, shaft-without).
    #[arg(long)]
    pub category: Option<String>,

    /// Served floor count (minimum 2).
    #[arg(long)]
    pub floors: Option<u32>,

    /// Door configuration key.
    #[arg(long)]
    pub doors: Option<String>,

    /// Rated speed key (1.0, 1.5, 2.0, 2.5).
    #[arg(long)]
    pub speed: Option<String>,

    /// Rated capacity key (630, 800, 1000, 1250).
    #[arg(long)]
    pub capacity: Option<String>,

    /// Drive type key (vfd, geared, gearless).
    #[arg(long)]
    pub drive: Option<String>,

    /// Control system key (microprocessor, plc, iot).
    #[arg(long)]
    pub control: Option<String>,

    /// Exclude installation from the quote.
    #[arg(long)]
    pub no_installation: bool,

    /// Maintenance-contract years.
    #[arg(long, default_value_t = 1)]
    pub amc_years: u32,

    /// List the available option catalog instead of pricing.
    #[arg(long)]
    pub options: bool,
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Won opportunity id.
    pub id: String,

    /// Project name override.
    #[arg(long)]
    pub name: Option<String>,

    /// Team leader (must be exactly one).
    #[arg(long)]
    pub leader: Option<String>,

    /// Team member; repeat for each person.
    #[arg(long = "member")]
    pub members: Vec<String>,

    /// Installation site address.
    #[arg(long)]
    pub site: Option<String>,

    /// Contact person override (default: inherited from the deal).
    #[arg(long)]
    pub contact: Option<String>,

    /// Contact phone override.
    #[arg(long)]
    pub phone: Option<String>,

    /// Contact email override.
    #[arg(long)]
    pub email: Option<String>,

    /// Installation start date (YYYY-MM-DD, default: today + 7 days).
    #[arg(long)]
    pub start: Option<String>,

    /// Target completion date (YYYY-MM-DD, default: today + 60 days).
    #[arg(long)]
    pub completion: Option<String>,

    #[arg(long)]
    pub specifications: Option<String>,

    /// Print the draft without committing it.
    #[arg(long)]
    pub dry_run: bool,
}

// ---------------------------------------------------------------------------
// Data exchange
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file (default: stdout).
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Input JSONL file.
    pub input: String,
}

// ---------------------------------------------------------------------------
// Utilities
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate bash completions.
    Bash,
    /// Generate zsh completions.
    Zsh,
    /// Generate fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}
