//! Command-line interface definition

pub mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use once_cell::sync::Lazy;
use std::path::PathBuf;
use studygenius::{BillingCycle, ContentKind, PlanTier};

#[derive(Parser)]
#[command(name = "studygenius")]
#[command(about = "StudyGenius - accounts, subscriptions and study material from the command line")]
#[command(version, long_version = LONG_VERSION.as_str())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (YAML)
    #[arg(short, long, global = true, env = "STUDYGENIUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the session and saved state
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Keep all state in memory for this invocation only
    #[arg(long, global = true)]
    pub memory: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Skip the simulated backend delays
    #[arg(long, global = true)]
    pub fast: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List subscription plans and prices
    Plans,

    /// Create a new account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Log in with any email and non-empty password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the logged-in account
    Whoami,

    /// Start the free trial for the logged-in account
    Trial,

    /// Request a password reset link
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Subscribe the logged-in account to a paid plan
    Subscribe {
        /// premium or academic
        #[arg(long)]
        plan: PlanTier,
        /// monthly or annual
        #[arg(long, default_value = "monthly")]
        cycle: BillingCycle,
        #[command(flatten)]
        card: CardArgs,
        /// Keep the card on file after paying
        #[arg(long)]
        save_card: bool,
    },

    /// Manage stored payment methods
    #[command(subcommand)]
    Cards(CardsCommand),

    /// Upload a study document
    Upload {
        /// Path of the document to upload
        file: PathBuf,
        #[arg(long)]
        subject: String,
    },

    /// List uploaded documents
    Documents,

    /// Generate study material from an uploaded document
    Generate {
        /// Document id returned by `upload`
        document_id: String,
        /// summary, notes, questions or predictions
        #[arg(long, default_value = "summary")]
        kind: ContentKind,
        /// Extra context for the generator
        #[arg(long, default_value = "")]
        info: String,
    },
}

#[derive(Subcommand)]
pub enum CardsCommand {
    /// List stored cards
    List,

    /// Store a new card
    Add {
        #[command(flatten)]
        card: CardArgs,
        /// Make this the default card
        #[arg(long)]
        default: bool,
    },

    /// Change a stored card
    Update {
        id: String,
        /// Replacement card number; only the brand and last four are kept
        #[arg(long)]
        card_number: Option<String>,
        #[arg(long)]
        card_name: Option<String>,
        /// Expiry as MM/YY
        #[arg(long)]
        expiry: Option<String>,
        /// Make this the default card
        #[arg(long)]
        default: bool,
    },

    /// Remove a stored card
    Remove { id: String },

    /// Make a stored card the default
    Default { id: String },
}

/// Card fields as entered at checkout
#[derive(Args, Debug, Clone)]
pub struct CardArgs {
    #[arg(long)]
    pub card_number: String,
    /// Name on the card
    #[arg(long)]
    pub card_name: String,
    /// Expiry as MM/YY
    #[arg(long)]
    pub expiry: String,
    #[arg(long, default_value = "")]
    pub cvv: String,
}

static LONG_VERSION: Lazy<String> = Lazy::new(|| {
    let info = studygenius::build_info();
    format!("{} (git {}, built {})", info.version, info.git_hash, info.build_time)
});
