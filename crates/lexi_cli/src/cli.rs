//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect and exercise the lexi tutoring backend
#[derive(Parser)]
#[command(name = "lexi", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a raw model reply into text and interactive element
    Parse {
        /// File containing the raw reply; reads stdin when omitted
        file: Option<String>,
    },
    /// Show the assembled system instruction and its fingerprint
    Prompt {
        /// Background answer (KEY=VALUE, repeatable), e.g. certified=yes
        #[arg(short, long)]
        answer: Vec<String>,
        /// Study-plan file. Uses LEXI_EDUCATION_PLAN or education_plan.txt if not set.
        #[arg(long)]
        plan: Option<String>,
        /// Print only the fingerprint
        #[arg(long)]
        fingerprint: bool,
    },
    /// Show the welcome message for a learner
    Greeting {
        /// Learner name
        #[arg(short, long)]
        name: String,
        /// Background answer (KEY=VALUE, repeatable)
        #[arg(short, long)]
        answer: Vec<String>,
    },
    /// Manage registered learners
    Learner {
        #[command(subcommand)]
        action: LearnerAction,
    },
}

#[derive(Subcommand)]
pub enum LearnerAction {
    /// Register a learner name
    Add {
        /// Learner name
        name: String,
    },
    /// List registered learners
    List,
}
