use std::path::PathBuf;

use clap::{Parser, Subcommand};
use focusflow_core::service::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

use crate::cli::{InsightsArgs, PlanCommands, TaskCommands};

/// FocusFlow: a study planner for students
///
/// Keep a backlog of assignments and exams, have an AI coach turn it into a
/// multi-day schedule with small micro-tasks, and check those off to build a
/// daily streak.
#[derive(Parser)]
#[command(version, about, name = "focusflow")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/focusflow/focusflow.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// API key for the Google Generative Language API
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for plans and coaching
    #[arg(long, global = true, env = "FOCUSFLOW_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Generative Language API
    #[arg(
        long,
        global = true,
        env = "FOCUSFLOW_API_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub api_base_url: String,

    /// Request timeout for AI calls, in seconds
    #[arg(long, global = true, default_value_t = 120)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the FocusFlow CLI
///
/// Without a command, FocusFlow shows the welcome text on first use and the
/// dashboard afterwards.
#[derive(Subcommand)]
pub enum Commands {
    /// Mark the welcome screen as seen
    Onboard,
    /// Manage the task backlog
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Generate and work through a study plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show coaching feedback on the past week
    #[command(alias = "i")]
    Insights(InsightsArgs),
    /// Show the current completion streak
    Streak,
}
