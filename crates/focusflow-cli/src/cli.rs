//! Subcommand arguments and their handlers.
//!
//! Each clap argument struct converts into a core parameter type with a
//! `From` impl, so clap attributes never leak into `focusflow-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Controller
//! ```
//!
//! [`Cli`] then runs the controller operation and renders the markdown that
//! the core display types produce.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use focusflow_core::{
    display::{CreateResult, Dashboard, DeleteResult, Tasks, UpdateResult},
    params::{NewTask, UpdateSettings},
    Controller, Difficulty, FocusError,
};
use jiff::civil::Date;
use log::debug;

use crate::renderer::TerminalRenderer;

const WELCOME: &str = "\
# Welcome to FocusFlow

Your study coach in the terminal.

- **Add tasks**: assignments, labs and exams go into your backlog
- **Generate a plan**: AI turns the backlog into a day-by-day schedule
- **Check off micro-tasks**: finish every one to grow your streak

Add your first task with `focusflow task add`, then run `focusflow onboard`
to skip this screen next time.
";

/// Add a task to the backlog
#[derive(Args)]
pub struct AddTaskArgs {
    /// Short title of the task
    pub title: String,
    /// Subject the task belongs to
    #[arg(short, long)]
    pub subject: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long, help = "Due date in YYYY-MM-DD format")]
    pub deadline: Option<Date>,
    /// How hard the task is
    #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
    pub difficulty: DifficultyArg,
    /// Mark the task as an exam
    #[arg(long)]
    pub exam: bool,
    /// Optional notes about the task
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<AddTaskArgs> for NewTask {
    fn from(val: AddTaskArgs) -> Self {
        NewTask {
            title: val.title,
            subject: val.subject,
            deadline: val.deadline,
            difficulty: val.difficulty.into(),
            is_exam: val.exam,
            description: val.description,
        }
    }
}

/// Remove a task from the backlog
#[derive(Args)]
pub struct RemoveTaskArgs {
    #[arg(help = "ID of the task to remove")]
    pub id: String,
}

/// Get a short motivational nudge for a task
#[derive(Args)]
pub struct NudgeTaskArgs {
    #[arg(help = "ID of the task to get a reminder for")]
    pub id: String,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to the backlog
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List the backlog in the order tasks were added
    #[command(aliases = ["l", "ls"])]
    List,
    /// Remove a task from the backlog
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveTaskArgs),
    /// Get a short motivational nudge for a task
    #[command(alias = "n")]
    Nudge(NudgeTaskArgs),
}

/// Planning knobs shared by `plan generate` and `plan settings`.
///
/// Values given here are saved and reused by later plans.
#[derive(Args)]
pub struct SettingsArgs {
    /// Current energy level from 1 (drained) to 10 (fully charged)
    #[arg(long)]
    pub energy: Option<u8>,
    /// Hours available for study each day
    #[arg(long)]
    pub hours: Option<f64>,
    /// Number of days the plan should cover
    #[arg(long)]
    pub days: Option<u32>,
}

impl From<SettingsArgs> for UpdateSettings {
    fn from(val: SettingsArgs) -> Self {
        UpdateSettings {
            energy_level: val.energy,
            available_hours_per_day: val.hours,
            days_to_plan: val.days,
        }
    }
}

/// Check or uncheck a micro-task of the active plan
#[derive(Args)]
pub struct CheckArgs {
    #[arg(help = "ID of the micro-task to toggle")]
    pub id: String,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a new plan from the backlog
    #[command(alias = "g")]
    Generate(SettingsArgs),
    /// Show the active plan
    #[command(alias = "s")]
    Show,
    /// Check or uncheck a micro-task
    #[command(alias = "c")]
    Check(CheckArgs),
    /// Show or change planning settings
    Settings(SettingsArgs),
}

/// Show coaching feedback on the past week
#[derive(Args)]
pub struct InsightsArgs {
    /// Request fresh feedback instead of showing the saved one
    #[arg(long)]
    pub refresh: bool,
}

/// Command-line representation of task difficulty
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(val: DifficultyArg) -> Self {
        match val {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Runs subcommands against a controller and renders the results.
pub struct Cli {
    controller: Controller,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(controller: Controller, renderer: TerminalRenderer) -> Self {
        Self {
            controller,
            renderer,
        }
    }

    /// Welcome text on first use, the dashboard afterwards.
    pub async fn home(&self) -> Result<()> {
        if !self.controller.has_seen_onboarding().await? {
            return self.renderer.render(WELCOME);
        }

        let dashboard = Dashboard {
            tasks: Tasks(self.controller.tasks().await),
            plan: self.controller.active_plan().await,
            streak: self.controller.streak().await?,
        };
        self.renderer.render(&dashboard.to_string())
    }

    pub async fn onboard(&self) -> Result<()> {
        self.controller
            .finish_onboarding()
            .await
            .context("Failed to save onboarding state")?;
        self.renderer
            .render("You're all set. Run `focusflow` to see your dashboard.\n")
    }

    pub async fn streak(&self) -> Result<()> {
        let streak = self.controller.streak().await?;
        let unit = if streak == 1 { "day" } else { "days" };
        self.renderer
            .render(&format!("Current streak: {streak} {unit}\n"))
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self.controller.add_task(args.into()).await?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::List => {
                let tasks = Tasks(self.controller.tasks().await);
                self.renderer.render(&tasks.to_string())
            }
            TaskCommands::Remove(args) => match self.controller.remove_task(&args.id).await? {
                Some(task) => self.renderer.render(&DeleteResult::new(task).to_string()),
                None => self
                    .renderer
                    .render(&format!("No task with ID {} in the backlog.\n", args.id)),
            },
            TaskCommands::Nudge(args) => {
                let reminder = self.controller.request_reminder(&args.id).await?;
                self.renderer.render(&format!("{reminder}\n"))
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => self.generate_plan(args.into()).await,
            PlanCommands::Show => match self.controller.active_plan().await {
                Some(tracker) => self.renderer.render(&tracker.to_string()),
                None => self
                    .renderer
                    .render("No active plan. Run `focusflow plan generate` to create one.\n"),
            },
            PlanCommands::Check(args) => self.check(&args.id).await,
            PlanCommands::Settings(args) => self.settings(args.into()).await,
        }
    }

    pub async fn insights(&self, args: InsightsArgs) -> Result<()> {
        let saved = if args.refresh {
            None
        } else {
            self.controller.analysis().await
        };

        let analysis = match saved {
            Some(analysis) => analysis,
            None => self
                .controller
                .request_analysis()
                .await
                .context("Could not fetch insights, try again later")?,
        };
        self.renderer.render(&analysis.to_string())
    }

    async fn generate_plan(&self, update: UpdateSettings) -> Result<()> {
        if !update.is_empty() {
            self.controller.update_settings(update).await?;
        }

        let outcome = match self.controller.request_plan().await {
            Err(FocusError::EmptyBacklog) => {
                anyhow::bail!("Your backlog is empty. Add a task with `focusflow task add` first.")
            }
            result => result.context("Could not generate a plan, try again later")?,
        };

        self.renderer.render(&outcome.tracker.to_string())?;
        if let Some(completion) = outcome.completion {
            self.renderer.render(&format!("\n{completion}"))?;
        }
        Ok(())
    }

    async fn check(&self, id: &str) -> Result<()> {
        let outcome = self.controller.toggle_micro_task(id).await?;

        let Some(tracker) = outcome.tracker else {
            return self
                .renderer
                .render("No active plan. Run `focusflow plan generate` to create one.\n");
        };
        let Some(checked) = outcome.checked else {
            return self
                .renderer
                .render(&format!("No micro-task with ID {id} in the active plan.\n"));
        };
        debug!("Toggled {id} to {checked}");

        let verb = if checked { "Checked" } else { "Unchecked" };
        self.renderer.render(&format!(
            "{verb} {id}. Progress: {}/{} ({}%)\n",
            tracker.checked_count(),
            tracker.total(),
            tracker.progress()
        ))?;

        if let Some(completion) = outcome.completion {
            self.renderer.render(&format!("\n{completion}"))?;
        }
        Ok(())
    }

    async fn settings(&self, update: UpdateSettings) -> Result<()> {
        if update.is_empty() {
            let settings = self.controller.settings().await;
            return self
                .renderer
                .render(&format!("# Plan Settings\n\n{settings}"));
        }

        let changes = describe_changes(&update);
        let settings = self.controller.update_settings(update).await?;
        self.renderer
            .render(&UpdateResult::with_changes(settings, changes).to_string())
    }
}

fn describe_changes(update: &UpdateSettings) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(energy) = update.energy_level {
        changes.push(format!("Energy level set to {energy}"));
    }
    if let Some(hours) = update.available_hours_per_day {
        changes.push(format!("Hours per day set to {hours}"));
    }
    if let Some(days) = update.days_to_plan {
        changes.push(format!("Days to plan set to {days}"));
    }
    changes
}
