use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "todo",
    version,
    about = "A menu-driven task list kept in memory for one session.",
    after_help = "Examples:\n  todo                   Start the menu\n  todo --confirm-delete  Ask before deleting a task\n  todo --log debug       Write debug logs to stderr"
)]
pub struct Cli {
    /// Ask for a yes/no confirmation before deleting a task
    #[arg(long)]
    pub confirm_delete: bool,

    /// Override the tracing filter (e.g. "warn", "debug", "todo_core=trace")
    #[arg(long = "log", value_name = "DIRECTIVE")]
    pub log_filter: Option<String>,
}
