pub use todo_core::config::*;

use crate::cli::Cli;

pub fn from_cli(cli: &Cli) -> anyhow::Result<AppConfig> {
    AppConfig::discover(ConfigOverrides {
        confirm_delete: cli.confirm_delete,
        log_filter: cli.log_filter.clone(),
    })
}
