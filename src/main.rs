use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = todo::cli::Cli::parse();
    let config = todo::config::from_cli(&cli)?;

    init_tracing(&config)?;
    install_interrupt_handler()?;

    let reason = todo::console::run(config)?;
    tracing::debug!(?reason, "exiting");
    Ok(())
}

fn init_tracing(config: &todo::AppConfig) -> Result<()> {
    let env_filter = build_filter(config.log_filter(), config.log_filter_is_explicit())?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}

/// `--log`/`TODO_LOG` replace `RUST_LOG` entirely; otherwise `RUST_LOG` is
/// layered over the default directive.
fn build_filter(filter: &str, explicit: bool) -> Result<EnvFilter> {
    if explicit {
        return EnvFilter::try_new(filter)
            .with_context(|| format!("invalid log directive '{}'", filter));
    }

    let directive: Directive = filter
        .parse()
        .with_context(|| format!("invalid log directive '{}'", filter))?;
    Ok(EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy())
}

/// Ctrl-C while a prompt is blocked ends the session with the short farewell
/// and a success status.
fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        tracing::debug!("interrupt received");
        let mut stdout = std::io::stdout();
        let _ = writeln!(stdout, "{}", todo::constants::FAREWELL_CANCELLED);
        let _ = stdout.flush();
        std::process::exit(0);
    })
    .context("failed to install Ctrl-C handler")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_is_used_verbatim() {
        let filter = build_filter("todo_core=trace,warn", true).expect("valid filter");
        let rendered = filter.to_string();
        assert!(rendered.contains("todo_core=trace"));
        assert!(rendered.contains("warn"));
    }

    #[test]
    fn default_filter_accepts_a_level() {
        assert!(build_filter("warn", false).is_ok());
    }
}
