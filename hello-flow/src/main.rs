//! Hello Flow
//!
//! Executes the hello-world flow: greets a name and reports the runtime
//! environment (kubernetes, docker or local) the run landed on.

mod context;
mod flow;
mod probe;
mod tasks;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::context::{FlowRunContext, run_log_lines};
use hello_core::domain::log::LogLevel;
use crate::flow::{DEFAULT_NAME, FLOW_NAME, hello_flow};
use crate::probe::HostProbe;

#[derive(Parser)]
#[command(name = "hello-flow")]
#[command(about = "Execute the hello-world flow", long_about = None)]
struct Cli {
    /// Name to include in the greeting
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hello_flow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to initialize logging")?;

    let ctx = FlowRunContext::new(FLOW_NAME);
    info!("Beginning flow run {} for flow '{}'", ctx.run_id, ctx.flow_name);

    hello_flow(&ctx, &cli.name, &HostProbe::default());
    info!("Flow run {} finished in state Completed", ctx.run_id);

    println!("Run logs for {} ({}):", ctx.flow_name, ctx.run_id);
    for line in run_log_lines(&ctx.drain_logs(), LogLevel::Info) {
        println!("  {}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_defaults_to_world() {
        let cli = Cli::try_parse_from(["hello-flow"]).unwrap();
        assert_eq!(cli.name, "World");
    }

    #[test]
    fn test_name_flag() {
        let cli = Cli::try_parse_from(["hello-flow", "--name", "Ada"]).unwrap();
        assert_eq!(cli.name, "Ada");
    }

    #[test]
    fn test_unknown_flags_rejected() {
        assert!(Cli::try_parse_from(["hello-flow", "--verbose"]).is_err());
    }
}
