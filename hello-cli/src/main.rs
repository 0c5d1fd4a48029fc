//! Hello Deploy
//!
//! Registers the hello-world flow deployments with the orchestration service:
//! one for the container work pool and one for the local work pool, both
//! pinned to the revision currently checked out.

mod config;
mod registrar;
mod revision;

use anyhow::{Context, Result};
use clap::Parser;
use hello_client::OrchestratorClient;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, IMAGE_ENV_VAR};
use crate::registrar::{deployment_plan, register_all};
use hello_core::domain::flow::HELLO_FLOW_NAME;

#[derive(Parser)]
#[command(name = "hello-deploy")]
#[command(about = "Register the hello-world flow deployments", long_about = None)]
struct Cli {
    /// Orchestration service API URL
    #[arg(
        long,
        env = "PREFECT_API_URL",
        default_value = "http://127.0.0.1:4200/api"
    )]
    orchestrator_url: String,

    /// Container image for the docker deployment (defaults to a revision-tagged image)
    #[arg(long, env = IMAGE_ENV_VAR)]
    image: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hello_deploy=info,hello_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to initialize logging")?;

    let config = Config {
        orchestrator_url: cli.orchestrator_url,
        image_override: cli.image,
    };
    config.validate()?;

    let sha = revision::current_sha().context("Failed to look up the current revision")?;
    let image = config.image_for(&sha);
    info!("Registering deployments for revision {} (image {})", sha, image);

    let client = OrchestratorClient::new(&config.orchestrator_url);
    let registrations = register_all(&client, HELLO_FLOW_NAME, deployment_plan(&sha, &image)).await?;

    for registration in &registrations {
        debug!(
            deployment = %registration.deployment.name,
            id = %registration.deployment.id,
            flow_id = %registration.deployment.flow_id,
            "Registration complete"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::try_parse_from([
            "hello-deploy",
            "--orchestrator-url",
            "https://orchestrator.example.com/api",
            "--image",
            "ghcr.io/acme/hello:pinned",
        ])
        .unwrap();

        assert_eq!(cli.orchestrator_url, "https://orchestrator.example.com/api");
        assert_eq!(cli.image.as_deref(), Some("ghcr.io/acme/hello:pinned"));
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["hello-deploy", "extra"]).is_err());
    }
}
