//! Deployment registrar
//!
//! Builds the hello-world deployment definitions for a revision and publishes
//! them, one after the other, to the orchestration service.

use anyhow::{Context, Result};
use colored::*;
use hello_client::DeploymentRegistry;
use hello_core::domain::deployment::{
    Deployment, DeploymentDescriptor, GitRepository, IMAGE_JOB_VARIABLE,
};
use hello_core::domain::flow::HELLO_FLOW_NAME;
use hello_core::dto::deployment::CreateDeployment;
use tracing::{debug, info, warn};

/// Repository workers check the flow out from
pub const REPO_URL: &str = "https://github.com/NeuroGranberg/hello_world_pipeline.git";

/// Flow the deployments launch
pub const ENTRYPOINT: &str = "hello-flow/src/flow.rs:hello_flow";

pub const DOCKER_DEPLOYMENT: &str = "hello:docker-cpu";
pub const DOCKER_POOL: &str = "docker-cpu-pool";
pub const LOCAL_DEPLOYMENT: &str = "hello:local-cpu";
pub const LOCAL_POOL: &str = "local-cpu-pool";

/// The deployments to publish for a checkout at `sha`, in registration order
///
/// The container deployment carries the image as a job variable; the local
/// one runs on the worker host and takes none.
pub fn deployment_plan(sha: &str, image: &str) -> Vec<DeploymentDescriptor> {
    let source = GitRepository::new(REPO_URL, sha);

    vec![
        DeploymentDescriptor::new(DOCKER_DEPLOYMENT, DOCKER_POOL, source.clone(), ENTRYPOINT)
            .with_job_variable(IMAGE_JOB_VARIABLE, image),
        DeploymentDescriptor::new(LOCAL_DEPLOYMENT, LOCAL_POOL, source, ENTRYPOINT),
    ]
}

/// A descriptor together with the record the service stored for it
#[derive(Debug, Clone)]
pub struct Registration {
    pub descriptor: DeploymentDescriptor,
    pub deployment: Deployment,
}

impl Registration {
    /// One-line confirmation for this registration
    pub fn confirmation(&self) -> String {
        let descriptor = &self.descriptor;
        match descriptor.image() {
            Some(image) => format!(
                "Registered deployment {} (pool={}, image={}, sha={})",
                descriptor.name, descriptor.work_pool_name, image, descriptor.source.commit_sha
            ),
            None => format!(
                "Registered deployment {} (pool={}, sha={})",
                descriptor.name, descriptor.work_pool_name, descriptor.source.commit_sha
            ),
        }
    }
}

/// Publishes every descriptor in `plan`, stopping at the first failure
pub async fn register_all<R>(
    registry: &R,
    flow_name: &str,
    plan: Vec<DeploymentDescriptor>,
) -> Result<Vec<Registration>>
where
    R: DeploymentRegistry + ?Sized,
{
    let flow = registry
        .ensure_flow(flow_name)
        .await
        .with_context(|| format!("Failed to resolve flow '{}'", flow_name))?;
    debug!(flow = %flow.name, flow_id = %flow.id, "Resolved flow");

    let mut registrations = Vec::with_capacity(plan.len());

    for descriptor in plan {
        check_work_pool(registry, &descriptor.work_pool_name).await?;

        let req = CreateDeployment::from_descriptor(&descriptor, flow.id);
        let deployment = registry
            .register_deployment(req)
            .await
            .with_context(|| format!("Failed to register deployment {}", descriptor.name))?;
        info!(deployment = %deployment.name, id = %deployment.id, "Deployment stored");

        let registration = Registration {
            descriptor,
            deployment,
        };
        println!("{} {}", "✓".green().bold(), registration.confirmation());
        registrations.push(registration);
    }

    Ok(registrations)
}

/// Warns about pools that are missing or paused
///
/// The service accepts deployments for pools that do not exist yet, so only
/// a failing lookup aborts the registration.
async fn check_work_pool<R>(registry: &R, pool_name: &str) -> Result<()>
where
    R: DeploymentRegistry + ?Sized,
{
    match registry.find_work_pool(pool_name).await {
        Ok(pool) if pool.is_paused => {
            warn!("Work pool '{}' is paused; runs will wait until it resumes", pool.name);
        }
        Ok(pool) => debug!(pool = %pool.name, pool_type = %pool.pool_type, "Work pool found"),
        Err(e) if e.is_not_found() => {
            warn!(
                "Work pool '{}' does not exist; runs will not start until it is created",
                pool_name
            );
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to look up work pool '{}'", pool_name));
        }
    }

    Ok(())
}
