//! Configuration module
//!
//! Registrar settings and image resolution.

/// Image repository used when no override is supplied
pub const DEFAULT_IMAGE_PREFIX: &str = "ghcr.io/your-org/hello-world";

/// Environment variable overriding the container image reference
pub const IMAGE_ENV_VAR: &str = "PIPELINE_IMAGE";

/// Registrar configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the orchestration service API
    pub orchestrator_url: String,

    /// Image reference to use instead of the revision-derived default
    pub image_override: Option<String>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.orchestrator_url.is_empty() {
            anyhow::bail!("orchestrator_url cannot be empty");
        }

        if !self.orchestrator_url.starts_with("http://")
            && !self.orchestrator_url.starts_with("https://")
        {
            anyhow::bail!("orchestrator_url must start with http:// or https://");
        }

        Ok(())
    }

    /// Image reference for a checkout at `sha`
    pub fn image_for(&self, sha: &str) -> String {
        resolve_image(self.image_override.as_deref(), sha)
    }
}

/// Returns `image_override` verbatim when set, else the default image tagged with `sha`
pub fn resolve_image(image_override: Option<&str>, sha: &str) -> String {
    match image_override {
        Some(image) => image.to_string(),
        None => format!("{}:{}", DEFAULT_IMAGE_PREFIX, sha),
    }
}
