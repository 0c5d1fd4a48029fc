//! Source revision lookup

use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Errors raised while resolving the checked-out revision
#[derive(Debug, Error)]
pub enum RevisionLookupError {
    /// `git` could not be started
    #[error("Failed to run git: {0}")]
    GitUnavailable(#[from] std::io::Error),

    /// `git` ran but did not resolve HEAD
    #[error("Not a valid git checkout: {0}")]
    NotARepository(String),

    /// `git` succeeded without printing a revision
    #[error("git rev-parse returned an empty revision")]
    Empty,
}

/// Returns the commit SHA of HEAD for the current working tree
pub fn current_sha() -> Result<String, RevisionLookupError> {
    current_sha_in(Path::new("."))
}

/// Returns the commit SHA of HEAD for the checkout at `dir`
pub fn current_sha_in(dir: &Path) -> Result<String, RevisionLookupError> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(dir)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(RevisionLookupError::NotARepository(stderr.trim().to_string()));
    }

    parse_revision(&String::from_utf8_lossy(&output.stdout))
}

fn parse_revision(stdout: &str) -> Result<String, RevisionLookupError> {
    let sha = stdout.trim();
    if sha.is_empty() {
        return Err(RevisionLookupError::Empty);
    }
    Ok(sha.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_revision_trims_newline() {
        let sha = parse_revision("0123456789abcdef0123456789abcdef01234567\n").unwrap();
        assert_eq!(sha, "0123456789abcdef0123456789abcdef01234567");
    }

    #[test]
    fn test_parse_revision_rejects_empty_output() {
        assert!(matches!(parse_revision("  \n"), Err(RevisionLookupError::Empty)));
    }

    #[test]
    fn test_lookup_outside_checkout_fails() {
        // Either git is missing or it reports the directory is not a checkout.
        let dir = tempfile::tempdir().unwrap();
        let result = current_sha_in(dir.path());
        assert!(matches!(
            result,
            Err(RevisionLookupError::NotARepository(_)) | Err(RevisionLookupError::GitUnavailable(_))
        ));
    }
}
