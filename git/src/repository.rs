use std::path::PathBuf;
use std::process::Command;

use crate::error::{GitError, Result, ResultExt};
use git2::Repository as GitRepository;

/// Read access to the version control history a changelog is generated from.
pub trait Repository {
    fn open() -> Result<Self>
    where
        Self: Sized;
    fn current_branch(&self) -> Result<String>;
    fn latest_tag(&self, branch: &str) -> Result<String>;
    fn commits_since(&self, tag: &str) -> Result<Vec<String>>;
}

pub struct RealGitRepository {
    repo: GitRepository,
}

impl RealGitRepository {
    // Commands run at the repository root, not wherever the process started.
    fn workdir(&self) -> PathBuf {
        self.repo
            .workdir()
            .map_or_else(|| PathBuf::from("."), PathBuf::from)
    }
}

impl Repository for RealGitRepository {
    fn open() -> Result<Self> {
        let repo = GitRepository::discover(".").map_err(|e| {
            GitError::RepositoryError(format!("Failed to discover git repository: {}", e))
        })?;
        Ok(Self { repo })
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(GitError::RepositoryError(
                "HEAD is not a branch".to_string(),
            ));
        }

        let branch_name = head
            .shorthand()
            .ok_or_else(|| GitError::RepositoryError("Invalid branch name".to_string()))?
            .to_string();

        Ok(branch_name)
    }

    fn latest_tag(&self, branch: &str) -> Result<String> {
        let branch = if branch.trim().is_empty() {
            "main"
        } else {
            branch
        };

        // Using std::process::Command because git2 doesn't provide a good
        // API for describe on an arbitrary committish
        let output = Command::new("git")
            .current_dir(self.workdir())
            .args(["describe", "--tags", "--abbrev=0", branch])
            .output()
            .context(format!("Failed to run git describe on '{}'", branch))?;

        if !output.status.success() {
            return Err(GitError::TagNotFound(format!(
                "no tag reachable from '{}': {}",
                branch,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if tag.is_empty() {
            return Err(GitError::TagNotFound(format!(
                "no tag reachable from '{}'",
                branch
            )));
        }

        Ok(tag)
    }

    fn commits_since(&self, tag: &str) -> Result<Vec<String>> {
        let output = Command::new("git")
            .current_dir(self.workdir())
            .args([
                "log",
                &format!("{}..HEAD", tag),
                "--oneline",
                "--no-decorate",
                "--format=%s",
            ])
            .output()
            .with_context(|| format!("Failed to list commits since '{}'", tag))?;

        if !output.status.success() {
            return Err(GitError::CommandError(
                String::from_utf8_lossy(&output.stderr).to_string(),
            ));
        }

        // no commits since the tag produces empty output, not an error
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim().lines().map(str::to_string).collect())
    }
}
