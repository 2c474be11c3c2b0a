use crate::error::{CliError, Result};
use git::repository::{RealGitRepository, Repository};

pub fn execute(
    hotfix: bool,
    tag_only: bool,
    skip_types: &[String],
    skip_scopes: &[String],
    tag_branch: &str,
) -> Result<()> {
    let repo = RealGitRepository::open()
        .map_err(|e| CliError::Git(e).with_context("Failed to open git repository"))?;

    let latest_tag = repo.latest_tag(tag_branch).map_err(|e| {
        CliError::Git(e).with_context(format!("Failed to find the latest tag on '{tag_branch}'"))
    })?;

    let next_tag = changelog::next_version(&latest_tag, hotfix)?;

    if tag_only {
        println!("{next_tag}");
        return Ok(());
    }

    let commits = repo.commits_since(&latest_tag).map_err(|e| {
        CliError::Git(e).with_context(format!("Failed to collect commits since '{latest_tag}'"))
    })?;

    if commits.is_empty() {
        println!("No changes detected.");
        return Ok(());
    }

    let commits: Vec<&str> = commits.iter().map(String::as_str).collect();
    let skip_types: Vec<&str> = skip_types.iter().map(String::as_str).collect();
    let skip_scopes: Vec<&str> = skip_scopes.iter().map(String::as_str).collect();

    print!(
        "{}",
        changelog::render_changelog(&next_tag, &commits, &skip_types, &skip_scopes)
    );

    Ok(())
}
