use semver::Version;

use crate::error::{ChangelogError, Result};

/// Computes the next semantic version tag after `tag`.
///
/// With `hotfix` the PATCH component is incremented; otherwise MINOR is
/// incremented and PATCH reset to 0. The `v` prefix is optional on input
/// and always present on the result. Prerelease and build metadata are
/// stripped before bumping, and missing trailing components default to 0.
///
/// # Errors
///
/// Returns an error when a version component is not numeric or the tag has
/// no usable components at all.
pub fn next_version(tag: &str, hotfix: bool) -> Result<String> {
    let trimmed = tag.trim();
    let core = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let (major, mut minor, mut patch) = parse_components(core, trimmed)?;

    if hotfix {
        patch += 1;
    } else {
        minor += 1;
        patch = 0;
    }

    Ok(format!("v{}", Version::new(major, minor, patch)))
}

fn parse_components(core: &str, tag: &str) -> Result<(u64, u64, u64)> {
    // canonical tags go straight through semver
    if let Ok(version) = Version::parse(core) {
        return Ok((version.major, version.minor, version.patch));
    }

    // tolerate tags with missing trailing components, e.g. v1.3
    let base = core.split_once('+').map_or(core, |(left, _)| left);
    let base = base.split_once('-').map_or(base, |(left, _)| left);

    if base.is_empty() {
        return Err(ChangelogError::InvalidVersion(tag.to_string()));
    }

    let mut parts = base.split('.');
    let major = parse_component(parts.next(), "major", tag)?;
    let minor = parse_component(parts.next(), "minor", tag)?;
    let patch = parse_component(parts.next(), "patch", tag)?;

    if parts.next().is_some() {
        return Err(ChangelogError::InvalidVersion(tag.to_string()));
    }

    Ok((major, minor, patch))
}

fn parse_component(part: Option<&str>, component: &'static str, tag: &str) -> Result<u64> {
    match part {
        None => Ok(0),
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|source| ChangelogError::InvalidComponent {
                component,
                tag: tag.to_string(),
                source,
            }),
    }
}
