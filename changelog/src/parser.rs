use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static CONVENTIONAL_COMMIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(feat|fix|hotfix|docs|style|refactor|perf|test|build|ci|chore|revert)(\([a-zA-Z0-9_-]+\))?: (.*)$",
    )
    .expect("Failed to compile conventional commit regex")
});

/// A commit subject that matched the Conventional Commit grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalCommit<'a> {
    pub kind: &'a str,
    pub scope: Option<&'a str>,
    pub message: &'a str,
}

/// Matches `line` against the Conventional Commit grammar
/// `type(scope)?: message`, returning `None` for subjects that do not
/// follow it.
pub fn parse_commit(line: &str) -> Option<ConventionalCommit<'_>> {
    let captures = CONVENTIONAL_COMMIT_PATTERN.captures(line)?;

    let kind = captures.get(1)?.as_str();
    let scope = captures
        .get(2)
        .map(|m| m.as_str().trim_start_matches('(').trim_end_matches(')'));
    let message = captures.get(3)?.as_str().trim();

    Some(ConventionalCommit {
        kind,
        scope,
        message,
    })
}

/// A changelog section, in the fixed order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Added,
    Changed,
    Fixed,
}

impl Section {
    /// Render order of the sections.
    pub const ORDER: [Self; 3] = [Self::Added, Self::Changed, Self::Fixed];

    /// Maps a Conventional Commit type to the section it belongs to.
    /// Types without a section (test, ci, chore, revert) are dropped.
    pub fn for_kind(kind: &str) -> Option<Self> {
        match kind {
            "feat" => Some(Self::Added),
            "fix" | "hotfix" => Some(Self::Fixed),
            "docs" | "style" | "refactor" | "perf" | "build" => Some(Self::Changed),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Added => 0,
            Self::Changed => 1,
            Self::Fixed => 2,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_type_and_message() {
        let commit = parse_commit("feat: add the thing").unwrap();
        assert_eq!(commit.kind, "feat");
        assert_eq!(commit.scope, None);
        assert_eq!(commit.message, "add the thing");
    }

    #[test]
    fn parses_scope() {
        let commit = parse_commit("fix(api): handle empty payloads").unwrap();
        assert_eq!(commit.kind, "fix");
        assert_eq!(commit.scope, Some("api"));
        assert_eq!(commit.message, "handle empty payloads");
    }

    #[test]
    fn message_is_trimmed() {
        let commit = parse_commit("docs:    update readme  ").unwrap();
        assert_eq!(commit.message, "update readme");
    }

    #[test]
    fn rejects_unknown_types_and_plain_subjects() {
        assert!(parse_commit("wip: not a known type").is_none());
        assert!(parse_commit("Merge branch 'main'").is_none());
        assert!(parse_commit("feat add missing colon").is_none());
    }

    #[test]
    fn kind_to_section_mapping() {
        assert_eq!(Section::for_kind("feat"), Some(Section::Added));
        assert_eq!(Section::for_kind("fix"), Some(Section::Fixed));
        assert_eq!(Section::for_kind("hotfix"), Some(Section::Fixed));
        assert_eq!(Section::for_kind("refactor"), Some(Section::Changed));
        assert_eq!(Section::for_kind("chore"), None);
        assert_eq!(Section::for_kind("ci"), None);
    }
}
