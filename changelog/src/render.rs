use chrono::Local;
use ordmap::OrderedMap;

use crate::parser::{Section, parse_commit};

/// Entries of one section, grouped by scope in first-seen order. The empty
/// scope collects unscoped entries.
struct ScopeGroups {
    scopes: OrderedMap<String, Vec<String>>,
}

impl ScopeGroups {
    fn new() -> Self {
        Self {
            scopes: OrderedMap::new(),
        }
    }

    /// Adds a message under `scope`. A message already contained in an
    /// existing entry of the same scope is suppressed, which also catches
    /// near-duplicates such as reworded follow-up commits.
    fn add(&mut self, scope: &str, message: &str) {
        if let Some(entries) = self.scopes.get_mut(scope) {
            if entries.iter().any(|existing| existing.contains(message)) {
                return;
            }
            entries.push(message.to_string());
        } else {
            self.scopes.insert(scope.to_string(), vec![message.to_string()]);
        }
    }

    fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

/// Renders commit subjects into a Markdown changelog entry for `tag`.
///
/// Subjects that do not follow the Conventional Commit grammar are skipped,
/// as are types without a section mapping. `skip_types` and `skip_scopes`
/// exclude further commits before they are grouped. The entry is headed by
/// `## [<tag without v>] - <current date>` followed by the non-empty
/// sections in fixed order.
pub fn render_changelog(
    tag: &str,
    commits: &[&str],
    skip_types: &[&str],
    skip_scopes: &[&str],
) -> String {
    let mut buckets = [ScopeGroups::new(), ScopeGroups::new(), ScopeGroups::new()];

    for commit in commits {
        let Some(parsed) = parse_commit(commit) else {
            continue;
        };
        if skip_types.contains(&parsed.kind) {
            continue;
        }

        let scope = parsed.scope.unwrap_or("");
        if skip_scopes.contains(&scope) {
            continue;
        }

        if let Some(section) = Section::for_kind(parsed.kind) {
            buckets[section.index()].add(scope, parsed.message);
        }
    }

    let mut entry = String::with_capacity(1024);
    let date = Local::now().format("%Y-%m-%d");
    let version = tag.strip_prefix('v').unwrap_or(tag);
    entry.push_str(&format!("## [{version}] - {date}\n\n"));

    for section in Section::ORDER {
        let groups = &buckets[section.index()];
        if groups.is_empty() {
            continue;
        }

        entry.push_str(&format!("### {section}\n\n"));

        for (scope, messages) in groups.scopes.iter() {
            if scope.is_empty() {
                for message in messages {
                    entry.push_str(&format!("- {message}\n"));
                }
            } else if messages.len() == 1 {
                entry.push_str(&format!("- **{scope}**: {}\n", messages[0]));
            } else {
                // newest last in, shown first
                entry.push_str(&format!("- **{scope}**:\n"));
                for message in messages.iter().rev() {
                    entry.push_str(&format!("    - {message}\n"));
                }
            }
        }

        entry.push('\n');
    }

    entry
}
