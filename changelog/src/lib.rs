//! Changelog generation from Conventional Commit messages.
//!
//! Commit subjects are matched against the Conventional Commit grammar
//! (`type(scope)?: message`), grouped into the Keep-a-Changelog sections
//! Added/Changed/Fixed, and rendered as a Markdown entry headed by the next
//! version and the current date. [`next_version`] implements the
//! accompanying semantic-version arithmetic.

mod error;
mod parser;
mod render;
mod version;

pub use error::{ChangelogError, Result};
pub use parser::{ConventionalCommit, Section, parse_commit};
pub use render::render_changelog;
pub use version::next_version;
