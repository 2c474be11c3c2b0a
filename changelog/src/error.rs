use thiserror::Error;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Errors that can occur when generating a changelog
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("invalid semantic version: '{0}'")]
    InvalidVersion(String),

    #[error("invalid {component} component in '{tag}': {source}")]
    InvalidComponent {
        component: &'static str,
        tag: String,
        source: std::num::ParseIntError,
    },
}

impl ChangelogError {
    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidVersion(tag) => format!("Invalid semantic version: '{tag}'"),
            Self::InvalidComponent { component, tag, .. } => {
                format!("Invalid {component} component in version tag '{tag}'")
            }
        }
    }
}
