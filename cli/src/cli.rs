use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xkit")]
#[command(author, version, about = "Release chores toolbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Markdown changelog from Conventional Commits since the latest tag
    Changelog {
        /// Calculate the next PATCH version instead of MINOR
        #[clap(long, default_value_t = false)]
        hotfix: bool,

        /// Only show the next tag instead of the full changelog
        #[clap(long, default_value_t = false)]
        tag_only: bool,

        /// Comma-separated list of commit types (feat, fix, etc.) to skip
        #[clap(long, value_delimiter = ',')]
        skip_types: Vec<String>,

        /// Comma-separated list of scopes to skip
        #[clap(long, value_delimiter = ',')]
        skip_scopes: Vec<String>,

        /// Branch to search for the latest tag
        #[clap(long, default_value = "main")]
        tag_branch: String,
    },
}
