mod changelog;
mod cli;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Changelog {
            hotfix,
            tag_only,
            skip_types,
            skip_scopes,
            tag_branch,
        } => changelog::execute(hotfix, tag_only, &skip_types, &skip_scopes, &tag_branch),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
