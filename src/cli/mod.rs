//! Text front-end: command line parsing, the interactive shell and plain
//! text rendering of the state.

mod render;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use render::{render_breed_detail, render_home, render_tabs};
pub use shell::{Flow, Shell, ShellCommand, ShellError, HELP};

#[derive(Debug, Parser)]
#[command(name = "doggodex", version, about = "Browse dog breeds and keep track of the ones you love")]
pub struct Cli {
    /// Path to a config file (defaults to the platform config dir).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print one catalog page.
    Browse {
        /// Page number, starting at 1.
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Search breeds by name.
    Search {
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Show a single breed.
    Show { id: String },
    /// Interactive shell (the default).
    Shell,
}

impl Cli {
    /// The subcommand to run, falling back to the shell.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_runs_shell() {
        let cli = Cli::try_parse_from(["doggodex"]).unwrap();
        assert_eq!(cli.command(), Command::Shell);
        assert!(cli.config.is_none());
    }

    #[test]
    fn browse_defaults_to_first_page() {
        let cli = Cli::try_parse_from(["doggodex", "browse"]).unwrap();
        assert_eq!(cli.command(), Command::Browse { page: 1 });
    }

    #[test]
    fn search_joins_words() {
        let cli = Cli::try_parse_from(["doggodex", "search", "golden", "retriever"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Search {
                query: vec!["golden".to_string(), "retriever".to_string()]
            }
        );
    }

    #[test]
    fn global_config_flag() {
        let cli =
            Cli::try_parse_from(["doggodex", "show", "6", "--config", "/tmp/dd.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/dd.toml")));
        assert_eq!(cli.command(), Command::Show { id: "6".to_string() });
    }
}
