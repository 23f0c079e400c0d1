//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Without a subcommand the interactive picker starts.

use clap::{Parser, Subcommand};

/// Command-line arguments for the blast CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use blast_cli::cli_args::Args;
///
/// let args = Args::parse_from(["blast", "use", "deploy"]);
/// assert!(args.action.is_some());
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "blast", about = "Bookmark shell commands and pick them back by name")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the bookmarks and settings YAML file.
    ///
    /// If not provided, defaults to `~/.config/blast/bookmarks.yml`.
    #[arg(long, short = 'b', global = true)]
    pub bookmarks_path: Option<String>,

    /// Path of the file the shell wrapper executes after blast exits.
    ///
    /// If not provided, defaults to `~/.config/blast/command.sh`.
    #[arg(long, global = true)]
    pub command_path: Option<String>,

    /// Path of the shell-completion word list regenerated on every save.
    ///
    /// If not provided, defaults to `~/.config/blast/completions`.
    #[arg(long, global = true)]
    pub completions_path: Option<String>,

    /// Action to run. Without one the interactive picker starts.
    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Action {
    /// Bookmark a command under a name.
    Save {
        /// Name of the bookmark.
        name: String,

        /// The command to bookmark. Multiple words are joined by spaces.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,

        /// Replace an existing bookmark without asking.
        #[arg(long, short = 'y', action)]
        yes: bool,
    },

    /// Delete the bookmark with this name.
    Delete {
        /// Name of the bookmark.
        name: String,
    },

    /// List bookmarks whose name contains the given text.
    Show {
        /// Text to look for, case-insensitively.
        pattern: String,
    },

    /// Hand the named bookmark's command to the shell.
    Use {
        /// Name of the bookmark.
        name: String,

        /// Skip the confirmation even when `confirm command line` is on.
        #[arg(long, short = 'y', action)]
        yes: bool,
    },
}
