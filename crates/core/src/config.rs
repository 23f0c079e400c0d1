//! Path configuration and layout constants for blast.
//!
//! This module resolves the locations of the bookmarks file, the command
//! hand-off file and the shell-completion word list, expanding `~` in
//! user-supplied paths.

/// Default path for the bookmarks and settings file
const DEFAULT_BOOKMARKS_PATH: &str = "~/.config/blast/bookmarks.yml";
/// Default path of the file the shell wrapper executes after the picker exits
const DEFAULT_COMMAND_PATH: &str = "~/.config/blast/command.sh";
/// Default path of the shell-completion word list
const DEFAULT_COMPLETIONS_PATH: &str = "~/.config/blast/completions";

/// Narrowest the name column of the bookmark table may be
pub const MIN_NAME_WIDTH: usize = 25;
/// Widest the command column may be unless fit-to-width is on
pub const MAX_COMMAND_WIDTH: usize = 80;

fn resolve(path_arg: &Option<String>, default: &str) -> String {
    let path = match path_arg {
        Some(path) => path,
        None => default,
    };

    shellexpand::tilde(path).to_string()
}

/// Resolves the bookmarks file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// bookmarks path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use blast_core::config::get_bookmarks_path;
///
/// let custom_path = get_bookmarks_path(&Some("/path/to/bookmarks.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/bookmarks.yml");
/// ```
pub fn get_bookmarks_path(bookmarks_path_arg: &Option<String>) -> String {
    resolve(bookmarks_path_arg, DEFAULT_BOOKMARKS_PATH)
}

/// Resolves the command hand-off file path.
pub fn get_command_path(command_path_arg: &Option<String>) -> String {
    resolve(command_path_arg, DEFAULT_COMMAND_PATH)
}

/// Resolves the completion word list path.
pub fn get_completions_path(completions_path_arg: &Option<String>) -> String {
    resolve(completions_path_arg, DEFAULT_COMPLETIONS_PATH)
}
