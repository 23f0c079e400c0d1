use std::process::ExitCode;

use clap::Parser;
use log::debug;

use blast_cli::cli_args::{Action, Args};
use blast_cli::commands::{self, SaveOutcome, UseOutcome};
use blast_cli::selection::{self, PickerOutcome};
use blast_core::config;
use blast_core::error::Result;
use blast_core::handoff;
use blast_core::store::{FileStore, Store};

/// Exit status of a process interrupted by SIGINT
const INTERRUPTED: u8 = 130;

fn execute(args: Args) -> Result<ExitCode> {
    let bookmarks_path = config::get_bookmarks_path(&args.bookmarks_path);
    let command_path = config::get_command_path(&args.command_path);
    let completions_path = config::get_completions_path(&args.completions_path);
    debug!("Bookmarks path: `{bookmarks_path}`, command path: `{command_path}`");

    // Make sure no command is run unintentionally
    handoff::clear_command(&command_path)?;

    let mut store = FileStore::new(bookmarks_path, completions_path);

    match args.action {
        None => match selection::run_picker(store)? {
            PickerOutcome::Committed(entry) => {
                println!("Running command {}: {}", entry.name, entry.command);
                handoff::write_command(&command_path, &entry.command)?;
            }
            PickerOutcome::Interrupted => {
                println!("Exiting..");
                return Ok(ExitCode::from(INTERRUPTED));
            }
        },
        Some(Action::Save { name, command, yes }) => {
            let command = command.join(" ");
            let outcome = commands::save_bookmark(&mut store, &name, &command, |_| {
                if yes {
                    return Ok(true);
                }
                selection::confirm("A bookmark with this name already exists. Replace?")
            })?;

            match outcome {
                SaveOutcome::Aborted => {
                    println!("Aborted");
                    return Ok(ExitCode::FAILURE);
                }
                SaveOutcome::Saved | SaveOutcome::Replaced { .. } => {
                    println!("Bookmarked command as {name}:\n{command}");
                }
            }
        }
        Some(Action::Delete { name }) => {
            commands::delete_bookmark(&mut store, &name)?;
            println!("Deleted bookmark: {name}");
        }
        Some(Action::Show { pattern }) => {
            let bookmarks = store.load().bookmarks;
            let found = commands::find_bookmarks(&bookmarks, &pattern);

            if found.is_empty() {
                println!("No bookmarks found matching: {pattern}");
            }
            for entry in found {
                println!("\n    Bookmark {}:\n    {}", entry.name, entry.command);
            }
        }
        Some(Action::Use { name, yes }) => {
            let outcome = commands::use_bookmark(&store, &name, &command_path, |entry| {
                println!("{}", entry.command);
                if yes {
                    return Ok(true);
                }
                selection::confirm("Run this command?")
            })?;

            match outcome {
                UseOutcome::HandedOff(entry) => println!("Running command {}...", entry.name),
                UseOutcome::Declined(_) => {
                    println!("Aborted");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute(Args::parse()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
