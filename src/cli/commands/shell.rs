//! Shell command implementation
//!
//! This module implements the `shell` command: the interactive menu for
//! loading, adding, removing and listing patrons.

use crate::config::RegistryConfig;
use crate::core::events::ConsoleSink;
use crate::core::registry::PatronRegistry;
use crate::core::validation::{check_fine_range, MAX_OVERDUE_FINE};
use crate::domain::patron::is_valid_name;
use clap::Args;
use std::io::{self, BufRead, Write};

/// Arguments for the shell command
#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Do not auto-load the configured patron file on startup
    #[arg(long)]
    pub no_auto_load: bool,
}

impl ShellArgs {
    /// Execute the shell command
    pub fn execute(&self, config: &RegistryConfig) -> anyhow::Result<i32> {
        let mut config = config.clone();
        if self.no_auto_load {
            config.registry.auto_load_path = None;
        }
        tracing::info!(
            auto_load_path = ?config.registry.auto_load_path,
            "Starting interactive shell"
        );

        let mut registry = PatronRegistry::from_config(&config, ConsoleSink::stdout());
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_shell(&mut registry, stdin.lock(), stdout.lock())?;
        Ok(0)
    }
}

/// Menu entries, in display order
const MENU_OPTIONS: [&str; 5] = [
    "Load Patrons by Entering File Path",
    "Manually Add Patrons to the Library",
    "Remove Patron by ID",
    "Display Patrons",
    "Exit",
];

/// Runs the menu loop until the user exits or input ends
///
/// Registry events go to the registry's own sink; prompts, validation
/// messages and patron listings go to `out`.
pub fn run_shell<R: BufRead, W: Write>(
    registry: &mut PatronRegistry,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "Library Management System")?;
        for (index, option) in MENU_OPTIONS.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, option)?;
        }

        let Some(choice) = read_choice(&mut input, &mut out)? else {
            return Ok(());
        };

        let finished = match choice {
            1 => load_from_path(registry, &mut input, &mut out)?,
            2 => add_patron(registry, &mut input, &mut out)?,
            3 => remove_patron(registry, &mut input, &mut out)?,
            4 => {
                display_patrons(registry, &mut out)?;
                false
            }
            _ => {
                writeln!(out, "Now exiting the Library Management System.")?;
                return Ok(());
            }
        };

        if finished {
            return Ok(());
        }
    }
}

/// Prompts until a valid menu number is entered; `None` on end of input
fn read_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<usize>> {
    loop {
        let Some(line) = prompt(input, out, "Choose an option: ")? else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=MENU_OPTIONS.len()).contains(&choice) => return Ok(Some(choice)),
            Ok(_) => writeln!(
                out,
                "Error: Please enter a number between 1 and {}.",
                MENU_OPTIONS.len()
            )?,
            Err(_) => writeln!(out, "Error: Please enter a valid number.")?,
        }
    }
}

/// Writes a prompt and reads one line without its line ending
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Prompts until the answer is a purely alphabetic name
fn prompt_name<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
    label: &str,
) -> io::Result<Option<String>> {
    loop {
        let Some(name) = prompt(input, out, text)? else {
            return Ok(None);
        };
        if is_valid_name(&name) {
            return Ok(Some(name));
        }
        writeln!(out, "Error: {label} can only contain alphabetic characters.")?;
    }
}

/// Prompts until the answer is a fine within range
fn prompt_fine<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<f64>> {
    loop {
        let Some(text) = prompt(input, out, "Enter an Overdue Fine: ")? else {
            return Ok(None);
        };
        match text.trim().parse::<f64>() {
            Ok(fine) if check_fine_range(fine) => return Ok(Some(fine)),
            Ok(_) => writeln!(
                out,
                "Error: Overdue fine must be between $0 and ${MAX_OVERDUE_FINE}."
            )?,
            Err(_) => writeln!(out, "Error: Please enter a valid number.")?,
        }
    }
}

fn load_from_path<R: BufRead, W: Write>(
    registry: &mut PatronRegistry,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let Some(path) = prompt(input, out, "Enter the file path to load patrons: ")? else {
        return Ok(true);
    };
    // Failures are already reported through the registry's sink
    if let Err(e) = registry.add_patrons_from_file(path.trim()) {
        tracing::debug!(error = %e, "Load from shell failed");
    }
    Ok(false)
}

fn add_patron<R: BufRead, W: Write>(
    registry: &mut PatronRegistry,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let Some(first_name) = prompt_name(input, out, "Enter a Patron First Name: ", "First name")?
    else {
        return Ok(true);
    };
    let Some(last_name) = prompt_name(input, out, "Enter a Patron Last Name: ", "Last name")?
    else {
        return Ok(true);
    };
    let Some(address) = prompt(input, out, "Enter a Patron Address: ")? else {
        return Ok(true);
    };
    let Some(fine) = prompt_fine(input, out)? else {
        return Ok(true);
    };

    if let Err(e) = registry.add_new_patron(&first_name, &last_name, &address, fine) {
        writeln!(out, "Error: {e}")?;
    }
    Ok(false)
}

fn remove_patron<R: BufRead, W: Write>(
    registry: &mut PatronRegistry,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let Some(id) = prompt(input, out, "Please enter a Patron ID to remove patron: ")? else {
        return Ok(true);
    };
    registry.remove_patron(id.trim());
    Ok(false)
}

fn display_patrons<W: Write>(registry: &PatronRegistry, out: &mut W) -> io::Result<()> {
    writeln!(out, "List of current Patrons:")?;
    for patron in registry.patrons() {
        writeln!(out, "{patron}")?;
    }
    Ok(())
}
