//! Shortlist CLI application entry point
//!
//! This is the main executable for the shortlist tool. It provides a
//! command-line interface for browsing a roster of names, searching it,
//! and moving names onto a shortlist.
//!
//! # Usage
//!
//! ```bash
//! # Browse the roster interactively (default command)
//! shortlist
//! shortlist browse
//!
//! # Start browsing with a query and two names already shortlisted
//! shortlist browse rose -a "Jack Ryan" -a "Isla Faith"
//!
//! # Print the partition without the browser
//! shortlist show
//! shortlist show ja -a "Ruby Mae"
//! shortlist show --json
//!
//! # List the active roster
//! shortlist names
//!
//! # Use a custom roster for one invocation
//! shortlist --roster team.txt
//!
//! # Quiet mode (only output results)
//! shortlist -q show
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/shortlist/config.toml` on Linux). `roster_file` points at a
//! plain-text roster (one name per line); when unset the built-in roster
//! is used.

use colored::Colorize;
use shortlist::{
    ShortlistError,
    cli::{Cli, Commands, ConfigCommands},
    config::ShortlistConfig,
    output,
    roster::{self, Person, RosterEngine},
    ui::{BrowseController, TuiFrontend},
};
use std::path::PathBuf;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, ShortlistError>;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ShortlistConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    match cli.get_command() {
        Commands::Browse { query, add } => {
            let roster = resolve_roster(cli.roster.as_ref(), &config)?;
            cmd_browse(roster, query, &add, quiet)
        }
        Commands::Show { query, add, json } => {
            let roster = resolve_roster(cli.roster.as_ref(), &config)?;
            cmd_show(roster, query, &add, json, quiet)
        }
        Commands::Names => {
            let roster = resolve_roster(cli.roster.as_ref(), &config)?;
            cmd_names(&roster, quiet)
        }
        Commands::Config { command } => cmd_config(config, &command, quiet),
    }
}

/// Pick the roster source: `--roster` flag, then config, then the built-in list
fn resolve_roster(flag: Option<&PathBuf>, config: &ShortlistConfig) -> Result<Vec<Person>> {
    if let Some(path) = flag {
        return Ok(roster::load_roster(path)?);
    }
    if let Some(path) = &config.roster_file {
        return Ok(roster::load_roster(path)?);
    }
    Ok(roster::default_roster())
}

/// Build an engine with pre-added names and an initial query applied
fn seed_engine(roster: Vec<Person>, query: Option<String>, add: &[String]) -> Result<RosterEngine> {
    let mut engine = RosterEngine::new(roster);

    for name in add {
        engine.add(name)?;
    }
    if let Some(text) = query {
        engine.set_query(text);
    }

    Ok(engine)
}

fn cmd_browse(
    roster: Vec<Person>,
    query: Option<String>,
    add: &[String],
    quiet: bool,
) -> Result<()> {
    let engine = seed_engine(roster, query, add)?;
    let controller = BrowseController::new(engine, TuiFrontend::new());

    match controller.run()? {
        Some(outcome) => {
            if !quiet {
                println!(
                    "{}",
                    format!("Shortlisted {} name(s):", outcome.added.len()).bold()
                );
            }
            for person in &outcome.added {
                println!("{}", output::added_entry(person, quiet));
            }
        }
        None => {
            if !quiet {
                eprintln!("Browse cancelled");
            }
        }
    }

    Ok(())
}

fn cmd_show(
    roster: Vec<Person>,
    query: Option<String>,
    add: &[String],
    json: bool,
    quiet: bool,
) -> Result<()> {
    let engine = seed_engine(roster, query, add)?;
    let sections = engine.sections();

    if json {
        println!("{}", output::sections_to_json(&sections)?);
    } else {
        output::print_sections(&sections, quiet);
    }

    Ok(())
}

fn cmd_names(roster: &[Person], quiet: bool) -> Result<()> {
    if !quiet {
        println!("{}", format!("Roster ({} names):", roster.len()).bold());
    }
    for person in roster {
        println!("{}", output::available_entry(person, quiet));
    }

    Ok(())
}

fn cmd_config(mut config: ShortlistConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                ShortlistError::InvalidInput(format!(
                    "Expected KEY=VALUE, got '{setting}'"
                ))
            })?;

            config.apply(key, value)?;
            config.save()?;

            if !quiet {
                println!("Set {key} = {value}");
            }
            Ok(())
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key).ok_or_else(|| {
                ShortlistError::InvalidInput(format!("Unknown configuration key '{key}'"))
            })?;

            println!("{value}");
            Ok(())
        }
    }
}
