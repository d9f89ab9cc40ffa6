//! Command dispatch for the top-level subcommands

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{load_demo_data, run_walkthrough, InventoryService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::shell::run_shell;
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings};
use crate::domain::TreeNodeConvert;
use crate::infrastructure::{InfraError, ServiceContainer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Shell) => _shell(cli),
        Some(Commands::Demo) => _demo(),
        Some(Commands::Walkthrough) => _walkthrough(),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Cli::command()
            .print_help()
            .map_err(|e| InfraError::io("print help", e).into()),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    Ok(Settings::load(cli.config.as_deref())?)
}

#[instrument(skip(cli))]
fn _shell(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    debug!("settings: {:?}", settings);
    let mut container = ServiceContainer::bootstrap(settings)?;
    output::header("flightroster shell (type 'help' for commands, 'exit' to leave)");
    run_shell(&mut container, io::stdin().lock())
}

#[instrument]
fn _demo() -> CliResult<()> {
    let mut inventory = InventoryService::new();
    load_demo_data(&mut inventory)?;

    output::header("Flights");
    output::info(&inventory.render_graph());

    for shared in inventory.flights() {
        let flight = shared.flight();
        output::info("");
        output::header(flight.route());
        output::info(&flight.details());
        output::info("Crew tree:");
        output::info(&flight.crew().to_tree_string());
    }
    Ok(())
}

#[instrument]
fn _walkthrough() -> CliResult<()> {
    for step in run_walkthrough()? {
        output::header(&format!("=== Step {}: {} ===", step.number, step.title));
        output::detail(step.description);
        for line in &step.output {
            output::info(line);
        }
        output::info("");
    }
    output::success("Walkthrough completed");
    Ok(())
}

#[instrument(skip(cli))]
fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match cli.config.clone().or_else(global_config_path) {
            Some(path) if path.exists() => output::info(&path.display()),
            Some(path) => output::action("not found", &path.display()),
            None => output::warning("no config directory available on this platform"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
