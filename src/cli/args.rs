//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::{Cost, Price, Route};

/// In-memory flight inventory: priced route graph with AVL-balanced crew rosters
#[derive(Parser, Debug)]
#[command(name = "flightroster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (default: $XDG_CONFIG_HOME/flightroster/flightroster.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session on stdin
    Shell,

    /// Load demo flights and show graph, details and crew trees
    Demo,

    /// Run the scripted walkthrough
    Walkthrough,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,

    /// Print config template
    Template,
}

/// One line of input in the interactive shell.
#[derive(Parser, Debug)]
#[command(name = "shell", no_binary_name = true)]
#[command(help_template = "{all-args}")]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommands,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommands {
    /// Manage flights
    Flight {
        #[command(subcommand)]
        command: FlightCommands,
    },

    /// Manage crew rosters
    Crew {
        #[command(subcommand)]
        command: CrewCommands,
    },

    /// Manage priced connections between flights
    Route {
        #[command(subcommand)]
        command: RouteCommands,
    },

    /// Print the flight graph
    Graph,

    /// Load the demo data set
    Demo,

    /// Run the scripted walkthrough (separate inventory)
    Walkthrough,

    /// Remove all flights
    Clear,

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

#[derive(Subcommand, Debug)]
pub enum FlightCommands {
    /// Register a flight
    Add {
        /// Route as ORIGIN->DESTINATION
        route: Route,
        /// Base ticket price
        price: Price,
        /// Seat capacity (default: settings.default_capacity)
        capacity: Option<u32>,
    },

    /// List all flights with their connections
    List,

    /// Show price, occupancy and crew of a flight
    Show {
        /// Route as ORIGIN->DESTINATION
        route: Route,
    },
}

#[derive(Subcommand, Debug)]
pub enum CrewCommands {
    /// Seat a crew member
    Add {
        /// Route as ORIGIN->DESTINATION
        route: Route,
        /// Crew member name
        name: String,
        /// Seat number
        #[arg(allow_negative_numbers = true)]
        seat: i64,
    },

    /// List crew in seat order
    List {
        /// Route as ORIGIN->DESTINATION
        route: Route,
    },

    /// Print the crew tree
    Tree {
        /// Route as ORIGIN->DESTINATION
        route: Route,
    },
}

#[derive(Subcommand, Debug)]
pub enum RouteCommands {
    /// Connect two flights (overwrites an existing cost)
    Add {
        /// Source flight as ORIGIN->DESTINATION
        from: Route,
        /// Target flight as ORIGIN->DESTINATION
        to: Route,
        /// Connection cost
        cost: Cost,
    },

    /// Show the cost of a connection
    Cost {
        /// Source flight as ORIGIN->DESTINATION
        from: Route,
        /// Target flight as ORIGIN->DESTINATION
        to: Route,
    },

    /// List outgoing connections of a flight
    Neighbors {
        /// Source flight as ORIGIN->DESTINATION
        from: Route,
    },
}
