//! Line-oriented interactive shell
//!
//! Each input line is split into words (single and double quotes group
//! words, backslash escapes the next character) and parsed with clap.

use std::io::BufRead;

use clap::error::ErrorKind;
use clap::Parser;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::services::{load_demo_data, run_walkthrough, CrewAssignment, WalkthroughStep};
use crate::cli::args::{CrewCommands, FlightCommands, RouteCommands, ShellCommands, ShellLine};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::infrastructure::{InfraError, ServiceContainer};

/// Result of executing one shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Text to show; empty for blank lines.
    Continue(String),
    /// A crew member could not be seated; the message explains why.
    Rejected(String),
    Exit,
}

/// Split a line into words.
pub fn tokenize(line: &str) -> CliResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, '\\') => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| CliError::InvalidArgs("trailing backslash".into()))?;
                current.push(escaped);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(CliError::InvalidArgs(format!("unterminated quote {}", q)));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Render walkthrough steps as plain text.
pub fn format_walkthrough(steps: &[WalkthroughStep]) -> String {
    steps
        .iter()
        .map(|step| {
            format!(
                "=== Step {}: {} ===\n{}\n\n{}",
                step.number,
                step.title,
                step.description,
                step.output.join("\n")
            )
        })
        .join("\n\n")
}

/// Parse and execute one line against the container's inventory.
#[instrument(level = "debug", skip(container))]
pub fn execute_line(container: &mut ServiceContainer, line: &str) -> CliResult<ShellOutcome> {
    let words = tokenize(line)?;
    if words.is_empty() {
        return Ok(ShellOutcome::Continue(String::new()));
    }

    let parsed = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            return Ok(ShellOutcome::Continue(e.render().to_string()));
        }
        Err(e) => return Err(CliError::Usage(e.render().to_string().trim_end().to_string())),
    };
    debug!("shell command: {:?}", parsed.command);

    let inventory = &mut container.inventory;
    let text = match parsed.command {
        ShellCommands::Flight { command } => match command {
            FlightCommands::Add {
                route,
                price,
                capacity,
            } => {
                let capacity = capacity.unwrap_or(container.settings.default_capacity);
                let flight = inventory.add_flight(route, price, capacity)?;
                format!("Flight added: {}", flight)
            }
            FlightCommands::List => inventory.render_graph(),
            FlightCommands::Show { route } => inventory.flight(&route)?.flight().details(),
        },
        ShellCommands::Crew { command } => match command {
            CrewCommands::Add { route, name, seat } => {
                match inventory.add_crew_member(&route, &name, seat)? {
                    CrewAssignment::Seated { occupied, capacity } => {
                        format!("Crew member added ({}/{} seats occupied)", occupied, capacity)
                    }
                    CrewAssignment::FlightFull { capacity } => {
                        return Ok(ShellOutcome::Rejected(format!(
                            "Flight {} is fully booked ({} seats)",
                            route, capacity
                        )));
                    }
                }
            }
            CrewCommands::List { route } => inventory
                .flight(&route)?
                .flight()
                .crew()
                .in_order()
                .map(ToString::to_string)
                .join("\n"),
            CrewCommands::Tree { route } => inventory.flight(&route)?.flight().crew().render(),
        },
        ShellCommands::Route { command } => match command {
            RouteCommands::Add { from, to, cost } => {
                inventory.connect(&from, &to, cost)?;
                format!("Connection added: {} => {} (Cost: {})", from, to, cost)
            }
            RouteCommands::Cost { from, to } => match inventory.cost(&from, &to)? {
                Some(cost) => cost.to_string(),
                None => format!("No connection from {} to {}", from, to),
            },
            RouteCommands::Neighbors { from } => inventory
                .neighbors(&from)?
                .into_iter()
                .map(|(flight, cost)| format!("{} (Cost: {})", flight, cost))
                .join("\n"),
        },
        ShellCommands::Graph => inventory.render_graph(),
        ShellCommands::Demo => {
            load_demo_data(inventory)?;
            "Demo data loaded.".to_string()
        }
        ShellCommands::Walkthrough => format_walkthrough(&run_walkthrough()?),
        ShellCommands::Clear => {
            inventory.clear();
            "All flights removed.".to_string()
        }
        ShellCommands::Exit => return Ok(ShellOutcome::Exit),
    };

    Ok(ShellOutcome::Continue(text))
}

/// Read lines until EOF or `exit`. Command errors are reported and the
/// session continues.
pub fn run_shell<R: BufRead>(container: &mut ServiceContainer, input: R) -> CliResult<()> {
    let prompt = container.settings.prompt.clone();
    output::prompt(&prompt);

    for line in input.lines() {
        let line = line.map_err(|e| InfraError::io("read shell input", e))?;
        match execute_line(container, &line) {
            Ok(ShellOutcome::Exit) => return Ok(()),
            Ok(ShellOutcome::Continue(text)) if text.is_empty() => {}
            Ok(ShellOutcome::Continue(text)) => output::info(&text),
            Ok(ShellOutcome::Rejected(text)) => output::failure(&text),
            Err(e) => output::error(&e),
        }
        output::prompt(&prompt);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_shell_line() {
        use clap::CommandFactory;
        ShellLine::command().debug_assert();
    }

    #[test]
    fn given_escaped_space_when_tokenizing_then_keeps_single_word() {
        let words = tokenize(r"crew add A->B Mary\ Ann 3").unwrap();
        assert_eq!(words, vec!["crew", "add", "A->B", "Mary Ann", "3"]);
    }

    #[test]
    fn given_empty_quotes_when_tokenizing_then_yields_empty_word() {
        let words = tokenize(r#"a "" b"#).unwrap();
        assert_eq!(words, vec!["a", "", "b"]);
    }
}
