//! Command-line interface for the employee records API.
//!
//! Commands:
//! - list: Page through employees
//! - create: Add an employee
//! - get: Show one employee
//! - update: Change some fields of an employee
//! - delete: Remove an employee
//! - seed: Replace all employees with generated sample data
//!
//! Configuration via environment:
//! - EMPLOYEES_URL: Base URL of the server (default: http://localhost:3000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, get::GetArgs, list::ListArgs, seed::SeedArgs,
    update::UpdateArgs,
};

/// Employee records CLI
///
/// Prints the server's JSON envelopes by default; --human switches to
/// formatted text.
#[derive(Parser)]
#[command(name = "employees")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Employee server URL
    #[arg(
        long,
        env = "EMPLOYEES_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List employees, one page at a time
    List(ListArgs),

    /// Create a new employee
    Create(CreateArgs),

    /// Show one employee
    Get(GetArgs),

    /// Update fields of an employee
    Update(UpdateArgs),

    /// Delete an employee
    Delete(DeleteArgs),

    /// Delete all employees and create generated ones
    Seed(SeedArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Commands::Create(args) => {
            commands::create::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Get(args) => commands::get::execute(&client, &cli.url, cli.human, args).await,
        Commands::Update(args) => {
            commands::update::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Seed(args) => commands::seed::execute(&client, &cli.url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_seed_defaults() {
        let cli = Cli::try_parse_from(["employees", "seed"]).unwrap();
        match cli.command {
            Commands::Seed(args) => {
                assert_eq!(args.count, 100);
                assert!(!args.no_clear);
            }
            _ => panic!("expected seed"),
        }
    }

    #[test]
    fn test_parse_update_flags() {
        let cli = Cli::try_parse_from([
            "employees",
            "--human",
            "update",
            "5",
            "--position",
            "Manager",
        ])
        .unwrap();
        assert!(cli.human);
        match cli.command {
            Commands::Update(args) => {
                assert_eq!(args.employee_id, 5);
                assert_eq!(args.position.as_deref(), Some("Manager"));
                assert!(args.salary.is_none());
            }
            _ => panic!("expected update"),
        }
    }
}
