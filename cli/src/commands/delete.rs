//! DELETE command - Remove an employee.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::Serialize;

use super::{HumanReadable, item_url, make_request, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Employee ID to delete
    pub employee_id: i64,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Outcome of a delete.
///
/// The server answers 204 with no body, so this is built locally.
#[derive(Debug, Serialize)]
pub struct DeleteReport {
    pub employee_id: i64,
    pub message: String,
}

impl HumanReadable for DeleteReport {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.employee_id);
    }
}

/// Execute the delete command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: DeleteArgs) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete employee {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.employee_id
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let url = item_url(base_url, args.employee_id);
    make_request::<()>(client.delete(&url)).await?;

    let report = DeleteReport {
        employee_id: args.employee_id,
        message: "Employee deleted successfully".to_string(),
    };

    output(&report, human)
}
