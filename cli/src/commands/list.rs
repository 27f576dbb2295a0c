//! LIST command - Page through employees.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use employee_core::{Employee, Envelope, Page};
use reqwest::Client;

use super::{HumanReadable, collection_url, make_request, output, print_employee};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<usize>,

    /// Records per page (the server caps this at its maximum)
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ListArgs {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("page_size", page_size.to_string()));
        }
        query
    }
}

impl HumanReadable for Envelope<Page<Employee>> {
    fn print_human(&self) {
        println!("{}", "Employees".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        let Some(page) = &self.data else {
            println!("  {}", "(No data)".dimmed());
            return;
        };

        if page.results.is_empty() {
            println!("  {}", "(No employees on this page)".dimmed());
        }

        for employee in &page.results {
            print_employee(employee);
            println!();
        }

        println!(
            "  {} {} of {}",
            "Showing:".cyan(),
            page.count,
            page.total
        );
        if let Some(previous) = &page.previous {
            println!("  {} {}", "Previous:".cyan(), previous);
        }
        if let Some(next) = &page.next {
            println!("  {} {}", "Next:".cyan(), next);
        }
    }
}

/// Execute the list command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: ListArgs) -> Result<()> {
    let url = collection_url(base_url);

    let response: Envelope<Page<Employee>> =
        make_request(client.get(&url).query(&args.query())).await?;

    output(&response, human)
}
