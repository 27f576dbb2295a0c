//! GET command - Show one employee.

use anyhow::Result;
use clap::Args;
use employee_core::{Employee, Envelope};
use reqwest::Client;

use super::{item_url, make_request, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Employee ID
    pub employee_id: i64,
}

/// Execute the get command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: GetArgs) -> Result<()> {
    let url = item_url(base_url, args.employee_id);

    let response: Envelope<Employee> = make_request(client.get(&url)).await?;

    output(&response, human)
}
