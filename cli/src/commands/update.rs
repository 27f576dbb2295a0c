//! UPDATE command - Change some fields of an employee.

use anyhow::{Result, bail};
use clap::Args;
use employee_core::{Employee, Envelope};
use reqwest::Client;
use serde_json::{Map, Value};

use super::{item_url, make_request, output, put_field};

/// Arguments for the update command.
///
/// Only the given fields are sent. Pass an empty string to `--hire-date`
/// or `--salary` to clear it.
#[derive(Args)]
pub struct UpdateArgs {
    /// Employee ID
    pub employee_id: i64,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub department: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    #[arg(long)]
    pub hire_date: Option<String>,

    #[arg(long)]
    pub salary: Option<String>,
}

impl UpdateArgs {
    fn body(self) -> Map<String, Value> {
        let mut body = Map::new();
        put_field(&mut body, "first_name", self.first_name);
        put_field(&mut body, "last_name", self.last_name);
        put_field(&mut body, "email", self.email);
        put_field(&mut body, "phone", self.phone);
        put_field(&mut body, "department", self.department);
        put_field(&mut body, "position", self.position);
        put_field(&mut body, "hire_date", self.hire_date);
        put_field(&mut body, "salary", self.salary);
        body
    }
}

/// Execute the update command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: UpdateArgs) -> Result<()> {
    let url = item_url(base_url, args.employee_id);

    let body = args.body();
    if body.is_empty() {
        bail!("Nothing to update; pass at least one field flag");
    }

    let response: Envelope<Employee> = make_request(client.put(&url).json(&body)).await?;

    output(&response, human)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(employee_id: i64) -> UpdateArgs {
        UpdateArgs {
            employee_id,
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            department: None,
            position: None,
            hire_date: None,
            salary: None,
        }
    }

    #[test]
    fn test_empty_body() {
        assert!(args(1).body().is_empty());
    }

    #[test]
    fn test_clearing_salary_sends_empty_string() {
        let mut update = args(1);
        update.salary = Some(String::new());
        update.position = Some("Manager".to_string());

        let body = update.body();
        assert_eq!(body.len(), 2);
        assert_eq!(body["salary"], "");
        assert_eq!(body["position"], "Manager");
    }
}
