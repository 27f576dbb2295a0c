//! CREATE command - Add an employee.

use anyhow::Result;
use clap::Args;
use employee_core::{Employee, Envelope};
use reqwest::Client;
use serde_json::{Map, Value};

use super::{collection_url, make_request, output, put_field};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub department: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    /// Hire date as YYYY-MM-DD
    #[arg(long)]
    pub hire_date: Option<String>,

    /// Salary, e.g. 55000.00
    #[arg(long)]
    pub salary: Option<String>,
}

impl CreateArgs {
    /// Request body with only the fields that were given.
    fn body(self) -> Value {
        let mut body = Map::new();
        put_field(&mut body, "first_name", Some(self.first_name));
        put_field(&mut body, "last_name", Some(self.last_name));
        put_field(&mut body, "email", Some(self.email));
        put_field(&mut body, "phone", self.phone);
        put_field(&mut body, "department", self.department);
        put_field(&mut body, "position", self.position);
        put_field(&mut body, "hire_date", self.hire_date);
        put_field(&mut body, "salary", self.salary);
        Value::Object(body)
    }
}

/// Execute the create command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: CreateArgs) -> Result<()> {
    let url = collection_url(base_url);

    let response: Envelope<Employee> = make_request(client.post(&url).json(&args.body())).await?;

    output(&response, human)
}
