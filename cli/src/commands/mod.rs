//! Subcommands and the helpers they share.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod seed;
pub mod update;

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use employee_core::{Employee, Envelope};
use reqwest::{Client, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Collection path of the employee resource.
pub const EMPLOYEES_PATH: &str = "/api/employees/";

/// Output that can also be printed for people.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Build the shared HTTP client.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .context("Failed to build HTTP client")
}

/// URL of the employee collection.
pub fn collection_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), EMPLOYEES_PATH)
}

/// URL of one employee.
pub fn item_url(base_url: &str, id: i64) -> String {
    format!("{}{}/", collection_url(base_url), id)
}

/// Send a request and decode the response envelope.
///
/// A non-success status becomes an error carrying the envelope's message
/// and errors. A success with an empty body (204) yields an envelope with
/// no data.
pub async fn make_request<T: DeserializeOwned>(request: RequestBuilder) -> Result<Envelope<T>> {
    let response = request.send().await.context("Failed to reach server")?;
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        return Err(match serde_json::from_slice::<Envelope<Value>>(&bytes) {
            Ok(envelope) => match envelope.errors {
                Some(errors) => anyhow!("{} ({}): {}", envelope.message, envelope.code, errors),
                None => anyhow!("{} ({})", envelope.message, envelope.code),
            },
            Err(_) => anyhow!(
                "Server returned {}: {}",
                status,
                String::from_utf8_lossy(&bytes)
            ),
        });
    }

    if bytes.is_empty() {
        let reason = status.canonical_reason().unwrap_or("No content");
        return Ok(Envelope::empty(reason, status.as_u16()));
    }

    serde_json::from_slice(&bytes).context("Failed to decode response envelope")
}

/// Print `value` as pretty JSON, or as text when `human` is set.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Insert `value` under `key` when present.
pub fn put_field(body: &mut Map<String, Value>, key: &str, value: Option<String>) {
    if let Some(value) = value {
        body.insert(key.to_string(), Value::String(value));
    }
}

/// Print one employee as an indented block.
pub fn print_employee(employee: &Employee) {
    println!(
        "  {} {}",
        format!("#{}", employee.employee_id).yellow(),
        employee.full_name().bold()
    );
    println!("    {} {}", "Email:".cyan(), employee.email);
    if !employee.phone.is_empty() {
        println!("    {} {}", "Phone:".cyan(), employee.phone);
    }
    if !employee.department.is_empty() || !employee.position.is_empty() {
        println!(
            "    {} {} / {}",
            "Role:".cyan(),
            or_dash(&employee.department),
            or_dash(&employee.position)
        );
    }
    if let Some(hire_date) = employee.hire_date {
        println!("    {} {}", "Hired:".cyan(), hire_date);
    }
    if let Some(salary) = employee.salary {
        println!("    {} {}", "Salary:".cyan(), salary);
    }
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}

impl HumanReadable for Envelope<Employee> {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();
        if let Some(employee) = &self.data {
            print_employee(employee);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            collection_url("http://localhost:3000"),
            "http://localhost:3000/api/employees/"
        );
        assert_eq!(
            collection_url("http://localhost:3000/"),
            "http://localhost:3000/api/employees/"
        );
        assert_eq!(
            item_url("http://localhost:3000", 7),
            "http://localhost:3000/api/employees/7/"
        );
    }

    #[test]
    fn test_put_field() {
        let mut body = Map::new();
        put_field(&mut body, "phone", None);
        put_field(&mut body, "email", Some("a@example.com".to_string()));

        assert!(!body.contains_key("phone"));
        assert_eq!(body["email"], "a@example.com");
    }
}
