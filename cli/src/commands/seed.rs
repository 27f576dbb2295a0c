//! SEED command - Replace all employees with generated sample data.

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use colored::Colorize;
use employee_core::{Employee, Envelope, Page};
use rand::Rng;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Value, json};

use super::{HumanReadable, collection_url, item_url, make_request, output};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Chen", "Dalia", "Elias", "Fatima", "Gustav", "Hana", "Ivan", "Jada",
    "Kofi", "Lena", "Mateo", "Nadia", "Oskar", "Priya", "Quinn", "Rosa", "Sami", "Tara",
];

const LAST_NAMES: &[&str] = &[
    "Anders", "Baker", "Costa", "Dubois", "Evans", "Fischer", "Garcia", "Haddad", "Ito", "Jensen",
    "Kowalski", "Lopez", "Moreau", "Nakamura", "Okafor", "Petrov", "Reyes", "Silva", "Tanaka",
    "Weber",
];

const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Finance",
    "Human Resources",
    "Marketing",
    "Operations",
    "Sales",
    "Support",
];

const POSITIONS: &[&str] = &[
    "Analyst",
    "Coordinator",
    "Developer",
    "Director",
    "Engineer",
    "Manager",
    "Specialist",
];

/// Salary range in whole currency units.
const SALARY_RANGE: std::ops::RangeInclusive<u32> = 30_000..=120_000;

/// Hire dates fall within this many days before today.
const HIRE_WINDOW_DAYS: i64 = 10 * 365;

/// Page size used while clearing; the server's maximum.
const CLEAR_PAGE_SIZE: usize = 100;

/// Arguments for the seed command.
#[derive(Args)]
pub struct SeedArgs {
    /// Number of employees to create
    #[arg(long, default_value_t = 100)]
    pub count: usize,

    /// Keep existing employees instead of deleting them first
    #[arg(long)]
    pub no_clear: bool,
}

/// What the seed run did.
#[derive(Debug, Serialize)]
pub struct SeedReport {
    pub deleted: usize,
    pub created: usize,
}

impl HumanReadable for SeedReport {
    fn print_human(&self) {
        println!("{}", "Sample data loaded".green().bold());
        println!();
        println!("  {} {}", "Deleted:".cyan(), self.deleted);
        println!("  {} {}", "Created:".cyan(), self.created);
    }
}

/// A random employee payload. `index` keeps generated emails distinct.
pub fn sample_employee<R: Rng + ?Sized>(rng: &mut R, index: usize, today: NaiveDate) -> Value {
    let first_name = pick(rng, FIRST_NAMES);
    let last_name = pick(rng, LAST_NAMES);
    let email = format!(
        "{}.{}{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        index
    );
    let hire_date = today - Duration::days(rng.gen_range(0..HIRE_WINDOW_DAYS));
    let salary = rng.gen_range(SALARY_RANGE);

    json!({
        "first_name": first_name,
        "last_name": last_name,
        "email": email,
        "phone": format!("555-{:04}", rng.gen_range(0..10_000)),
        "department": pick(rng, DEPARTMENTS),
        "position": pick(rng, POSITIONS),
        "hire_date": hire_date.format("%Y-%m-%d").to_string(),
        "salary": format!("{}.00", salary),
    })
}

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&'static str]) -> &'static str {
    choices.choose(rng).copied().unwrap_or_default()
}

/// Delete every employee, one page at a time.
async fn clear(client: &Client, base_url: &str) -> Result<usize> {
    let url = collection_url(base_url);
    let mut deleted = 0;

    loop {
        let envelope: Envelope<Page<Employee>> = make_request(
            client
                .get(&url)
                .query(&[("page_size", CLEAR_PAGE_SIZE.to_string())]),
        )
        .await?;

        let results = envelope.data.map(|page| page.results).unwrap_or_default();
        if results.is_empty() {
            return Ok(deleted);
        }

        for employee in results {
            let url = item_url(base_url, employee.employee_id.get());
            make_request::<()>(client.delete(&url)).await?;
            deleted += 1;
        }
    }
}

/// Execute the seed command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: SeedArgs) -> Result<()> {
    let deleted = if args.no_clear {
        0
    } else {
        clear(client, base_url).await?
    };

    let url = collection_url(base_url);
    let today = Local::now().date_naive();
    let mut created = 0;

    for index in 0..args.count {
        // The generator is not Send, so it must not live across an await.
        let payload = sample_employee(&mut rand::thread_rng(), index, today);
        make_request::<Employee>(client.post(&url).json(&payload)).await?;
        created += 1;
    }

    output(&SeedReport { deleted, created }, human)
}

#[cfg(test)]
mod tests {
    use super::*;
    use employee_core::validate_create;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_samples_pass_validation() {
        let mut rng = StdRng::seed_from_u64(7);
        for index in 0..200 {
            let payload = sample_employee(&mut rng, index, today());
            let employee = validate_create(&payload).unwrap();

            let salary = employee.salary.unwrap();
            assert!(salary >= Decimal::from(30_000) && salary <= Decimal::from(120_000));

            let hired = employee.hire_date.unwrap();
            assert!(hired <= today());
            assert!(hired > today() - Duration::days(HIRE_WINDOW_DAYS + 1));
        }
    }

    #[test]
    fn test_sample_emails_are_distinct() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut emails: Vec<String> = (0..100)
            .map(|i| sample_employee(&mut rng, i, today())["email"].to_string())
            .collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), 100);
    }
}
