//! Field-by-field validation of employee payloads.
//!
//! Request bodies arrive as arbitrary JSON. Each field is checked on its own
//! and every problem is recorded in [`FieldErrors`] instead of stopping at
//! the first one, so a client gets the complete list in a single round trip.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{EmployeePatch, NewEmployee};

/// Key used for problems that belong to the body as a whole.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Maximum number of digits a salary may carry.
pub const SALARY_MAX_DIGITS: u32 = 10;

/// Maximum number of decimal places a salary may carry.
pub const SALARY_DECIMAL_PLACES: u32 = 2;

/// Maximum length of an email address.
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Human-readable validation messages.
pub mod messages {
    pub const REQUIRED: &str = "This field is required.";
    pub const BLANK: &str = "This field may not be blank.";
    pub const NULL: &str = "This field may not be null.";
    pub const INVALID_STRING: &str = "Not a valid string.";
    pub const INVALID_EMAIL: &str = "Enter a valid email address.";
    pub const EMAIL_TOO_LONG: &str = "Ensure this field has no more than 254 characters.";
    pub const INVALID_DATE: &str =
        "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";
    pub const INVALID_NUMBER: &str = "A valid number is required.";
    pub const NEGATIVE: &str = "Ensure this value is greater than or equal to 0.";
    pub const MAX_DIGITS: &str = "Ensure that there are no more than 10 digits in total.";
    pub const MAX_DECIMAL_PLACES: &str = "Ensure that there are no more than 2 decimal places.";
    pub const MAX_WHOLE_DIGITS: &str =
        "Ensure that there are no more than 8 digits before the decimal point.";
}

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .expect("email pattern is a valid regex")
});

// ============================================================================
// FieldErrors
// ============================================================================

/// Validation failures keyed by field name.
///
/// Serializes as `{"field": ["message", ...], ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error set holding one message for one field.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the field has at least one message.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages recorded against a field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Iterates over `(field, messages)` in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// `Ok(value)` when empty, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(" "))?;
        }
        Ok(())
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Parses a raw request body into JSON.
///
/// Malformed JSON is reported under [`NON_FIELD_ERRORS`].
pub fn parse_body(body: &[u8]) -> Result<Value, FieldErrors> {
    serde_json::from_slice(body).map_err(|e| {
        FieldErrors::single(NON_FIELD_ERRORS, format!("JSON parse error - {}", e))
    })
}

/// Validates a create payload.
///
/// `first_name`, `last_name` and `email` are required. The remaining fields
/// are optional; omitted strings default to empty and omitted nullable
/// fields to null.
pub fn validate_create(payload: &Value) -> Result<NewEmployee, FieldErrors> {
    let fields = as_object(payload)?;
    let mut reader = FieldReader::new(fields);

    let first_name = reader.required(|r| r.name("first_name"), "first_name");
    let last_name = reader.required(|r| r.name("last_name"), "last_name");
    let email = reader.required(|r| r.email("email"), "email");
    let phone = reader.text("phone").unwrap_or_default();
    let department = reader.text("department").unwrap_or_default();
    let position = reader.text("position").unwrap_or_default();
    let hire_date = reader.date("hire_date").unwrap_or_default();
    let salary = reader.salary("salary").unwrap_or_default();

    let errors = reader.finish();
    match (first_name, last_name, email) {
        (Some(first_name), Some(last_name), Some(email)) if errors.is_empty() => Ok(NewEmployee {
            first_name,
            last_name,
            email,
            phone,
            department,
            position,
            hire_date,
            salary,
        }),
        _ => Err(errors),
    }
}

/// Validates an update payload.
///
/// Every field is optional; the ones present are checked with the same
/// rules as on create. `employee_id` and unknown keys are ignored.
pub fn validate_update(payload: &Value) -> Result<EmployeePatch, FieldErrors> {
    let fields = as_object(payload)?;
    let mut reader = FieldReader::new(fields);

    let patch = EmployeePatch {
        first_name: reader.name("first_name"),
        last_name: reader.name("last_name"),
        email: reader.email("email"),
        phone: reader.text("phone"),
        department: reader.text("department"),
        position: reader.text("position"),
        hire_date: reader.date("hire_date"),
        salary: reader.salary("salary"),
    };

    reader.finish().into_result(patch)
}

/// True when `email` has the shape of an email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// ============================================================================
// Field reading
// ============================================================================

fn as_object(payload: &Value) -> Result<&Map<String, Value>, FieldErrors> {
    match payload {
        Value::Object(fields) => Ok(fields),
        other => Err(FieldErrors::single(
            NON_FIELD_ERRORS,
            format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_kind(other)
            ),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads typed fields out of a JSON object, collecting errors as it goes.
///
/// Each reader method returns `None` both when the field is absent and when
/// it is invalid; the two are told apart by [`FieldReader::finish`].
struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> FieldReader<'a> {
    fn new(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields,
            errors: FieldErrors::new(),
        }
    }

    fn finish(self) -> FieldErrors {
        self.errors
    }

    /// Runs `read` and records a "required" error if the field is absent.
    fn required<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> Option<T>,
        field: &str,
    ) -> Option<T> {
        if !self.fields.contains_key(field) {
            self.errors.add(field, messages::REQUIRED);
            return None;
        }
        read(self)
    }

    /// A string field that may be blank but not null.
    fn text(&mut self, field: &str) -> Option<String> {
        let value = self.fields.get(field)?;
        match value {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Null => {
                self.errors.add(field, messages::NULL);
                None
            }
            _ => {
                self.errors.add(field, messages::INVALID_STRING);
                None
            }
        }
    }

    /// A string field that must not be blank.
    fn name(&mut self, field: &str) -> Option<String> {
        let text = self.text(field)?;
        if text.is_empty() {
            self.errors.add(field, messages::BLANK);
            return None;
        }
        Some(text)
    }

    fn email(&mut self, field: &str) -> Option<String> {
        let email = self.name(field)?;
        if email.chars().count() > EMAIL_MAX_LENGTH {
            self.errors.add(field, messages::EMAIL_TOO_LONG);
            return None;
        }
        if !is_valid_email(&email) {
            self.errors.add(field, messages::INVALID_EMAIL);
            return None;
        }
        Some(email)
    }

    /// A nullable `YYYY-MM-DD` date. An empty string counts as null.
    fn date(&mut self, field: &str) -> Option<Option<NaiveDate>> {
        let value = self.fields.get(field)?;
        match value {
            Value::Null => Some(None),
            Value::String(s) if s.trim().is_empty() => Some(None),
            Value::String(s) => match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
                Ok(date) => Some(Some(date)),
                Err(_) => {
                    self.errors.add(field, messages::INVALID_DATE);
                    None
                }
            },
            _ => {
                self.errors.add(field, messages::INVALID_DATE);
                None
            }
        }
    }

    /// A nullable, non-negative decimal with at most 10 digits, 2 of them
    /// after the point. An empty string counts as null.
    fn salary(&mut self, field: &str) -> Option<Option<Decimal>> {
        let value = self.fields.get(field)?;
        let parsed = match value {
            Value::Null => return Some(None),
            Value::String(s) if s.trim().is_empty() => return Some(None),
            Value::String(s) => parse_decimal(s.trim()),
            Value::Number(n) => parse_decimal(&n.to_string()),
            _ => None,
        };

        let Some(amount) = parsed else {
            self.errors.add(field, messages::INVALID_NUMBER);
            return None;
        };

        if amount.is_sign_negative() && !amount.is_zero() {
            self.errors.add(field, messages::NEGATIVE);
            return None;
        }

        match check_precision(amount) {
            Ok(amount) => Some(Some(amount)),
            Err(message) => {
                self.errors.add(field, message);
                None
            }
        }
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Enforces the salary column's precision and rescales to two places.
fn check_precision(amount: Decimal) -> Result<Decimal, &'static str> {
    let normalized = amount.normalize();
    let scale = normalized.scale();
    let digit_count = normalized.mantissa().unsigned_abs().to_string().len() as u32;
    let total_digits = digit_count.max(scale);

    if total_digits > SALARY_MAX_DIGITS {
        return Err(messages::MAX_DIGITS);
    }
    if scale > SALARY_DECIMAL_PLACES {
        return Err(messages::MAX_DECIMAL_PLACES);
    }
    if total_digits - scale > SALARY_MAX_DIGITS - SALARY_DECIMAL_PLACES {
        return Err(messages::MAX_WHOLE_DIGITS);
    }

    let mut amount = normalized;
    amount.rescale(SALARY_DECIMAL_PLACES);
    Ok(amount)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "first_name": "Alice",
            "last_name": "Brown",
            "email": "alicebrown@example.com",
            "phone": "1231231234",
            "department": "Finance",
            "position": "Analyst",
            "hire_date": "2021-06-01",
            "salary": 55000
        })
    }

    #[test]
    fn test_create_valid_payload() {
        let employee = validate_create(&valid_payload()).unwrap();
        assert_eq!(employee.first_name, "Alice");
        assert_eq!(employee.email, "alicebrown@example.com");
        assert_eq!(employee.hire_date, NaiveDate::from_ymd_opt(2021, 6, 1));
        assert_eq!(employee.salary.unwrap().to_string(), "55000.00");
    }

    #[test]
    fn test_create_minimal_payload_uses_defaults() {
        let payload = json!({
            "first_name": "Bob",
            "last_name": "Stone",
            "email": "bob@example.org"
        });
        let employee = validate_create(&payload).unwrap();
        assert_eq!(employee.phone, "");
        assert_eq!(employee.department, "");
        assert!(employee.hire_date.is_none());
        assert!(employee.salary.is_none());
    }

    #[test]
    fn test_create_invalid_payload_reports_every_field() {
        let payload = json!({ "first_name": "", "email": "invalid-email" });
        let errors = validate_create(&payload).unwrap_err();

        assert_eq!(errors.get("first_name").unwrap(), [messages::BLANK]);
        assert_eq!(errors.get("last_name").unwrap(), [messages::REQUIRED]);
        assert_eq!(errors.get("email").unwrap(), [messages::INVALID_EMAIL]);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_whitespace_name_is_blank() {
        let mut payload = valid_payload();
        payload["last_name"] = json!("   ");
        let errors = validate_create(&payload).unwrap_err();
        assert!(errors.contains("last_name"));
    }

    #[test]
    fn test_names_are_trimmed() {
        let mut payload = valid_payload();
        payload["first_name"] = json!("  Alice ");
        let employee = validate_create(&payload).unwrap();
        assert_eq!(employee.first_name, "Alice");
    }

    #[test]
    fn test_null_string_field_rejected() {
        let mut payload = valid_payload();
        payload["phone"] = Value::Null;
        let errors = validate_create(&payload).unwrap_err();
        assert_eq!(errors.get("phone").unwrap(), [messages::NULL]);
    }

    #[test]
    fn test_non_string_rejected() {
        let mut payload = valid_payload();
        payload["department"] = json!(["IT"]);
        let errors = validate_create(&payload).unwrap_err();
        assert_eq!(errors.get("department").unwrap(), [messages::INVALID_STRING]);
    }

    #[test]
    fn test_numeric_phone_is_accepted_as_text() {
        let mut payload = valid_payload();
        payload["phone"] = json!(5550100);
        let employee = validate_create(&payload).unwrap();
        assert_eq!(employee.phone, "5550100");
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("johndoe@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("no-tld@example"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email(".leading@example.com"));
    }

    #[test]
    fn test_bad_date() {
        let mut payload = valid_payload();
        payload["hire_date"] = json!("01/06/2021");
        let errors = validate_create(&payload).unwrap_err();
        assert_eq!(errors.get("hire_date").unwrap(), [messages::INVALID_DATE]);
    }

    #[test]
    fn test_salary_rules() {
        let check = |salary: Value| {
            let mut payload = valid_payload();
            payload["salary"] = salary;
            validate_create(&payload)
        };

        assert_eq!(
            check(json!(-1)).unwrap_err().get("salary").unwrap(),
            [messages::NEGATIVE]
        );
        assert_eq!(
            check(json!("abc")).unwrap_err().get("salary").unwrap(),
            [messages::INVALID_NUMBER]
        );
        assert_eq!(
            check(json!(true)).unwrap_err().get("salary").unwrap(),
            [messages::INVALID_NUMBER]
        );
        assert_eq!(
            check(json!("10.555")).unwrap_err().get("salary").unwrap(),
            [messages::MAX_DECIMAL_PLACES]
        );
        assert_eq!(
            check(json!("123456789")).unwrap_err().get("salary").unwrap(),
            [messages::MAX_WHOLE_DIGITS]
        );
        assert_eq!(
            check(json!("12345678901")).unwrap_err().get("salary").unwrap(),
            [messages::MAX_DIGITS]
        );

        assert_eq!(check(json!(0)).unwrap().salary.unwrap().to_string(), "0.00");
        assert_eq!(
            check(json!("1250.5")).unwrap().salary.unwrap().to_string(),
            "1250.50"
        );
        assert_eq!(
            check(json!(99999999.99)).unwrap().salary.unwrap().to_string(),
            "99999999.99"
        );
        assert!(check(Value::Null).unwrap().salary.is_none());
    }

    #[test]
    fn test_non_object_payload() {
        let errors = validate_create(&json!([1, 2])).unwrap_err();
        assert_eq!(
            errors.get(NON_FIELD_ERRORS).unwrap(),
            ["Invalid data. Expected a dictionary, but got array."]
        );
        assert!(validate_update(&json!("text")).is_err());
    }

    #[test]
    fn test_parse_body_reports_json_errors() {
        let errors = parse_body(b"{not json").unwrap_err();
        let messages = errors.get(NON_FIELD_ERRORS).unwrap();
        assert!(messages[0].starts_with("JSON parse error - "));
        assert!(parse_body(br#"{"a": 1}"#).is_ok());
    }

    #[test]
    fn test_update_is_partial() {
        let patch = validate_update(&json!({ "first_name": "Johnathan" })).unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("Johnathan"));
        assert!(patch.last_name.is_none());
        assert!(patch.email.is_none());
        assert!(patch.salary.is_none());
    }

    #[test]
    fn test_update_ignores_identifier_and_unknown_fields() {
        let patch = validate_update(&json!({ "employee_id": 99, "nickname": "JD" })).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_update_validates_present_fields() {
        let errors =
            validate_update(&json!({ "first_name": "", "email": "nope", "salary": -5 }))
                .unwrap_err();
        assert!(errors.contains("first_name"));
        assert!(errors.contains("email"));
        assert!(errors.contains("salary"));
        assert!(!errors.contains("last_name"));
    }

    #[test]
    fn test_update_can_null_out_optional_fields() {
        let patch = validate_update(&json!({ "hire_date": null, "salary": "" })).unwrap();
        assert_eq!(patch.hire_date, Some(None));
        assert_eq!(patch.salary, Some(None));
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let mut errors = FieldErrors::new();
        errors.add("email", messages::INVALID_EMAIL);
        errors.add("email", messages::EMAIL_TOO_LONG);
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            json!({ "email": [messages::INVALID_EMAIL, messages::EMAIL_TOO_LONG] })
        );
    }

    #[test]
    fn test_field_errors_display() {
        let mut errors = FieldErrors::new();
        errors.add("first_name", messages::BLANK);
        errors.add("email", messages::INVALID_EMAIL);
        assert_eq!(
            errors.to_string(),
            "email: Enter a valid email address.; first_name: This field may not be blank."
        );
    }
}
