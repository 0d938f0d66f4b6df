//! Boundary parsing for dates, fees and required fields.
//!
//! Raw strings never reach the calculator: everything is turned into
//! `NaiveDate` / `f64` here, or rejected with a `LedgerError`.

use chrono::NaiveDate;

use super::commands::AddStudentCommand;
use super::errors::{LedgerError, LedgerResult};
use super::models::NewStudent;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Upper bound on a monthly fee; keeps `fee * months` finite for any date range
pub const MAX_MONTHLY_FEE: f64 = 1_000_000_000.0;

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(field: &'static str, value: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| LedgerError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Render a date in the same `YYYY-MM-DD` form it is accepted in
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a monthly fee; it must be a number between 0 and `MAX_MONTHLY_FEE`
pub fn parse_monthly_fee(value: &str) -> LedgerResult<f64> {
    let fee: f64 = value
        .trim()
        .parse()
        .map_err(|_| LedgerError::InvalidAmount(value.to_string()))?;

    if !fee.is_finite() || !(0.0..=MAX_MONTHLY_FEE).contains(&fee) {
        return Err(LedgerError::InvalidAmount(value.to_string()));
    }

    Ok(fee)
}

/// A required field must be present and not blank
pub fn require<'a>(field: &'static str, value: Option<&'a str>) -> LedgerResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(LedgerError::MissingField(field)),
    }
}

/// Trim optional free text, treating blank as absent
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Validate an enrollment request, producing the student and the seed
/// payment's paid-till date.
pub fn validate_add_student(command: &AddStudentCommand) -> LedgerResult<(NewStudent, NaiveDate)> {
    // Presence first, so a request missing several fields reports the first one
    let name = require("name", command.name.as_deref())?;
    let admission_date = require("admission_date", command.admission_date.as_deref())?;
    let initial_paid_till = require("initial_paid_till", command.initial_paid_till.as_deref())?;
    let monthly_fee = require("monthly_fee", command.monthly_fee.as_deref())?;

    let monthly_fee = parse_monthly_fee(monthly_fee)?;
    let admission_date = parse_date("admission_date", admission_date)?;
    let initial_paid_till = parse_date("initial_paid_till", initial_paid_till)?;
    let admission_cancel_date = optional_text(command.admission_cancel_date.as_deref())
        .map(|d| parse_date("admission_cancel_date", &d))
        .transpose()?;

    let student = NewStudent {
        name: name.trim().to_string(),
        address: optional_text(command.address.as_deref()),
        phone: optional_text(command.phone.as_deref()),
        admission_date,
        admission_cancel_date,
        monthly_fee,
    };

    Ok((student, initial_paid_till))
}
