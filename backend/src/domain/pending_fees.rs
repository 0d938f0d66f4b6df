//! # Pending Fee Calculator
//!
//! Derives how many whole calendar months of fees a student owes as of a
//! reference date, from the admission date, the monthly fee, and the latest
//! paid-till date (if any payment exists).
//!
//! Only the (year, month) of each date matters, with one exception: on the
//! first day of a month, a student whose fees are paid through the previous
//! month is not yet counted as owing the current month.
//!
//! The calculator is a pure function of its inputs. Callers pass "today"
//! explicitly so results are reproducible.

use chrono::{Datelike, NaiveDate};

/// Outstanding fees for one student
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PendingFees {
    pub months: u32,
    pub amount: f64,
}

impl PendingFees {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.amount > 0.0
    }
}

/// Months elapsed since year 0, so month distances are plain subtraction
fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Compute pending months and amount as of `reference_date`.
///
/// `monthly_fee` must already be validated (finite, between 0 and
/// `validation::MAX_MONTHLY_FEE`).
pub fn compute_pending(
    monthly_fee: f64,
    admission_date: NaiveDate,
    latest_paid_till: Option<NaiveDate>,
    reference_date: NaiveDate,
) -> PendingFees {
    let months = match latest_paid_till {
        None => months_pending_without_payment(admission_date, reference_date),
        Some(paid_till) => months_pending_since_payment(paid_till, reference_date),
    };

    let amount = if months > 0 {
        monthly_fee * f64::from(months)
    } else {
        0.0
    };

    PendingFees { months, amount }
}

/// No payment on record: every month from admission through the reference
/// month is due, except that a student admitted this month owes nothing yet.
///
/// Note: the fee rules once carried an "early in the month" reduction for
/// this branch guarded by `day < 1`. A day of month is never below 1, so the
/// reduction never applied and is intentionally not implemented here.
fn months_pending_without_payment(admission_date: NaiveDate, reference_date: NaiveDate) -> u32 {
    let months_diff = month_index(reference_date) - month_index(admission_date);

    if months_diff <= 0 {
        // Same month, or admission in a future month
        return 0;
    }

    to_month_count(months_diff + 1)
}

/// A payment exists: pending starts on the 1st of the month after the month
/// containing `paid_till` and runs through the reference month inclusive.
fn months_pending_since_payment(paid_till: NaiveDate, reference_date: NaiveDate) -> u32 {
    let start_pending = month_index(paid_till) + 1;
    let reference = month_index(reference_date);

    if start_pending > reference {
        // Paid ahead
        return 0;
    }

    let mut months = reference - start_pending + 1;

    // On the 1st, fees settled through the previous month do not make the
    // current month pending yet. Month indices run across years, so this
    // also holds on 1 January for fees paid through December.
    if reference_date.day() == 1 && month_index(paid_till) == reference - 1 {
        months -= 1;
    }

    to_month_count(months)
}

fn to_month_count(months: i64) -> u32 {
    u32::try_from(months.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_paid_through_previous_month_owes_current_month() {
        let result = compute_pending(1500.0, date("2023-01-10"), Some(date("2024-06-30")), date("2024-07-15"));
        assert_eq!(result.months, 1);
        assert_eq!(result.amount, 1500.0);
    }

    #[test]
    fn test_long_overdue_counts_every_month_inclusive() {
        // August 2023 through July 2024
        let result = compute_pending(1200.0, date("2023-03-01"), Some(date("2023-07-31")), date("2024-07-15"));
        assert_eq!(result.months, 12);
        assert_eq!(result.amount, 14400.0);
    }

    #[test]
    fn test_no_payment_admitted_this_month_owes_nothing() {
        let result = compute_pending(2500.0, date("2024-06-15"), None, date("2024-06-20"));
        assert_eq!(result, PendingFees { months: 0, amount: 0.0 });
    }

    #[test]
    fn test_no_payment_on_first_of_month_is_not_reduced() {
        // The early-month reduction never applies without a payment
        let result = compute_pending(2500.0, date("2024-06-15"), None, date("2024-08-01"));
        assert_eq!(result.months, 3);
        assert_eq!(result.amount, 7500.0);
    }

    #[test]
    fn test_no_payment_one_month_after_admission_counts_both_months() {
        // The admission month and the following month are both due
        let result = compute_pending(1000.0, date("2024-05-31"), None, date("2024-06-01"));
        assert_eq!(result.months, 2);

        let result = compute_pending(1000.0, date("2024-12-20"), None, date("2025-01-10"));
        assert_eq!(result.months, 2);
    }

    #[test]
    fn test_no_payment_future_admission_is_clamped() {
        let result = compute_pending(1000.0, date("2024-09-01"), None, date("2024-07-15"));
        assert_eq!(result, PendingFees::none());
    }

    #[test]
    fn test_paid_ahead_owes_nothing() {
        let result = compute_pending(1800.0, date("2024-05-20"), Some(date("2024-08-31")), date("2024-07-15"));
        assert_eq!(result.months, 0);
        assert_eq!(result.amount, 0.0);

        // Paid through the end of the current month
        let result = compute_pending(1800.0, date("2024-05-20"), Some(date("2024-07-31")), date("2024-07-15"));
        assert_eq!(result.months, 0);
    }

    #[test]
    fn test_day_of_paid_till_is_ignored() {
        let mid_month = compute_pending(1000.0, date("2024-01-01"), Some(date("2024-06-15")), date("2024-09-10"));
        let end_month = compute_pending(1000.0, date("2024-01-01"), Some(date("2024-06-30")), date("2024-09-10"));
        assert_eq!(mid_month, end_month);
        assert_eq!(mid_month.months, 3);
    }

    #[test]
    fn test_first_of_month_after_paid_through_previous_month() {
        let result = compute_pending(1500.0, date("2023-01-10"), Some(date("2024-06-30")), date("2024-07-01"));
        assert_eq!(result.months, 0);
        assert_eq!(result.amount, 0.0);

        // One day later the month is pending
        let result = compute_pending(1500.0, date("2023-01-10"), Some(date("2024-06-30")), date("2024-07-02"));
        assert_eq!(result.months, 1);
    }

    #[test]
    fn test_first_of_january_after_paid_through_december() {
        let result = compute_pending(1500.0, date("2023-01-10"), Some(date("2024-12-31")), date("2025-01-01"));
        assert_eq!(result.months, 0);
    }

    #[test]
    fn test_first_of_month_with_older_payment_is_not_reduced() {
        // Paid through May, today is 1 July: June and July are pending
        let result = compute_pending(1500.0, date("2023-01-10"), Some(date("2024-05-31")), date("2024-07-01"));
        assert_eq!(result.months, 2);
    }

    #[test]
    fn test_payment_takes_precedence_over_admission() {
        let result = compute_pending(2000.0, date("2020-01-05"), Some(date("2024-01-31")), date("2024-03-20"));
        assert_eq!(result.months, 2);
        assert_eq!(result.amount, 4000.0);
    }

    #[test]
    fn test_amount_is_fee_times_months() {
        let admission = date("2022-04-10");
        let reference = date("2024-07-15");
        for fee in [0.0, 99.5, 1200.0] {
            for paid_till in [None, Some(date("2023-02-28")), Some(date("2024-06-30")), Some(date("2025-01-31"))] {
                let result = compute_pending(fee, admission, paid_till, reference);
                assert_eq!(result.amount, fee * f64::from(result.months));
                assert!(result.amount >= 0.0);
            }
        }
    }

    #[test]
    fn test_zero_fee_is_never_pending() {
        let result = compute_pending(0.0, date("2023-01-01"), None, date("2024-07-15"));
        assert_eq!(result.months, 19);
        assert!(!result.is_pending());
    }
}
