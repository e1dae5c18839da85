use super::payment::PaymentRequest;
use crate::error::{PaymentError, Result};
use chrono::{Days, Months, NaiveDate, Utc};

/// CVV value that deterministically fails the service-local check,
/// used to simulate a rejection end to end.
pub const REJECTED_CVV: u16 = 333;

/// Checks every request rule and reports all violations at once.
///
/// Pure; a bad request yields a `Validation` error, never a panic.
/// Currency membership needs no rule here since `Currency` only
/// deserializes from the accepted set.
pub fn validate(request: &PaymentRequest) -> Result<()> {
    let mut violations: Vec<&str> = Vec::new();

    let card_digits = request.card_number.to_string().len();
    if !(14..=19).contains(&card_digits) {
        violations.push("card number must be between 14 and 19 digits");
    }
    if !(1..=12).contains(&request.expiry_month) {
        violations.push("expiry month must be between 1 and 12");
    }
    if !(2024..=2099).contains(&request.expiry_year) {
        violations.push("expiry year must be between 2024 and 2099");
    }
    if !expiry_in_future(request.expiry_month, request.expiry_year) {
        violations.push("expiry date must be in the future");
    }
    if request.amount <= 0 {
        violations.push("amount must be greater than zero");
    }
    let cvv_digits = request.cvv.to_string().len();
    if !(3..=4).contains(&cvv_digits) {
        violations.push("cvv must be 3 or 4 digits");
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(PaymentError::Validation(violations.join("; ")))
    }
}

/// A card is valid through the last day of its expiry month.
fn expiry_in_future(month: u8, year: u16) -> bool {
    let Some(first_of_month) = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), 1) else {
        return false;
    };
    let last_of_month = first_of_month + Months::new(1) - Days::new(1);
    last_of_month >= Utc::now().date_naive()
}
