// Input validation for the booking flow
// Every check returns the parsed value on success or a ValidationError whose message is shown to the user

use chrono::{Local, NaiveDate};
use std::num::IntErrorKind;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const CARD_NUMBER_DIGITS: usize = 16;
pub const CVV_DIGITS: usize = 3;

// Reasons an input was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cannot book for past dates!")]
    PastDate,

    #[error("Invalid date format! Please use YYYY-MM-DD format.")]
    InvalidDateFormat,

    #[error("Number must be between {min} and {max}!")]
    OutOfRange { min: u32, max: u32 },

    #[error("Please enter a valid number!")]
    NotANumber,

    #[error("Card number must be 16 digits!")]
    InvalidCardNumber,

    #[error("CVV must be 3 digits!")]
    InvalidCvv,

    #[error("Expiry must be in MM/YY format!")]
    InvalidExpiry,
}

// Validate a stay date against the local calendar date
pub fn validate_date(text: &str) -> Result<NaiveDate, ValidationError> {
    validate_date_on(text, Local::now().date_naive())
}

// Same as validate_date with an explicit "today", today itself is accepted
pub fn validate_date_on(text: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    // chrono's %Y takes a signed year, the year must start with a digit
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidDateFormat);
    }

    let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDateFormat)?;

    if date < today {
        return Err(ValidationError::PastDate);
    }

    Ok(date)
}

// Parse a base-10 integer and check it against an inclusive range
pub fn validate_number(text: &str, min: u32, max: u32) -> Result<u32, ValidationError> {
    // Integers too large for i64 are still integers, report the bound
    let value = text.parse::<i64>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ValidationError::OutOfRange { min, max }
        }
        _ => ValidationError::NotANumber,
    })?;

    if value < i64::from(min) || value > i64::from(max) {
        return Err(ValidationError::OutOfRange { min, max });
    }

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange { min, max })
}

// Format-only payment check, fields are checked in order and the first failure wins
pub fn validate_payment(card_number: &str, cvv: &str, expiry: &str) -> Result<(), ValidationError> {
    validate_card_number(card_number)?;
    validate_cvv(cvv)?;
    validate_expiry(expiry)
}

pub fn validate_card_number(card_number: &str) -> Result<(), ValidationError> {
    if is_digits(card_number, CARD_NUMBER_DIGITS) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCardNumber)
    }
}

pub fn validate_cvv(cvv: &str) -> Result<(), ValidationError> {
    if is_digits(cvv, CVV_DIGITS) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCvv)
    }
}

// MM/YY with MM in 01-12, any two-digit year
pub fn validate_expiry(expiry: &str) -> Result<(), ValidationError> {
    let (month, year) = expiry
        .split_once('/')
        .ok_or(ValidationError::InvalidExpiry)?;

    if !is_digits(month, 2) || !is_digits(year, 2) {
        return Err(ValidationError::InvalidExpiry);
    }

    match month.parse::<u8>() {
        Ok(1..=12) => Ok(()),
        _ => Err(ValidationError::InvalidExpiry),
    }
}

fn is_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}
