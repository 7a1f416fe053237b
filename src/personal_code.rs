use chrono::NaiveDate;

use crate::errors::{DecisionError, Result};

const CODE_LENGTH: usize = 11;
const FIRST_PASS_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECOND_PASS_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// format and checksum check for national identification codes
pub trait PersonalCodeValidator {
    fn is_valid(&self, code: &str) -> bool;
}

/// validator for Estonian personal codes (isikukood)
///
/// Layout is `GYYMMDDSSSC`: century and gender digit, birth date, serial
/// number and a mod-11 check digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianPersonalCodeValidator;

impl PersonalCodeValidator for EstonianPersonalCodeValidator {
    fn is_valid(&self, code: &str) -> bool {
        let Some(digits) = parse_digits(code) else {
            return false;
        };
        let Some(century) = full_century(digits[0]) else {
            return false;
        };
        if date_from_digits(century, &digits).is_none() {
            return false;
        }
        checksum(&digits) == digits[CODE_LENGTH - 1]
    }
}

impl<F> PersonalCodeValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, code: &str) -> bool {
        self(code)
    }
}

/// check digit computed over the first ten digits
pub fn checksum(digits: &[u32; CODE_LENGTH]) -> u32 {
    let weighted = |weights: &[u32; 10]| -> u32 {
        digits.iter().zip(weights).map(|(d, w)| d * w).sum::<u32>() % 11
    };

    match weighted(&FIRST_PASS_WEIGHTS) {
        10 => match weighted(&SECOND_PASS_WEIGHTS) {
            10 => 0,
            remainder => remainder,
        },
        remainder => remainder,
    }
}

/// birth date encoded in a personal code
///
/// Only the 20th and 21st century markers (3..=6) are accepted for lending.
pub fn birth_date(code: &str) -> Result<NaiveDate> {
    let digits = parse_digits(code).ok_or(DecisionError::InvalidPersonalCode)?;
    let century = lending_century(digits[0]).ok_or(DecisionError::InvalidPersonalCode)?;
    date_from_digits(century, &digits).ok_or(DecisionError::InvalidPersonalCode)
}

/// last four digits of a personal code as a number
pub fn segment_digits(code: &str) -> Result<u16> {
    let start = code
        .len()
        .checked_sub(4)
        .ok_or(DecisionError::InvalidPersonalCode)?;
    code.get(start..)
        .filter(|tail| tail.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|tail| tail.parse().ok())
        .ok_or(DecisionError::InvalidPersonalCode)
}

fn parse_digits(code: &str) -> Option<[u32; CODE_LENGTH]> {
    if code.len() != CODE_LENGTH {
        return None;
    }
    let mut digits = [0u32; CODE_LENGTH];
    for (slot, c) in digits.iter_mut().zip(code.chars()) {
        *slot = c.to_digit(10)?;
    }
    Some(digits)
}

fn full_century(marker: u32) -> Option<i32> {
    match marker {
        1 | 2 => Some(1800),
        3 | 4 => Some(1900),
        5 | 6 => Some(2000),
        7 | 8 => Some(2100),
        _ => None,
    }
}

fn lending_century(marker: u32) -> Option<i32> {
    match marker {
        3 | 4 => Some(1900),
        5 | 6 => Some(2000),
        _ => None,
    }
}

fn date_from_digits(century: i32, digits: &[u32; CODE_LENGTH]) -> Option<NaiveDate> {
    let year = century + (digits[1] * 10 + digits[2]) as i32;
    let month = digits[3] * 10 + digits[4];
    let day = digits[5] * 10 + digits[6];
    NaiveDate::from_ymd_opt(year, month, day)
}
