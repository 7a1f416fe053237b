use chrono::{Datelike, Months, NaiveDate};

/// full years lived between `birth_date` and `today`
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    age_in_months(birth_date, today) / 12
}

/// whole months lived between `birth_date` and `today`, partial month not counted
pub fn age_in_months(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    if today <= birth_date {
        return 0;
    }
    let mut months = (today.year() - birth_date.year()) * 12
        + today.month() as i32
        - birth_date.month() as i32;
    if today.day() < birth_date.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// whether someone born on `birth_date` has reached `minimum_age_years` by `today`
///
/// A Feb 29 birthday counts from Feb 28 in non-leap years.
pub fn is_adult(birth_date: NaiveDate, today: NaiveDate, minimum_age_years: u32) -> bool {
    match today.checked_sub_months(Months::new(minimum_age_years.saturating_mul(12))) {
        Some(cutoff) => birth_date <= cutoff,
        None => false,
    }
}
