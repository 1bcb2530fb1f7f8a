//! Reporting date windows: the ranges collection runs are parameterized by.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// First and last day of the calendar month before `today`.
pub fn last_month_of(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = today - Duration::days(i64::from(today.day()));
    let start = end - Duration::days(i64::from(end.day()) - 1);
    (start, end)
}

/// The 1st through the 15th of `today`'s month.
pub fn first_half_of(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.with_day(1).expect("every month has a 1st");
    let end = today.with_day(15).expect("every month has a 15th");
    (start, end)
}

/// [`last_month_of`] evaluated against the local clock.
pub fn last_month() -> (NaiveDate, NaiveDate) {
    last_month_of(Local::now().date_naive())
}

/// [`first_half_of`] evaluated against the local clock.
pub fn first_half() -> (NaiveDate, NaiveDate) {
    first_half_of(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn mid_month_gives_previous_calendar_month() {
        assert_eq!(
            last_month_of(d(2024, 8, 14)),
            (d(2024, 7, 1), d(2024, 7, 31))
        );
    }

    #[test]
    fn january_rolls_back_to_december() {
        assert_eq!(
            last_month_of(d(2024, 1, 15)),
            (d(2023, 12, 1), d(2023, 12, 31))
        );
    }

    #[test]
    fn first_of_month_still_means_the_month_before() {
        assert_eq!(
            last_month_of(d(2024, 3, 1)),
            (d(2024, 2, 1), d(2024, 2, 29))
        );
    }

    #[test]
    fn first_half_is_first_through_fifteenth() {
        assert_eq!(
            first_half_of(d(2024, 8, 20)),
            (d(2024, 8, 1), d(2024, 8, 15))
        );
    }
}
