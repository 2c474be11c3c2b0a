//! Date and time helpers.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

/// Returns 12:00:00 on the current local date, or `None` in the unlikely
/// case noon does not exist in the local time zone on that date.
pub fn midday() -> Option<DateTime<Local>> {
    let now = Local::now();
    midday_for_date(now.year(), now.month(), now.day())
}

/// Returns 12:00:00 local time on the given year, month, and day.
pub fn midday_for_date(year: i32, month: u32, day: u32) -> Option<DateTime<Local>> {
    Local.with_ymd_and_hms(year, month, day, 12, 0, 0).single()
}

/// Returns 12:00:00 in UTC on the current UTC date.
pub fn utc_midday() -> DateTime<Utc> {
    let now = Utc::now();
    utc_midday_for_date(now.year(), now.month(), now.day())
        .expect("noon on the current UTC date always exists")
}

/// Returns 12:00:00 in UTC for the given year, month, and day, or `None`
/// when the date does not exist.
pub fn utc_midday_for_date(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single()
}

/// Returns true when `a` is before `b`. A missing side compares as true.
pub fn first_before_second<Tz: TimeZone>(
    a: Option<&DateTime<Tz>>,
    b: Option<&DateTime<Tz>>,
) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Timelike};

    #[test]
    fn utc_midday_is_noon_today() {
        let noon = utc_midday();
        let now = Utc::now();

        assert_eq!(noon.hour(), 12);
        assert_eq!(noon.minute(), 0);
        assert_eq!(noon.second(), 0);
        assert_eq!(noon.date_naive(), now.date_naive());
    }

    #[test]
    fn utc_midday_for_a_fixed_date() {
        let noon = utc_midday_for_date(2024, 2, 29).unwrap();
        assert_eq!(noon.to_rfc3339(), "2024-02-29T12:00:00+00:00");

        assert!(utc_midday_for_date(2023, 2, 29).is_none());
    }

    #[test]
    fn local_midday_is_noon() {
        let noon = midday().unwrap();
        assert_eq!(noon.hour(), 12);
        assert_eq!(noon.minute(), 0);

        let fixed = midday_for_date(2024, 7, 1).unwrap();
        assert_eq!(fixed.hour(), 12);
    }

    #[test]
    fn first_before_second_comparisons() {
        let now = Utc::now();
        let in_one_hour = now + Duration::hours(1);
        let in_two_hours = now + Duration::hours(2);

        assert!(first_before_second::<Utc>(None, None));
        assert!(first_before_second(None, Some(&in_one_hour)));
        assert!(first_before_second(Some(&in_one_hour), None));
        assert!(first_before_second(Some(&in_one_hour), Some(&in_two_hours)));
        assert!(!first_before_second(Some(&in_two_hours), Some(&in_one_hour)));
        assert!(!first_before_second(Some(&now), Some(&now)));
    }
}
