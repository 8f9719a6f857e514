use chrono::{Datelike, NaiveDate};

/// maps a calendar date into the demand model's day-of-week convention,
/// Sunday=1 through Saturday=7.
///
/// chrono counts days from Monday=0. shifting by two puts Monday at 2 and
/// Saturday at 7; calendar Sunday lands on the intermediate value 8, the only
/// value that can exceed 7, and wraps to 1. the wrap stays a single special
/// case instead of a modulo so a change in the underlying weekday convention
/// cannot silently shift the mapping.
pub fn demand_day_of_week(date: &NaiveDate) -> u8 {
    let intermediate = date.weekday().num_days_from_monday() as u8 + 2;
    if intermediate > 7 {
        1
    } else {
        intermediate
    }
}

/// Sunday or Saturday in the Sunday=1 convention.
pub fn is_weekend(day_of_week: u8) -> bool {
    day_of_week == 1 || day_of_week == 7
}

/// english name for a day in the Sunday=1 convention. None outside 1-7.
pub fn day_name(day_of_week: u8) -> Option<&'static str> {
    match day_of_week {
        1 => Some("Sunday"),
        2 => Some("Monday"),
        3 => Some("Tuesday"),
        4 => Some("Wednesday"),
        5 => Some("Thursday"),
        6 => Some("Friday"),
        7 => Some("Saturday"),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("test invariant failed: invalid date")
    }

    #[test]
    fn test_full_week_mapping() {
        // 2024-06-10 is a Monday; walk one full calendar week
        let expected: [u8; 7] = [2, 3, 4, 5, 6, 7, 1];
        for (offset, expected_dow) in expected.iter().enumerate() {
            let d = date(2024, 6, 10 + offset as u32);
            let dow = demand_day_of_week(&d);
            assert_eq!(dow, *expected_dow, "wrong mapping for {d}");
            assert!((1..=7).contains(&dow));
        }
    }

    #[test]
    fn test_saturday_passes_through() {
        // calendar weekday 5, intermediate 7, no wrap
        let saturday = date(2024, 6, 15);
        assert_eq!(demand_day_of_week(&saturday), 7);
        assert!(is_weekend(7));
    }

    #[test]
    fn test_sunday_wraps_from_eight_to_one() {
        // calendar weekday 6, intermediate 8, the only wrapping case
        let sunday = date(2024, 6, 16);
        assert_eq!(demand_day_of_week(&sunday), 1);
        assert!(is_weekend(1));
    }

    #[test]
    fn test_weekdays_are_not_weekend() {
        for dow in 2..=6 {
            assert!(!is_weekend(dow), "day {dow} wrongly flagged as weekend");
        }
    }

    #[test]
    fn test_day_names() {
        assert_eq!(day_name(1), Some("Sunday"));
        assert_eq!(day_name(4), Some("Wednesday"));
        assert_eq!(day_name(7), Some("Saturday"));
        assert_eq!(day_name(0), None);
        assert_eq!(day_name(8), None);
    }
}
