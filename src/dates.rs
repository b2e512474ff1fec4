use chrono::{Datelike, NaiveDate};

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const LOCAL_MONTHS: [&str; 12] = [
    "Янв.", "Фев.", "Март", "Апр.", "Май", "Июнь", "Июль", "Авг.", "Сент.", "Окт.", "Нояб.", "Дек.",
];

pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn iso_format(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn display_format(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{weekday}, {month} {}, {}", date.day(), date.year())
}

pub fn display_format_str(value: &str) -> String {
    parse_iso(value).map(display_format).unwrap_or_default()
}

pub fn dotted_to_iso(value: &str) -> String {
    value.split('.').rev().collect::<Vec<_>>().join("-")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

pub fn generate_range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange {
        next: (start <= end).then_some(start),
        end,
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|date| *date <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map(|next| (self.end - next).num_days() as usize + 1)
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRange {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_format_pads_fields() {
        assert_eq!(iso_format(date(2024, 7, 5)), "2024-07-05");
        assert_eq!(iso_format(date(987, 12, 31)), "0987-12-31");
    }

    #[test]
    fn iso_round_trip_keeps_calendar_day() {
        let start = date(2023, 12, 25);
        for offset in 0..800 {
            let day = start + Duration::days(offset);
            assert_eq!(parse_iso(&iso_format(day)), Some(day));
        }
    }

    #[test]
    fn display_format_uses_calendar_weekdays() {
        assert_eq!(display_format(date(2024, 1, 2)), "Tuesday, January 2, 2024");
        assert_eq!(display_format(date(2024, 1, 3)), "Wednesday, January 3, 2024");
        assert_eq!(display_format(date(2024, 1, 4)), "Thursday, January 4, 2024");
        assert_eq!(display_format(date(2024, 7, 14)), "Sunday, July 14, 2024");
    }

    #[test]
    fn display_format_str_tolerates_empty_input() {
        assert_eq!(display_format_str(""), "");
        assert_eq!(display_format_str("not a date"), "");
        assert_eq!(display_format_str("2024-02-29"), "Thursday, February 29, 2024");
    }

    #[test]
    fn dotted_dates_become_iso() {
        assert_eq!(dotted_to_iso("15.07.2024"), "2024-07-15");
    }

    #[test]
    fn range_single_day() {
        let day = date(2024, 3, 10);
        assert_eq!(generate_range(day, day).collect::<Vec<_>>(), vec![day]);
    }

    #[test]
    fn range_reversed_is_empty() {
        assert_eq!(generate_range(date(2024, 3, 10), date(2024, 3, 9)).count(), 0);
    }

    #[test]
    fn range_length_and_restart() {
        let start = date(2023, 2, 27);
        let end = date(2024, 3, 2);
        let range = generate_range(start, end);
        let expected = (end - start).num_days() as usize + 1;
        assert_eq!(range.len(), expected);

        let first: Vec<_> = range.clone().collect();
        let second: Vec<_> = range.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), expected);
        assert_eq!(first.first(), Some(&start));
        assert_eq!(first.last(), Some(&end));
        assert!(first.windows(2).all(|pair| pair[1] - pair[0] == Duration::days(1)));
    }
}
