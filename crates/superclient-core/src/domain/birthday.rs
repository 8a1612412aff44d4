//! Birthday Reminders
//!
//! Finds contacts whose next birthday falls within the coming week.

use chrono::{Datelike, Days, NaiveDate};

use super::contact::Contact;

/// Birthdays up to this many days ahead (inclusive) are reported
pub const REMINDER_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday is coming up
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingBirthday<'a> {
    pub contact: &'a Contact,
    /// Date of the next occurrence
    pub next: NaiveDate,
    /// Whole days from `today` to `next`
    pub diff_days: i64,
}

/// Contacts with a birthday in `[today, today + 7]`, nearest first.
///
/// Only month and day of the stored `YYYY-MM-DD` value matter. A day that
/// does not exist in the target year rolls forward (Feb 29 becomes Mar 1).
/// Ties keep collection order.
pub fn upcoming_birthdays(contacts: &[Contact], today: NaiveDate) -> Vec<UpcomingBirthday<'_>> {
    let mut upcoming: Vec<UpcomingBirthday<'_>> = contacts
        .iter()
        .filter(|contact| !contact.birthday.is_empty())
        .filter_map(|contact| {
            let (month, day) = month_day(&contact.birthday)?;
            let mut next = calendar_date(today.year(), month, day)?;
            if next < today {
                next = calendar_date(today.year() + 1, next.month(), next.day())?;
            }
            let diff_days = (next - today).num_days();
            Some(UpcomingBirthday { contact, next, diff_days })
        })
        .filter(|item| (0..=REMINDER_WINDOW_DAYS).contains(&item.diff_days))
        .collect();

    upcoming.sort_by_key(|item| item.diff_days);
    upcoming
}

/// Month and day of a `YYYY-MM-DD` string; zero or non-numeric parts are rejected.
fn month_day(birthday: &str) -> Option<(u32, u32)> {
    let mut parts = birthday.split('-').skip(1);
    let month = parts.next()?.trim().parse::<u32>().ok().filter(|m| *m > 0)?;
    let day = parts.next()?.trim().parse::<u32>().ok().filter(|d| *d > 0)?;
    Some((month, day))
}

/// Build a date the way a calendar with overflow would: month 13 is January
/// of the next year, day 31 of a 30-day month is the 1st of the next.
fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let year = year.checked_add(i32::try_from((month - 1) / 12).ok()?)?;
    let month = (month - 1) % 12 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact(id: &str, birthday: &str) -> Contact {
        let mut c = Contact::blank(id);
        c.name = format!("Contato {}", id);
        c.birthday = birthday.to_string();
        c
    }

    #[test]
    fn test_birthday_within_week() {
        let contacts = vec![contact("a", "1990-06-05")];
        let upcoming = upcoming_birthdays(&contacts, date(2024, 6, 1));

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].diff_days, 4);
        assert_eq!(upcoming[0].next, date(2024, 6, 5));
    }

    #[test]
    fn test_past_birthday_rolls_to_next_year_and_is_excluded() {
        let contacts = vec![contact("a", "1990-05-30")];
        assert!(upcoming_birthdays(&contacts, date(2024, 6, 1)).is_empty());
    }

    #[test]
    fn test_rollover_across_new_year() {
        let contacts = vec![contact("a", "1985-01-03")];
        let upcoming = upcoming_birthdays(&contacts, date(2024, 12, 30));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].next, date(2025, 1, 3));
        assert_eq!(upcoming[0].diff_days, 4);
    }

    #[test]
    fn test_today_and_window_edges() {
        let contacts = vec![
            contact("eight", "2000-06-09"),
            contact("seven", "2000-06-08"),
            contact("today", "2000-06-01"),
        ];
        let upcoming = upcoming_birthdays(&contacts, date(2024, 6, 1));
        let ids: Vec<_> = upcoming.iter().map(|u| u.contact.id.as_str()).collect();
        assert_eq!(ids, vec!["today", "seven"]);
        assert_eq!(upcoming[0].diff_days, 0);
        assert_eq!(upcoming[1].diff_days, 7);
    }

    #[test]
    fn test_sorted_by_distance_and_stable() {
        let contacts = vec![
            contact("late", "1990-06-06"),
            contact("first", "1980-06-03"),
            contact("second", "1970-06-03"),
        ];
        let upcoming = upcoming_birthdays(&contacts, date(2024, 6, 1));
        let ids: Vec<_> = upcoming.iter().map(|u| u.contact.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "late"]);
    }

    #[test]
    fn test_invalid_birthdays_are_skipped() {
        let contacts = vec![
            contact("empty", ""),
            contact("no-day", "1990-06"),
            contact("zero", "1990-00-10"),
            contact("text", "amanha"),
        ];
        assert!(upcoming_birthdays(&contacts, date(2024, 6, 1)).is_empty());
    }

    #[test]
    fn test_leap_day_rolls_forward_in_common_year() {
        let contacts = vec![contact("leap", "2000-02-29")];
        let upcoming = upcoming_birthdays(&contacts, date(2023, 2, 25));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].next, date(2023, 3, 1));
        assert_eq!(upcoming[0].diff_days, 4);
    }
}
