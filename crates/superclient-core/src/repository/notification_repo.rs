//! Notification acknowledgement
//!
//! Remembers when the user last marked the birthday notifications as seen.

use std::rc::Rc;

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

use super::traits::KeyValueStore;
use crate::events::{AppEvent, EventBus};

pub const NOTIFICATIONS_SEEN_KEY: &str = "notifications_seen_at";

pub struct NotificationLog {
    storage: Rc<dyn KeyValueStore>,
    events: EventBus,
}

impl NotificationLog {
    pub fn new(storage: Rc<dyn KeyValueStore>, events: EventBus) -> Self {
        Self { storage, events }
    }

    /// Store `now` as the acknowledgement time and notify listeners
    pub fn mark_seen(&self, now: DateTime<Utc>) {
        let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        self.storage.set(NOTIFICATIONS_SEEN_KEY, &stamp);
        log::debug!("[NOTIFICATIONS] marked seen at {}", stamp);
        self.events.emit(AppEvent::ContactsChanged);
    }

    /// Last acknowledgement; unreadable values count as never seen
    pub fn seen_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.storage.get(NOTIFICATIONS_SEEN_KEY)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|stamp| stamp.with_timezone(&Utc))
            .ok()
    }

    /// Badge count: the upcoming birthdays, unless already acknowledged today.
    ///
    /// `today` is a calendar date in `tz`; the stored stamp is read in the
    /// same zone before comparing.
    pub fn unseen_count<Tz: TimeZone>(&self, upcoming: usize, today: NaiveDate, tz: &Tz) -> usize {
        match self.seen_at() {
            Some(seen) if seen.with_timezone(tz).date_naive() >= today => 0,
            _ => upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use chrono::FixedOffset;
    use std::cell::Cell;

    fn setup() -> (Rc<MemoryStore>, NotificationLog, Rc<Cell<u32>>) {
        let storage = Rc::new(MemoryStore::new());
        let events = EventBus::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        events.subscribe(move |_| counter.set(counter.get() + 1));
        let log = NotificationLog::new(storage.clone(), events);
        (storage, log, hits)
    }

    #[test]
    fn test_mark_seen_writes_iso_timestamp() {
        let (storage, log, hits) = setup();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        log.mark_seen(now);

        assert_eq!(
            storage.get(NOTIFICATIONS_SEEN_KEY).as_deref(),
            Some("2024-06-01T12:30:00.000Z")
        );
        assert_eq!(log.seen_at(), Some(now));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_unseen_count() {
        let (storage, log, _) = setup();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(log.unseen_count(3, today, &Utc), 3);

        log.mark_seen(Utc.with_ymd_and_hms(2024, 5, 31, 23, 0, 0).unwrap());
        assert_eq!(log.unseen_count(3, today, &Utc), 3);

        log.mark_seen(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap());
        assert_eq!(log.unseen_count(3, today, &Utc), 0);

        storage.set(NOTIFICATIONS_SEEN_KEY, "ontem");
        assert_eq!(log.seen_at(), None);
        assert_eq!(log.unseen_count(2, today, &Utc), 2);
    }

    #[test]
    fn test_unseen_count_uses_local_calendar_day() {
        let (_, log, _) = setup();
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();

        // 22:00 on Jun 1 in UTC-3 is already Jun 2 in UTC
        log.mark_seen(Utc.with_ymd_and_hms(2024, 6, 2, 1, 0, 0).unwrap());

        let jun_1 = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let jun_2 = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        assert_eq!(log.unseen_count(3, jun_1, &brasilia), 0);
        assert_eq!(log.unseen_count(3, jun_2, &brasilia), 3);
    }
}
