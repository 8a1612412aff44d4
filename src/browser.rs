//! Browser Services
//!
//! `localStorage`, `setTimeout`, window events and clocks behind the core
//! crate's traits.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, Utc};
use gloo_timers::callback::Timeout;
use superclient_core::scheduler::Task;
use superclient_core::{ApiConfig, AppEvent, KeyValueStore, ScheduledTask, Scheduler};

/// `window.localStorage`
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("[STORAGE] localStorage unavailable, dropping write to {}", key);
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("[STORAGE] failed to write {}: {:?}", key, err);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// `setTimeout` via gloo. Cancelling flips a flag the callback checks, so a
/// handle can be dropped from inside its own callback.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

        let _ = Timeout::new(millis, move || {
            if !flag.get() {
                task();
            }
        })
        .forget();

        ScheduledTask::new(move || cancelled.set(true))
    }
}

/// Re-broadcast an application event as a window event of the same name
pub fn dispatch(event: AppEvent) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(dom_event) = web_sys::Event::new(event.dom_name()) {
        let _ = window.dispatch_event(&dom_event);
    }
}

/// API location for this build
pub fn api_config() -> ApiConfig {
    let location = web_sys::window().map(|w| w.location());
    let protocol = location
        .as_ref()
        .and_then(|l| l.protocol().ok())
        .unwrap_or_else(|| "http:".to_string());
    let hostname = location
        .as_ref()
        .and_then(|l| l.hostname().ok())
        .unwrap_or_else(|| "localhost".to_string());
    ApiConfig::resolve(
        cfg!(debug_assertions),
        &protocol,
        &hostname,
        option_env!("SUPERCLIENT_API_URL"),
    )
}

/// Milliseconds since the epoch, as a monotonic-enough clock for throttling
pub fn clock() -> Duration {
    Duration::from_millis(js_sys::Date::now() as u64)
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
