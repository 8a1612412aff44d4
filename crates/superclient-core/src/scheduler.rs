//! Delayed Tasks
//!
//! The persistence layer debounces writes through a [`Scheduler`]. The
//! browser build backs it with `setTimeout`; [`ManualScheduler`] runs tasks
//! on a virtual clock so debounce behaviour can be driven step by step.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Work to run once the delay elapses
pub type Task = Box<dyn FnOnce()>;

/// Runs a task after a delay and hands back a cancellation handle
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask;
}

/// Handle to a scheduled task.
///
/// Cancelling or dropping the handle before the task ran prevents it from
/// running. Doing so after it ran is a no-op.
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_seq: u64,
    /// Keyed by (due time, insertion order)
    tasks: BTreeMap<(Duration, u64), Task>,
}

/// Scheduler driven by [`ManualScheduler::advance`] instead of wall time
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far
    pub fn now(&self) -> Duration {
        self.timeline.borrow().now
    }

    /// Number of tasks waiting to run
    pub fn pending(&self) -> usize {
        self.timeline.borrow().tasks.len()
    }

    /// Move the clock forward, running every task that falls due in order.
    /// Tasks scheduled by running tasks are honoured within the same call.
    pub fn advance(&self, by: Duration) {
        let target = self.timeline.borrow().now + by;
        loop {
            let task = {
                let mut timeline = self.timeline.borrow_mut();
                let key = match timeline.tasks.keys().next() {
                    Some(key) if key.0 <= target => *key,
                    _ => break,
                };
                timeline.now = key.0;
                timeline.tasks.remove(&key)
            };
            if let Some(task) = task {
                task();
            }
        }
        self.timeline.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        let key = {
            let mut timeline = self.timeline.borrow_mut();
            let key = (timeline.now + delay, timeline.next_seq);
            timeline.next_seq += 1;
            timeline.tasks.insert(key, task);
            key
        };

        let timeline: Weak<RefCell<Timeline>> = Rc::downgrade(&self.timeline);
        ScheduledTask::new(move || {
            if let Some(timeline) = timeline.upgrade() {
                timeline.borrow_mut().tasks.remove(&key);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Task) {
        let hits = Rc::new(Cell::new(0));
        let make = {
            let hits = hits.clone();
            move || -> Task {
                let hits = hits.clone();
                Box::new(move || hits.set(hits.get() + 1))
            }
        };
        (hits, make)
    }

    #[test]
    fn test_task_runs_when_due() {
        let scheduler = ManualScheduler::new();
        let (hits, task) = counter();
        let _handle = scheduler.schedule(Duration::from_millis(300), task());

        scheduler.advance(Duration::from_millis(299));
        assert_eq!(hits.get(), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancel_prevents_run() {
        let scheduler = ManualScheduler::new();
        let (hits, task) = counter();
        let handle = scheduler.schedule(Duration::from_millis(10), task());
        handle.cancel();

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_drop_cancels() {
        let scheduler = ManualScheduler::new();
        let (hits, task) = counter();
        drop(scheduler.schedule(Duration::from_millis(10), task()));

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_tasks_run_in_due_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut handles = Vec::new();
        for (label, ms) in [("late", 50u64), ("early", 10), ("mid", 30)] {
            let order = order.clone();
            handles.push(scheduler.schedule(
                Duration::from_millis(ms),
                Box::new(move || order.borrow_mut().push(label)),
            ));
        }

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(*order.borrow(), vec!["early", "mid", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(100));
    }
}
