//! Change Notifications
//!
//! In-process publish/subscribe for application-wide events. The UI mirrors
//! each event onto the window as a DOM event of the same name.

use std::cell::RefCell;
use std::rc::Rc;

/// Events other parts of the application react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppEvent {
    /// The stored contacts (or their acknowledgement state) changed
    ContactsChanged,
    /// The session was established or dropped
    AuthChanged,
}

impl AppEvent {
    /// Name of the matching window event
    pub fn dom_name(&self) -> &'static str {
        match self {
            AppEvent::ContactsChanged => "contacts-change",
            AppEvent::AuthChanged => "auth-change",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(AppEvent)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

/// Cheaply clonable event bus; clones share the same listeners
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Rc<RefCell<Listeners>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(AppEvent) + 'static) -> SubscriptionId {
        let mut listeners = self.listeners.borrow_mut();
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().entries.retain(|(entry, _)| *entry != id);
    }

    /// Deliver `event` to every listener registered at the time of the call.
    /// Listeners may subscribe, unsubscribe or emit from inside the callback.
    pub fn emit(&self, event: AppEvent) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        log::debug!("emit {} to {} listener(s)", event.dom_name(), snapshot.len());
        for listener in snapshot {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_subscribers() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        bus.subscribe(move |event| sink.borrow_mut().push(event));

        bus.emit(AppEvent::ContactsChanged);
        bus.emit(AppEvent::AuthChanged);
        assert_eq!(*seen.borrow(), vec![AppEvent::ContactsChanged, AppEvent::AuthChanged]);
    }

    #[test]
    fn test_unsubscribe() {
        let bus = EventBus::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let id = bus.subscribe(move |_| counter.set(counter.get() + 1));

        bus.emit(AppEvent::ContactsChanged);
        bus.unsubscribe(id);
        bus.emit(AppEvent::ContactsChanged);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_listener_can_subscribe_during_emit() {
        let bus = EventBus::new();
        let inner = bus.clone();
        bus.subscribe(move |_| {
            inner.subscribe(|_| {});
        });
        bus.emit(AppEvent::AuthChanged);
    }

    #[test]
    fn test_dom_names() {
        assert_eq!(AppEvent::ContactsChanged.dom_name(), "contacts-change");
        assert_eq!(AppEvent::AuthChanged.dom_name(), "auth-change");
    }
}
