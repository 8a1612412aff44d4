//! Contact Repository
//!
//! Keeps the contact collection in memory and mirrors it to the key-value
//! store. Every change after the initial load (re)arms a debounce timer; when
//! it fires the whole collection is written and `ContactsChanged` is emitted.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use super::traits::KeyValueStore;
use crate::config::ContactStoreConfig;
use crate::domain::{remove_by_id, upsert_by_id, Contact};
use crate::error::ContactsDecodeError;
use crate::events::{AppEvent, EventBus};
use crate::scheduler::{ScheduledTask, Scheduler};

/// Read the stored collection; `Ok(None)` when nothing is stored.
pub fn read_contacts(
    storage: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<Vec<Contact>>, ContactsDecodeError> {
    match storage.get(key) {
        Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

#[derive(Default)]
struct State {
    contacts: Vec<Contact>,
    loaded: bool,
    pending_write: Option<ScheduledTask>,
}

struct Shared {
    storage: Rc<dyn KeyValueStore>,
    scheduler: Rc<dyn Scheduler>,
    events: EventBus,
    config: ContactStoreConfig,
    state: RefCell<State>,
}

/// Handle to the contact collection; clones share the same state
#[derive(Clone)]
pub struct ContactStore {
    shared: Rc<Shared>,
}

impl ContactStore {
    pub fn new(
        storage: Rc<dyn KeyValueStore>,
        scheduler: Rc<dyn Scheduler>,
        events: EventBus,
        config: ContactStoreConfig,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                storage,
                scheduler,
                events,
                config,
                state: RefCell::new(State::default()),
            }),
        }
    }

    /// Populate from storage and start persisting changes.
    ///
    /// A malformed payload is dropped and its key removed; the collection
    /// then starts empty.
    pub fn load(&self) {
        let shared = &self.shared;
        let key = &shared.config.storage_key;
        let contacts = match read_contacts(shared.storage.as_ref(), key) {
            Ok(Some(contacts)) => contacts,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("[CONTACTS] {}; resetting", err);
                shared.storage.remove(key);
                Vec::new()
            }
        };
        debug!("[CONTACTS] loaded {} contact(s)", contacts.len());

        let mut state = shared.state.borrow_mut();
        state.contacts = contacts;
        state.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.shared.state.borrow().loaded
    }

    /// Snapshot of the collection
    pub fn contacts(&self) -> Vec<Contact> {
        self.shared.state.borrow().contacts.clone()
    }

    pub fn with_contacts<R>(&self, f: impl FnOnce(&[Contact]) -> R) -> R {
        f(&self.shared.state.borrow().contacts)
    }

    pub fn get(&self, id: &str) -> Option<Contact> {
        self.with_contacts(|contacts| contacts.iter().find(|c| c.id == id).cloned())
    }

    pub fn len(&self) -> usize {
        self.with_contacts(<[Contact]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert at the front, or replace the contact with the same id in place
    pub fn upsert(&self, contact: Contact) {
        self.mutate(|contacts| {
            upsert_by_id(contacts, contact);
        });
    }

    /// Remove by id; returns whether a contact was removed
    pub fn remove(&self, id: &str) -> bool {
        let mut removed = false;
        self.mutate(|contacts| removed = remove_by_id(contacts, id));
        removed
    }

    /// Whether a debounced write is armed and has not fired yet
    #[cfg(test)]
    pub(crate) fn has_pending_write(&self) -> bool {
        self.shared.state.borrow().pending_write.is_some()
    }

    /// Write immediately, cancelling any pending debounce
    pub fn flush(&self) {
        let pending = self.shared.state.borrow_mut().pending_write.take();
        if let Some(task) = pending {
            task.cancel();
            commit(&self.shared);
        }
    }

    fn mutate(&self, f: impl FnOnce(&mut Vec<Contact>)) {
        let loaded = {
            let mut state = self.shared.state.borrow_mut();
            f(&mut state.contacts);
            state.loaded
        };
        if loaded {
            self.schedule_write();
        }
    }

    fn schedule_write(&self) {
        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let task = self.shared.scheduler.schedule(
            self.shared.config.debounce,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.state.borrow_mut().pending_write = None;
                    commit(&shared);
                }
            }),
        );

        // Replacing the previous handle cancels it
        let previous = self.shared.state.borrow_mut().pending_write.replace(task);
        drop(previous);
    }
}

fn commit(shared: &Shared) {
    let payload = serde_json::to_string(&shared.state.borrow().contacts);
    match payload {
        Ok(json) => {
            shared.storage.set(&shared.config.storage_key, &json);
            debug!("[CONTACTS] committed {} bytes", json.len());
        }
        Err(err) => {
            warn!("[CONTACTS] failed to serialize contacts: {}", err);
            return;
        }
    }
    shared.events.emit(AppEvent::ContactsChanged);
}
