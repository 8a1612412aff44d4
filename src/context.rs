//! Application Context
//!
//! Browser-backed services plus the signals views render from, provided via
//! the Leptos Context API.

use leptos::prelude::*;
use std::rc::Rc;

use superclient_core::{
    ApiConfig, AppEvent, ContactEditor, ContactStore, ContactStoreConfig, EventBus,
    KeyValueStore, NotificationLog, Scheduler, Session, SessionConfig,
};

use crate::browser::{self, BrowserStorage, TimeoutScheduler};
use crate::models::Contact;

/// Services that own non-`Send` state; kept in local storage of the arena
pub struct Services {
    pub events: EventBus,
    pub contacts: ContactStore,
    pub editor: ContactEditor,
    pub session: Session,
    pub notifications: NotificationLog,
    pub api: ApiConfig,
}

impl Services {
    pub fn browser() -> Self {
        let storage: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
        let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler);
        let events = EventBus::new();

        let contacts = ContactStore::new(
            storage.clone(),
            scheduler,
            events.clone(),
            ContactStoreConfig::default(),
        );
        contacts.load();

        Self {
            editor: ContactEditor::new(contacts.clone()),
            session: Session::new(storage.clone(), events.clone(), SessionConfig::default()),
            notifications: NotificationLog::new(storage, events.clone()),
            contacts,
            events,
            api: browser::api_config(),
        }
    }
}

/// App-wide services and signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Services, LocalStorage>,
    /// Mirror of the contact collection - read
    pub contacts: ReadSignal<Vec<Contact>>,
    set_contacts: WriteSignal<Vec<Contact>>,
    /// Contact open read-only - read
    pub selected_contact: ReadSignal<Option<Contact>>,
    set_selected_contact: WriteSignal<Option<Contact>>,
    /// Contact edit form - read
    pub contact_form: ReadSignal<Option<Contact>>,
    set_contact_form: WriteSignal<Option<Contact>>,
    /// Bumped on every contacts-change event (commits, "mark as seen")
    pub contacts_version: ReadSignal<u32>,
    set_contacts_version: WriteSignal<u32>,
    pub logged_in: ReadSignal<bool>,
    set_logged_in: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(services: Services) -> Self {
        let (contacts, set_contacts) = signal(services.contacts.contacts());
        let (logged_in, set_logged_in) = signal(services.session.is_logged_in());
        let (selected_contact, set_selected_contact) = signal(None);
        let (contact_form, set_contact_form) = signal(None);
        let (contacts_version, set_contacts_version) = signal(0u32);

        let ctx = Self {
            services: StoredValue::new_local(services),
            contacts,
            set_contacts,
            selected_contact,
            set_selected_contact,
            contact_form,
            set_contact_form,
            contacts_version,
            set_contacts_version,
            logged_in,
            set_logged_in,
        };

        ctx.with_services(|s| {
            s.events.subscribe(move |event| {
                ctx.on_event(event);
                browser::dispatch(event);
            })
        });
        ctx
    }

    /// Run `f` against the services; `None` once the app has been torn down
    pub fn with_services<R>(&self, f: impl FnOnce(&Services) -> R) -> Option<R> {
        self.services.try_with_value(f)
    }

    /// Apply an edit-session operation and refresh the views that depend on it
    pub fn edit_contacts(&self, f: impl FnOnce(&mut ContactEditor)) {
        let snapshot = self.services.try_update_value(|s| {
            f(&mut s.editor);
            (
                s.editor.selected().cloned(),
                s.editor.form().cloned(),
                s.contacts.contacts(),
            )
        });
        if let Some((selected, form, contacts)) = snapshot {
            self.set_selected_contact.set(selected);
            self.set_contact_form.set(form);
            self.set_contacts.set(contacts);
        }
    }

    fn on_event(&self, event: AppEvent) {
        match event {
            AppEvent::ContactsChanged => {
                if let Some(contacts) = self.with_services(|s| s.contacts.contacts()) {
                    self.set_contacts.set(contacts);
                }
                self.set_contacts_version.update(|v| *v += 1);
            }
            AppEvent::AuthChanged => {
                if let Some(logged_in) = self.with_services(|s| s.session.is_logged_in()) {
                    self.set_logged_in.set(logged_in);
                }
            }
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
