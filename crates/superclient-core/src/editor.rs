//! Contact Edit Session
//!
//! Tracks which contact is being viewed or edited. While a form is open,
//! every edit that leaves it with some content is upserted into the
//! [`ContactStore`] right away; save does the same and closes the form.

use crate::domain::{sanitize_phone, Contact, ContactListField};
use crate::repository::ContactStore;

pub struct ContactEditor {
    store: ContactStore,
    /// Contact shown read-only
    selected: Option<Contact>,
    /// Working copy in the edit form
    form: Option<Contact>,
}

impl ContactEditor {
    pub fn new(store: ContactStore) -> Self {
        Self {
            store,
            selected: None,
            form: None,
        }
    }

    pub fn selected(&self) -> Option<&Contact> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> Option<&Contact> {
        self.form.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_some()
    }

    /// Start a blank form for a new contact with the given id
    pub fn open_new(&mut self, id: impl Into<String>) {
        self.selected = None;
        self.form = Some(Contact::blank(id));
    }

    /// Show a contact read-only, closing any open form
    pub fn open(&mut self, contact: Contact) {
        self.selected = Some(contact);
        self.form = None;
    }

    pub fn close_view(&mut self) {
        self.selected = None;
    }

    /// Switch from the read-only view to editing that contact
    pub fn edit_selected(&mut self) {
        if let Some(contact) = self.selected.take() {
            self.form = Some(contact.for_editing());
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.edit(|form| form.name = name);
    }

    pub fn set_birthday(&mut self, birthday: impl Into<String>) {
        let birthday = birthday.into();
        self.edit(|form| form.birthday = birthday);
    }

    /// Update one list entry; phone numbers keep digits only
    pub fn set_list_entry(&mut self, field: ContactListField, index: usize, value: &str) {
        let value = match field {
            ContactListField::Phones => sanitize_phone(value),
            _ => value.to_string(),
        };
        self.edit(|form| form.set_list_entry(field, index, value));
    }

    pub fn add_list_entry(&mut self, field: ContactListField) {
        self.edit(|form| form.add_list_entry(field));
    }

    pub fn remove_list_entry(&mut self, field: ContactListField, index: usize) {
        self.edit(|form| form.remove_list_entry(field, index));
    }

    /// Upsert the form and close it
    pub fn save(&mut self) {
        if let Some(form) = self.form.take() {
            self.store.upsert(form);
        }
    }

    /// Remove the contact being edited and close the form
    pub fn delete(&mut self) {
        if let Some(form) = self.form.take() {
            self.store.remove(&form.id);
        }
    }

    /// Close the form; edits already auto-saved stay saved
    pub fn cancel(&mut self) {
        self.form = None;
    }

    fn edit(&mut self, f: impl FnOnce(&mut Contact)) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        f(form);
        if form.has_content() {
            self.store.upsert(form.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContactStoreConfig;
    use crate::events::EventBus;
    use crate::repository::{read_contacts, MemoryStore};
    use crate::scheduler::ManualScheduler;
    use std::rc::Rc;
    use std::time::Duration;

    fn setup() -> (Rc<MemoryStore>, ManualScheduler, ContactStore, ContactEditor) {
        let storage = Rc::new(MemoryStore::new());
        let scheduler = ManualScheduler::new();
        let store = ContactStore::new(
            storage.clone(),
            Rc::new(scheduler.clone()),
            EventBus::new(),
            ContactStoreConfig::default(),
        );
        store.load();
        let editor = ContactEditor::new(store.clone());
        (storage, scheduler, store, editor)
    }

    #[test]
    fn test_blank_form_is_not_saved() {
        let (_, _, store, mut editor) = setup();
        editor.open_new("contact-1");
        editor.add_list_entry(ContactListField::Emails);
        editor.set_name("   ");
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_with_content_autosaves() {
        let (storage, scheduler, store, mut editor) = setup();
        editor.open_new("contact-1");
        editor.set_name("A");
        editor.set_name("Ana");
        editor.set_list_entry(ContactListField::Phones, 0, "(11) 99999-1234");

        assert_eq!(store.len(), 1);
        let saved = store.get("contact-1").unwrap();
        assert_eq!(saved.name, "Ana");
        assert_eq!(saved.phones, vec!["11999991234".to_string()]);
        assert!(editor.is_editing());

        scheduler.advance(Duration::from_millis(300));
        assert_eq!(storage.write_count(), 1);
        let persisted = read_contacts(&*storage, "contacts_v1").unwrap().unwrap();
        assert_eq!(persisted, vec![saved]);
    }

    #[test]
    fn test_save_closes_form() {
        let (_, _, store, mut editor) = setup();
        editor.open_new("contact-1");
        editor.save();
        assert!(!editor.is_editing());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_edit_existing_then_delete() {
        let (_, _, store, mut editor) = setup();
        editor.open_new("contact-1");
        editor.set_name("Ana");
        editor.save();

        editor.open(store.get("contact-1").unwrap());
        assert!(editor.selected().is_some());
        editor.edit_selected();
        assert!(editor.selected().is_none());
        editor.set_birthday("1990-06-05");
        assert_eq!(store.get("contact-1").unwrap().birthday, "1990-06-05");

        editor.delete();
        assert!(!editor.is_editing());
        assert!(store.is_empty());
    }

    #[test]
    fn test_edits_without_form_are_ignored() {
        let (_, _, store, mut editor) = setup();
        editor.set_name("Ana");
        editor.save();
        editor.delete();
        assert!(store.is_empty());
    }

    #[test]
    fn test_cancel_keeps_autosaved_edits() {
        let (_, _, store, mut editor) = setup();
        editor.open_new("contact-1");
        editor.set_list_entry(ContactListField::Comments, 0, "cliente desde 2019");
        editor.cancel();
        assert!(!editor.is_editing());
        assert_eq!(store.get("contact-1").unwrap().comments[0], "cliente desde 2019");
    }
}
