//! Contact Entity
//!
//! Contacts live only in the browser's key-value store. List fields hold at
//! least one (possibly blank) entry while being edited.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use super::entity::{deserialize_id, Entity};

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A person in the address book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// ISO date ("1990-06-05") or empty
    #[serde(default)]
    pub birthday: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}

/// The repeatable fields of a contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactListField {
    Phones,
    Emails,
    Addresses,
    Comments,
}

impl ContactListField {
    pub const ALL: [ContactListField; 4] = [
        ContactListField::Phones,
        ContactListField::Emails,
        ContactListField::Addresses,
        ContactListField::Comments,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactListField::Phones => "Telefones",
            ContactListField::Emails => "Emails",
            ContactListField::Addresses => "Enderecos",
            ContactListField::Comments => "Comentarios",
        }
    }
}

impl Contact {
    /// Blank form for a new contact. Each list starts with one empty entry.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            birthday: String::new(),
            phones: vec![String::new()],
            emails: vec![String::new()],
            addresses: vec![String::new()],
            comments: vec![String::new()],
        }
    }

    /// Id for a contact created at `epoch_millis`
    pub fn id_for(epoch_millis: u64) -> String {
        format!("contact-{}", epoch_millis)
    }

    pub fn list(&self, field: ContactListField) -> &[String] {
        match field {
            ContactListField::Phones => &self.phones,
            ContactListField::Emails => &self.emails,
            ContactListField::Addresses => &self.addresses,
            ContactListField::Comments => &self.comments,
        }
    }

    fn list_mut(&mut self, field: ContactListField) -> &mut Vec<String> {
        match field {
            ContactListField::Phones => &mut self.phones,
            ContactListField::Emails => &mut self.emails,
            ContactListField::Addresses => &mut self.addresses,
            ContactListField::Comments => &mut self.comments,
        }
    }

    /// Set entry `index` of a list field. Out-of-range indexes pad with blanks.
    pub fn set_list_entry(&mut self, field: ContactListField, index: usize, value: impl Into<String>) {
        let list = self.list_mut(field);
        if index >= list.len() {
            list.resize(index + 1, String::new());
        }
        list[index] = value.into();
    }

    /// Append a blank entry to a list field
    pub fn add_list_entry(&mut self, field: ContactListField) {
        self.list_mut(field).push(String::new());
    }

    /// Remove entry `index`; a list emptied this way collapses to `[""]`.
    pub fn remove_list_entry(&mut self, field: ContactListField, index: usize) {
        let list = self.list_mut(field);
        if index < list.len() {
            list.remove(index);
        }
        if list.is_empty() {
            list.push(String::new());
        }
    }

    /// Non-blank entries of a list field, for display and counts
    pub fn filled(&self, field: ContactListField) -> impl Iterator<Item = &str> {
        self.list(field).iter().map(String::as_str).filter(|v| !v.is_empty())
    }

    /// True when anything worth saving has been typed
    pub fn has_content(&self) -> bool {
        if !self.name.trim().is_empty() || !self.birthday.is_empty() {
            return true;
        }
        ContactListField::ALL
            .iter()
            .any(|field| self.list(*field).iter().any(|v| !v.trim().is_empty()))
    }

    /// Copy for the edit form: empty list fields become `[""]`
    pub fn for_editing(&self) -> Self {
        let mut form = self.clone();
        for field in ContactListField::ALL {
            let list = form.list_mut(field);
            if list.is_empty() {
                list.push(String::new());
            }
        }
        form
    }

    /// Name for cards, falling back when blank
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Sem nome"
        } else {
            &self.name
        }
    }
}

impl Entity for Contact {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Keep only the digits of a phone number
pub fn sanitize_phone(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Map search link for an address; `None` for a blank address
pub fn maps_search_url(address: &str) -> Option<String> {
    if address.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(address, URI_COMPONENT)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_contact_has_single_empty_entries() {
        let contact = Contact::blank(Contact::id_for(1_717_200_000_000));
        assert_eq!(contact.id, "contact-1717200000000");
        for field in ContactListField::ALL {
            assert_eq!(contact.list(field), &[String::new()]);
        }
        assert!(!contact.has_content());
    }

    #[test]
    fn test_has_content_ignores_whitespace() {
        let mut contact = Contact::blank("c1");
        contact.name = "   ".into();
        contact.set_list_entry(ContactListField::Emails, 0, "  ");
        assert!(!contact.has_content());

        contact.set_list_entry(ContactListField::Comments, 0, "ligar amanha");
        assert!(contact.has_content());
    }

    #[test]
    fn test_birthday_counts_as_content() {
        let mut contact = Contact::blank("c1");
        contact.birthday = "1990-06-05".into();
        assert!(contact.has_content());
    }

    #[test]
    fn test_remove_last_entry_collapses_to_blank() {
        let mut contact = Contact::blank("c1");
        contact.set_list_entry(ContactListField::Phones, 0, "11999991234");
        contact.remove_list_entry(ContactListField::Phones, 0);
        assert_eq!(contact.phones, vec![String::new()]);
    }

    #[test]
    fn test_add_and_remove_middle_entry() {
        let mut contact = Contact::blank("c1");
        contact.set_list_entry(ContactListField::Emails, 0, "a@x.com");
        contact.add_list_entry(ContactListField::Emails);
        contact.set_list_entry(ContactListField::Emails, 1, "b@x.com");
        contact.add_list_entry(ContactListField::Emails);
        contact.remove_list_entry(ContactListField::Emails, 1);

        assert_eq!(contact.emails, vec!["a@x.com".to_string(), String::new()]);
        assert_eq!(contact.filled(ContactListField::Emails).count(), 1);
    }

    #[test]
    fn test_sanitize_phone() {
        assert_eq!(sanitize_phone("+55 (11) 99999-1234"), "5511999991234");
        assert_eq!(sanitize_phone("abc"), "");
    }

    #[test]
    fn test_for_editing_restores_blank_entries() {
        let stored: Contact = serde_json::from_str(r#"{"id": "c2", "phones": ["119"]}"#).unwrap();
        let form = stored.for_editing();
        assert_eq!(form.phones, vec!["119".to_string()]);
        assert_eq!(form.emails, vec![String::new()]);
        assert_eq!(form.comments, vec![String::new()]);
    }

    #[test]
    fn test_maps_search_url() {
        assert_eq!(maps_search_url(""), None);
        assert_eq!(
            maps_search_url("Av. Paulista, 1000").as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=Av.%20Paulista%2C%201000")
        );
    }

    #[test]
    fn test_decode_partial_record() {
        let contact: Contact = serde_json::from_str(r#"{"id": "c9", "name": "Ana"}"#).unwrap();
        assert_eq!(contact.name, "Ana");
        assert!(contact.birthday.is_empty());
        assert!(contact.phones.is_empty());
        assert_eq!(contact.display_name(), "Ana");
    }
}
