use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::contact::Contact;

/// In-memory aggregate of contact records. This is the whole unit the
/// storage contract persists and returns; it serializes as a bare
/// id-to-contact map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    contacts: HashMap<Uuid, Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self {
            contacts: HashMap::new(),
        }
    }

    pub fn add(&mut self, contact: Contact) {
        self.contacts.insert(contact.id, contact);
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<Contact> {
        self.contacts.remove(id)
    }

    pub fn get(&self, id: &Uuid) -> Option<&Contact> {
        self.contacts.get(id)
    }

    /// True when a contact with the same identity (name and phone)
    /// is already in the book.
    pub fn contains(&self, contact: &Contact) -> bool {
        self.contacts.values().any(|cont| cont == contact)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    pub fn find_by_name(&self, name: &str) -> Vec<&Contact> {
        self.contacts
            .values()
            .filter(|cont| cont.name == name)
            .collect()
    }
}

impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.contacts == other.contacts
    }
}

impl Eq for AddressBook {}

impl FromIterator<Contact> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().map(|cont| (cont.id, cont)).collect(),
        }
    }
}
