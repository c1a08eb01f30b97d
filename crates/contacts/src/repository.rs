//! Contact storage.

use crate::contact::Contact;
use crate::error::{ContactError, Result};
use std::collections::BTreeMap;

/// A trait for the storage operations on contacts.
pub trait ContactRepository {
    /// Store a contact under its own id.
    ///
    /// If a contact with the same id exists it is overwritten.
    fn save_contact(&mut self, contact: Contact) -> Result<Contact>;

    /// Load the contact stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::NoSuchModel` if no contact has that id.
    fn load_contact(&self, id: u64) -> Result<Contact>;

    /// Load every stored contact, ordered by id.
    fn load_all_contacts(&self) -> Result<Vec<Contact>>;

    /// Replace the contact stored under `id`. The stored contact takes `id`
    /// regardless of the id carried by `contact`.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::NoSuchModel` if no contact has that id.
    fn update_contact(&mut self, id: u64, contact: Contact) -> Result<Contact>;

    /// Remove the contact stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::NoSuchModel` if no contact has that id.
    fn delete_contact(&mut self, id: u64) -> Result<()>;
}

/// Contact repository backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: BTreeMap<u64, Contact>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given contacts.
    pub fn from_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        Self {
            contacts: contacts
                .into_iter()
                .map(|contact| (contact.id(), contact))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn save_contact(&mut self, contact: Contact) -> Result<Contact> {
        tracing::info!(
            id = contact.id(),
            first_name = contact.first_name(),
            last_name = contact.last_name(),
            star = contact.star(),
            "Saving contact"
        );
        self.contacts.insert(contact.id(), contact.clone());
        Ok(contact)
    }

    fn load_contact(&self, id: u64) -> Result<Contact> {
        self.contacts
            .get(&id)
            .cloned()
            .ok_or(ContactError::NoSuchModel(id))
    }

    fn load_all_contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.values().cloned().collect())
    }

    fn update_contact(&mut self, id: u64, contact: Contact) -> Result<Contact> {
        let stored = self
            .contacts
            .get_mut(&id)
            .ok_or(ContactError::NoSuchModel(id))?;
        *stored = contact.with_id(id);
        tracing::info!(id, "Updated contact");
        Ok(stored.clone())
    }

    fn delete_contact(&mut self, id: u64) -> Result<()> {
        self.contacts
            .remove(&id)
            .map(|_| tracing::info!(id, "Deleted contact"))
            .ok_or(ContactError::NoSuchModel(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::ContactFixture;

    fn contact(id: u64, first_name: &str) -> Contact {
        Contact::new(id, first_name, "Repository", false).unwrap()
    }

    #[test]
    fn test_load_non_existent_model() {
        let repository = InMemoryContactRepository::new();
        let err = repository.load_contact(999).unwrap_err();
        assert!(matches!(err, ContactError::NoSuchModel(999)));
    }

    #[test]
    fn test_save_and_load() {
        let mut fixture = ContactFixture::seeded(42);
        let mut repository = InMemoryContactRepository::new();

        let saved = repository.save_contact(fixture.build().unwrap()).unwrap();

        assert_eq!(repository.load_contact(saved.id()).unwrap(), saved);
        assert_eq!(repository.len(), 1);
    }

    #[test]
    fn test_save_overwrites_same_id() {
        let mut repository = InMemoryContactRepository::new();
        repository.save_contact(contact(1, "First")).unwrap();
        repository.save_contact(contact(1, "Second")).unwrap();

        assert_eq!(repository.len(), 1);
        assert_eq!(repository.load_contact(1).unwrap().first_name(), "Second");
    }

    #[test]
    fn test_load_all_ordered_by_id() {
        let repository =
            InMemoryContactRepository::from_contacts([contact(7, "b"), contact(2, "a")]);

        let ids: Vec<u64> = repository
            .load_all_contacts()
            .unwrap()
            .iter()
            .map(Contact::id)
            .collect();
        assert_eq!(ids, vec![2, 7]);
    }

    #[test]
    fn test_update_keeps_path_id() {
        let mut repository = InMemoryContactRepository::from_contacts([contact(1, "Old")]);

        let updated = repository.update_contact(1, contact(5, "New")).unwrap();

        assert_eq!(updated.id(), 1);
        assert_eq!(repository.load_contact(1).unwrap().first_name(), "New");
        assert!(repository.load_contact(5).is_err());
    }

    #[test]
    fn test_update_missing() {
        let mut repository = InMemoryContactRepository::new();
        let err = repository.update_contact(3, contact(3, "x")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete() {
        let mut repository = InMemoryContactRepository::from_contacts([contact(1, "x")]);

        repository.delete_contact(1).unwrap();

        assert!(repository.is_empty());
        assert!(repository.delete_contact(1).unwrap_err().is_not_found());
    }
}
