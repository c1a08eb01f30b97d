//! Contact business layer.

use crate::contact::Contact;
use crate::error::Result;
use crate::repository::ContactRepository;

/// Operations a web or CLI adapter needs from the contact domain.
pub trait ContactService {
    fn save_contact(&mut self, contact: Contact) -> Result<Contact>;

    fn load_contact(&self, id: u64) -> Result<Contact>;

    fn load_all_contacts(&self) -> Result<Vec<Contact>>;

    fn update_contact(&mut self, id: u64, contact: Contact) -> Result<Contact>;

    fn delete_contact(&mut self, id: u64) -> Result<()>;
}

/// [`ContactService`] delegating every operation to a repository.
#[derive(Debug, Clone, Default)]
pub struct RepositoryContactService<R> {
    repository: R,
}

impl<R: ContactRepository> RepositoryContactService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }
}

impl<R: ContactRepository> ContactService for RepositoryContactService<R> {
    fn save_contact(&mut self, contact: Contact) -> Result<Contact> {
        self.repository.save_contact(contact)
    }

    fn load_contact(&self, id: u64) -> Result<Contact> {
        self.repository.load_contact(id)
    }

    fn load_all_contacts(&self) -> Result<Vec<Contact>> {
        self.repository.load_all_contacts()
    }

    fn update_contact(&mut self, id: u64, contact: Contact) -> Result<Contact> {
        self.repository.update_contact(id, contact)
    }

    fn delete_contact(&mut self, id: u64) -> Result<()> {
        self.repository.delete_contact(id)
    }
}
