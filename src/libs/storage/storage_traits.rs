use thiserror::Error;

use crate::libs::core::models::{Contact, DashboardRole, Message};

pub trait ContactDirectory {
    fn load_contacts(&mut self, viewer: DashboardRole) -> Result<Vec<Contact>, StoreError>;
}

pub trait MessageStore {
    fn load_messages(&mut self, viewer: DashboardRole) -> Result<Vec<Message>, StoreError>;
    fn store_message(&mut self, viewer: DashboardRole, message: &Message)
        -> Result<(), StoreError>;
}

/// The seam a messaging backend plugs into. The in-memory implementation
/// in `storage::memory` is the only one shipped here.
pub trait ChatStore: ContactDirectory + MessageStore {}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("contact roster unavailable: {0}")]
    RosterUnavailable(String),
    #[error("message log unavailable: {0}")]
    LogUnavailable(String),
    #[error("backend error: {0}")]
    Backend(String),
}
