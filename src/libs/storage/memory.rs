use log::debug;

use crate::libs::core::models::{Contact, DashboardRole, Message};
use crate::libs::seed;
use crate::libs::storage::storage_traits::{ChatStore, ContactDirectory, MessageStore, StoreError};

/// In-memory store backed by the seed fixtures. Messages stored at
/// runtime are appended after the seeded log for their dashboard, in
/// store order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stored: Vec<(DashboardRole, Message)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactDirectory for MemoryStore {
    fn load_contacts(&mut self, viewer: DashboardRole) -> Result<Vec<Contact>, StoreError> {
        Ok(seed::contacts(viewer))
    }
}

impl MessageStore for MemoryStore {
    fn load_messages(&mut self, viewer: DashboardRole) -> Result<Vec<Message>, StoreError> {
        let mut log = seed::messages(viewer);
        log.extend(
            self.stored
                .iter()
                .filter(|(role, _)| *role == viewer)
                .map(|(_, message)| message.clone()),
        );
        Ok(log)
    }

    fn store_message(
        &mut self,
        viewer: DashboardRole,
        message: &Message,
    ) -> Result<(), StoreError> {
        debug!("storing message {} for {} chat", message.id, viewer);
        self.stored.push((viewer, message.clone()));
        Ok(())
    }
}

impl ChatStore for MemoryStore {}
