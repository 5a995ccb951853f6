use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type ContactId = u32;

/// Unique message identifier. Generated ids are UUIDv7 so they stay
/// time-ordered and never collide, unlike a log-length counter which
/// reuses ids once entries are removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId {
    pub uuid: Uuid,
}

impl MessageId {
    pub fn generate() -> Self {
        Self {
            uuid: Uuid::now_v7(),
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

/// One side of a message: the current user or a roster contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Party {
    Me,
    Contact(ContactId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Outgoing,
    Incoming,
}

/// The dashboard the viewer is logged into. Determines which roster and
/// seeded conversation log a chat starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardRole {
    Parent,
    Teacher,
    Volunteer,
}

impl fmt::Display for DashboardRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DashboardRole::Parent => write!(f, "parent"),
            DashboardRole::Teacher => write!(f, "teacher"),
            DashboardRole::Volunteer => write!(f, "volunteer"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub last_message: String,
    pub last_message_time: String,
    pub unread: u32,
}

impl Contact {
    pub fn new(
        id: ContactId,
        name: impl Into<String>,
        role: impl Into<String>,
        avatar: impl Into<String>,
        last_message: impl Into<String>,
        last_message_time: impl Into<String>,
        unread: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            avatar: avatar.into(),
            last_message: last_message.into(),
            last_message_time: last_message_time.into(),
            unread,
        }
    }
}

/// A single entry in the flat message log. Exactly one of sender/receiver
/// is `Party::Me`; the constructors below are the only way the crate
/// builds one, so every message it produces holds that invariant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: Party,
    pub receiver: Party,
    pub content: String,
    pub time_label: String,
    /// Unix seconds at creation. `None` for seeded fixtures whose labels
    /// ("Yesterday", "Monday") carry no parseable instant. Informational
    /// only; the log is ordered by insertion, never by this field.
    pub sent_at: Option<i64>,
}

impl Message {
    pub fn outgoing(to: ContactId, content: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            id: MessageId::generate(),
            sender: Party::Me,
            receiver: Party::Contact(to),
            content: content.into(),
            time_label: clock_label(&now),
            sent_at: Some(now.timestamp()),
        }
    }

    pub fn incoming(from: ContactId, content: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            id: MessageId::generate(),
            sender: Party::Contact(from),
            receiver: Party::Me,
            content: content.into(),
            time_label: clock_label(&now),
            sent_at: Some(now.timestamp()),
        }
    }

    pub fn seeded_outgoing(
        to: ContactId,
        content: impl Into<String>,
        time_label: impl Into<String>,
    ) -> Self {
        Self {
            id: MessageId::generate(),
            sender: Party::Me,
            receiver: Party::Contact(to),
            content: content.into(),
            time_label: time_label.into(),
            sent_at: None,
        }
    }

    pub fn seeded_incoming(
        from: ContactId,
        content: impl Into<String>,
        time_label: impl Into<String>,
    ) -> Self {
        Self {
            id: MessageId::generate(),
            sender: Party::Contact(from),
            receiver: Party::Me,
            content: content.into(),
            time_label: time_label.into(),
            sent_at: None,
        }
    }

    pub fn direction(&self) -> Direction {
        if self.sender == Party::Me {
            Direction::Outgoing
        } else {
            Direction::Incoming
        }
    }

    /// True when this message belongs to the conversation between the
    /// current user and `contact`, in either direction.
    pub fn involves(&self, contact: ContactId) -> bool {
        (self.sender == Party::Me && self.receiver == Party::Contact(contact))
            || (self.sender == Party::Contact(contact) && self.receiver == Party::Me)
    }
}

fn clock_label(at: &DateTime<Local>) -> String {
    at.format("%-I:%M %p").to_string()
}
