use std::sync::Mutex;

use log::trace;

use crate::libs::core::models::Message;

lazy_static::lazy_static! {
    static ref OUTBOX: Mutex<Vec<Message>> = Mutex::new(Vec::new());
}

/// Buffers an outgoing message for whatever transport eventually
/// delivers it. Fire-and-forget: no retry, no timeout, and nothing here
/// feeds back into the view state.
pub fn queue_for_delivery(message: &Message) {
    trace!("queueing message {} for delivery", message.id);
    let mut queue = OUTBOX.lock().unwrap();
    queue.push(message.clone());
}

/// Hands all buffered messages to the caller and clears the queue.
pub fn drain_pending() -> Vec<Message> {
    let mut queue = OUTBOX.lock().unwrap();
    let messages = queue.clone();
    queue.clear();
    messages
}
