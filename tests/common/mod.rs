use std::sync::Once;

use edulink_chat_lib::{Contact, ContactId, ConversationView, Message};

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub const MATH_TEACHER: ContactId = 1;
pub const SCIENCE_TEACHER: ContactId = 2;

pub fn test_roster() -> Vec<Contact> {
    vec![
        Contact::new(
            MATH_TEACHER,
            "Ms. Johnson",
            "Mathematics Teacher",
            "/placeholder.svg",
            "Alice is doing very well in class",
            "10:30 AM",
            0,
        ),
        Contact::new(
            SCIENCE_TEACHER,
            "Mr. Williams",
            "Science Teacher",
            "/placeholder.svg",
            "Please remind Charlie to complete his homework",
            "Yesterday",
            1,
        ),
    ]
}

/// Interleaved log: four messages with the science teacher, two with the
/// math teacher.
pub fn mixed_log() -> Vec<Message> {
    vec![
        Message::seeded_outgoing(
            SCIENCE_TEACHER,
            "Hello Mr. Williams, how did the lab go?",
            "9:00 AM",
        ),
        Message::seeded_incoming(
            MATH_TEACHER,
            "Alice is doing very well in class",
            "9:05 AM",
        ),
        Message::seeded_incoming(
            SCIENCE_TEACHER,
            "It went well, Charlie enjoyed the experiments.",
            "9:10 AM",
        ),
        Message::seeded_outgoing(
            SCIENCE_TEACHER,
            "Glad to hear it. Anything to work on at home?",
            "9:15 AM",
        ),
        Message::seeded_outgoing(MATH_TEACHER, "Thank you for the update!", "9:20 AM"),
        Message::seeded_incoming(
            SCIENCE_TEACHER,
            "Please remind Charlie to complete his homework",
            "9:25 AM",
        ),
    ]
}

/// A view over the mixed log with the science teacher active.
pub fn science_view() -> ConversationView {
    let mut view = ConversationView::new(test_roster(), mixed_log());
    view.select_contact(SCIENCE_TEACHER);
    view
}
