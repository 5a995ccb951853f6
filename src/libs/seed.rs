//! Portal fixtures: the rosters and conversation logs each dashboard chat
//! starts from. Stands in for a messaging backend; a real deployment
//! would fetch these through the store seam instead.

use crate::libs::core::models::{Contact, ContactId, DashboardRole, Message};

const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

pub fn contacts(role: DashboardRole) -> Vec<Contact> {
    match role {
        DashboardRole::Parent => vec![
            Contact::new(
                1,
                "Ms. Johnson",
                "Mathematics Teacher",
                PLACEHOLDER_AVATAR,
                "Alice is doing very well in class",
                "10:30 AM",
                0,
            ),
            Contact::new(
                2,
                "Mr. Williams",
                "Science Teacher",
                PLACEHOLDER_AVATAR,
                "Please remind Charlie to complete his homework",
                "Yesterday",
                1,
            ),
            Contact::new(
                3,
                "Mrs. Davis",
                "English Teacher",
                PLACEHOLDER_AVATAR,
                "The next essay is due on Friday",
                "Monday",
                0,
            ),
        ],
        DashboardRole::Teacher => vec![
            Contact::new(
                1,
                "John Smith",
                "Parent",
                PLACEHOLDER_AVATAR,
                "How is Alice doing in class?",
                "10:30 AM",
                2,
            ),
            Contact::new(
                2,
                "Sarah Johnson",
                "Volunteer",
                PLACEHOLDER_AVATAR,
                "I'll be available to help with tomorrow's class",
                "Yesterday",
                0,
            ),
            Contact::new(
                3,
                "Michael Brown",
                "Parent",
                PLACEHOLDER_AVATAR,
                "Thank you for the update",
                "Yesterday",
                0,
            ),
            Contact::new(
                4,
                "Emily Davis",
                "Volunteer",
                PLACEHOLDER_AVATAR,
                "Can you share the lesson plan?",
                "Monday",
                0,
            ),
        ],
        DashboardRole::Volunteer => vec![
            Contact::new(
                1,
                "Ms. Johnson",
                "Teacher",
                PLACEHOLDER_AVATAR,
                "Thank you for volunteering for tomorrow's class",
                "10:30 AM",
                0,
            ),
            Contact::new(
                2,
                "Mr. Williams",
                "Teacher",
                PLACEHOLDER_AVATAR,
                "Can you help with the physics experiments?",
                "Yesterday",
                2,
            ),
            Contact::new(
                3,
                "Mrs. Davis",
                "Teacher",
                PLACEHOLDER_AVATAR,
                "The class materials are ready",
                "Monday",
                0,
            ),
        ],
    }
}

pub fn messages(role: DashboardRole) -> Vec<Message> {
    match role {
        DashboardRole::Parent => vec![
            Message::seeded_outgoing(
                1,
                "Hello Ms. Johnson, how is Alice doing in Mathematics class?",
                "10:15 AM",
            ),
            Message::seeded_incoming(
                1,
                "Hi there! Alice is doing very well. She scored 90% in the last test \
                 and has been actively participating in class discussions.",
                "10:20 AM",
            ),
            Message::seeded_outgoing(
                1,
                "That's great to hear! Are there any areas where she could improve?",
                "10:25 AM",
            ),
            Message::seeded_incoming(
                1,
                "She's strong in most areas, but could use a bit more practice with \
                 word problems. I've assigned some extra exercises that might help.",
                "10:30 AM",
            ),
        ],
        DashboardRole::Teacher => vec![
            Message::seeded_incoming(
                1,
                "Hello, I wanted to ask about Alice's progress in Mathematics.",
                "10:15 AM",
            ),
            Message::seeded_outgoing(
                1,
                "Hi John, Alice is doing very well. She scored 90% in the last test.",
                "10:20 AM",
            ),
            Message::seeded_incoming(
                1,
                "That's great to hear! What areas should she focus on improving?",
                "10:25 AM",
            ),
            Message::seeded_incoming(
                1,
                "Also, will there be any additional homework this week?",
                "10:30 AM",
            ),
        ],
        DashboardRole::Volunteer => vec![
            Message::seeded_incoming(
                2,
                "Hello, I'm looking for a volunteer to help with physics experiments \
                 in my class next week.",
                "Yesterday, 3:15 PM",
            ),
            Message::seeded_outgoing(
                2,
                "Hi Mr. Williams, I'd be happy to help. I have experience with \
                 physics experiments.",
                "Yesterday, 3:20 PM",
            ),
            Message::seeded_incoming(
                2,
                "Great! The class is on Thursday from 11:00 AM to 12:30 PM. We'll be \
                 demonstrating basic principles of motion and energy.",
                "Yesterday, 3:25 PM",
            ),
            Message::seeded_incoming(
                2,
                "Could you also help prepare some of the equipment before class?",
                "Yesterday, 3:30 PM",
            ),
        ],
    }
}

/// The contact each dashboard opens on.
pub fn default_selection(role: DashboardRole) -> Option<ContactId> {
    match role {
        DashboardRole::Parent => Some(1),
        DashboardRole::Teacher => Some(1),
        DashboardRole::Volunteer => Some(2),
    }
}
