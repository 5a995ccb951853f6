mod common;

use common::*;
use edulink_chat_lib::{ConversationView, Direction, Message, Party, SendError};

#[test]
fn send_appends_exactly_one_message() {
    init_logging();
    let mut view = science_view();
    let before = view.messages().len();

    let id = view.send("hi").expect("send should succeed");

    assert_eq!(view.messages().len(), before + 1);
    let last = view.messages().last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.sender, Party::Me);
    assert_eq!(last.receiver, Party::Contact(SCIENCE_TEACHER));
    assert_eq!(last.content, "hi");
    assert_eq!(last.direction(), Direction::Outgoing);
}

#[test]
fn empty_and_whitespace_sends_leave_log_unchanged() {
    init_logging();
    let mut view = science_view();
    let before = view.messages().len();

    assert_eq!(view.send("").unwrap_err(), SendError::EmptyMessage);
    assert_eq!(view.send("   ").unwrap_err(), SendError::EmptyMessage);
    assert_eq!(view.messages().len(), before);
}

#[test]
fn send_without_selection_leaves_log_unchanged() {
    init_logging();
    let mut view = ConversationView::new(test_roster(), mixed_log());
    let before = view.messages().len();

    assert_eq!(view.send("hi").unwrap_err(), SendError::NoContactSelected);
    assert_eq!(view.messages().len(), before);
}

#[test]
fn visible_messages_filter_by_selected_pair_in_log_order() {
    init_logging();
    let view = science_view();

    let visible = view.visible_messages();
    assert_eq!(visible.len(), 4);
    assert!(visible.iter().all(|m| m.involves(SCIENCE_TEACHER)));

    let contents: Vec<&str> = visible.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            "Hello Mr. Williams, how did the lab go?",
            "It went well, Charlie enjoyed the experiments.",
            "Glad to hear it. Anything to work on at home?",
            "Please remind Charlie to complete his homework",
        ]
    );
}

#[test]
fn switching_selection_changes_view_without_mutating_log() {
    init_logging();
    let mut view = science_view();
    let log_before: Vec<_> = view.messages().iter().map(|m| m.id).collect();

    view.select_contact(MATH_TEACHER);
    assert_eq!(view.visible_messages().len(), 2);

    view.select_contact(SCIENCE_TEACHER);
    assert_eq!(view.visible_messages().len(), 4);

    let log_after: Vec<_> = view.messages().iter().map(|m| m.id).collect();
    assert_eq!(log_before, log_after);
}

// Worked example from the view contract: a roster containing contact 2, a
// log of four seeded messages with contact 2, one send, five visible.
#[test]
fn seeded_conversation_grows_to_five_on_send() {
    init_logging();
    let log: Vec<Message> = mixed_log()
        .into_iter()
        .filter(|m| m.involves(SCIENCE_TEACHER))
        .collect();
    assert_eq!(log.len(), 4);

    let mut view = ConversationView::new(test_roster(), log);
    view.select_contact(SCIENCE_TEACHER);
    view.send("hi").expect("send should succeed");

    let visible = view.visible_messages();
    assert_eq!(visible.len(), 5);
    let fifth = visible.last().unwrap();
    assert_eq!(fifth.sender, Party::Me);
    assert_eq!(fifth.receiver, Party::Contact(SCIENCE_TEACHER));
    assert_eq!(fifth.content, "hi");
}

#[test]
fn send_draft_clears_input_only_on_success() {
    init_logging();
    let mut view = science_view();

    view.set_draft("See you at the parent evening");
    view.send_draft().expect("draft send should succeed");
    assert_eq!(view.draft(), "");
    assert_eq!(
        view.messages().last().unwrap().content,
        "See you at the parent evening"
    );

    view.set_draft("   ");
    assert_eq!(view.send_draft().unwrap_err(), SendError::EmptyMessage);
    assert_eq!(view.draft(), "   ");
}

#[test]
fn scroll_anchor_follows_newest_message() {
    init_logging();
    let mut view = science_view();
    let seeded_last = view.messages().last().unwrap().id;
    assert_eq!(view.scroll_anchor(), Some(seeded_last));

    let sent = view.send("hi").unwrap();
    assert_eq!(view.scroll_anchor(), Some(sent));
}

#[test]
fn message_ids_are_unique_across_sends() {
    init_logging();
    let mut view = science_view();
    let first = view.send("one").unwrap();
    let second = view.send("two").unwrap();

    assert_ne!(first, second);
    let ids: Vec<_> = view.messages().iter().map(|m| m.id).collect();
    let mut deduped = ids.clone();
    deduped.sort_by_key(|id| id.uuid);
    deduped.dedup();
    assert_eq!(ids.len(), deduped.len());
}

#[test]
fn unknown_selection_renders_fallback_state() {
    init_logging();
    let mut view = science_view();
    view.select_contact(99);

    assert!(view.selected_contact().is_none());
    assert!(view.visible_messages().is_empty());
}
