pub mod conversation;
pub mod core;
pub mod outbox;
pub mod roster;
pub mod seed;
pub mod storage;
