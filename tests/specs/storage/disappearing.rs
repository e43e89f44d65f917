//! Disappearing-message store specs

use sigd_storage::{DisappearingMessage, DisappearingStore, EventId, RoomId};

#[test]
fn timers_persist_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("disappearing.json");
    let room = RoomId::from("!room");

    {
        let mut store = DisappearingStore::open(&path).unwrap();
        let mut read = DisappearingMessage::new(room.clone(), EventId::from("$read"), 60);
        read.start_timer(1_000);
        store.insert(read).unwrap();
        store.insert(DisappearingMessage::new(room.clone(), EventId::from("$unread"), 60)).unwrap();
    }

    let store = DisappearingStore::open(&path).unwrap();
    assert_eq!(store.get_all_for_room(&room).len(), 2);
    let expired: Vec<_> = store.expired(61_000).into_iter().map(|m| m.event_id).collect();
    assert_eq!(expired, vec![EventId::from("$read")]);
}
