use super::*;
use crate::net::types::Role;
use crate::util::storage::MemoryStorage;

fn make_session(role: Role) -> Session {
    Session {
        token: "tok-123".to_owned(),
        user: User {
            id: "u-1".to_owned(),
            name: "Marcus".to_owned(),
            email: "marcus@gym.com".to_owned(),
            role,
        },
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn load_empty_storage_is_absent() {
    let store = SessionStore::new(MemoryStorage::new());
    assert_eq!(store.load(), SessionLoad::Absent);
}

#[test]
fn load_after_save_is_present() {
    let store = SessionStore::new(MemoryStorage::new());
    let session = make_session(Role::Coach);
    store.save(&session).unwrap();
    assert_eq!(store.load(), SessionLoad::Present(session));
}

#[test]
fn load_malformed_user_is_corrupt() {
    let store = SessionStore::new(MemoryStorage::with_items([(TOKEN_KEY, "tok"), (USER_KEY, "{not json")]));
    assert!(matches!(store.load(), SessionLoad::Corrupt(_)));
}

#[test]
fn load_user_without_token_is_corrupt() {
    let raw = r#"{"id":"u-1","name":"Ana","email":"a@gym.com","role":"Athlete"}"#;
    let store = SessionStore::new(MemoryStorage::with_items([(USER_KEY, raw)]));
    assert!(matches!(store.load(), SessionLoad::Corrupt(_)));
}

#[test]
fn load_token_without_user_is_corrupt() {
    let store = SessionStore::new(MemoryStorage::with_items([(TOKEN_KEY, "tok")]));
    assert!(matches!(store.load(), SessionLoad::Corrupt(_)));
}

#[test]
fn load_empty_token_is_corrupt() {
    let raw = r#"{"id":"u-1","name":"Ana","email":"a@gym.com","role":"Athlete"}"#;
    let store = SessionStore::new(MemoryStorage::with_items([(TOKEN_KEY, ""), (USER_KEY, raw)]));
    assert!(matches!(store.load(), SessionLoad::Corrupt(_)));
}

#[test]
fn load_user_missing_role_is_corrupt() {
    let raw = r#"{"id":"u-1","name":"Ana","email":"a@gym.com"}"#;
    let store = SessionStore::new(MemoryStorage::with_items([(TOKEN_KEY, "tok"), (USER_KEY, raw)]));
    assert!(matches!(store.load(), SessionLoad::Corrupt(_)));
}

#[test]
fn into_session_drops_absent_and_corrupt() {
    assert!(SessionLoad::Absent.into_session().is_none());
    assert!(SessionLoad::Corrupt("x".to_owned()).into_session().is_none());
    assert!(SessionLoad::Present(make_session(Role::Athlete)).into_session().is_some());
}

// =============================================================
// save / clear
// =============================================================

#[test]
fn save_writes_raw_token_and_json_user() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&make_session(Role::Athlete)).unwrap();

    let storage = store.storage();
    assert_eq!(storage.len(), 2);
    assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-123"));
    let user: serde_json::Value = serde_json::from_str(&storage.get(USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(user["role"], "Athlete");
    assert_eq!(user["email"], "marcus@gym.com");
}

#[test]
fn save_rolls_back_user_when_token_write_fails() {
    let storage = MemoryStorage::new();
    storage.fail_writes_to(TOKEN_KEY);
    let store = SessionStore::new(storage);

    assert!(store.save(&make_session(Role::Coach)).is_err());
    assert!(store.storage().is_empty());
    assert_eq!(store.load(), SessionLoad::Absent);
}

#[test]
fn failed_save_over_existing_session_leaves_nothing_behind() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&make_session(Role::Coach)).unwrap();
    store.storage().fail_writes_to(TOKEN_KEY);

    let mut next = make_session(Role::Athlete);
    next.token = "tok-456".to_owned();
    assert!(store.save(&next).is_err());

    assert!(store.storage().is_empty());
    assert_eq!(store.storage().get(TOKEN_KEY).unwrap(), None);
    assert_eq!(store.load(), SessionLoad::Absent);
}

#[test]
fn failed_user_write_discards_previous_session() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&make_session(Role::Coach)).unwrap();
    store.storage().fail_writes_to(USER_KEY);

    assert!(store.save(&make_session(Role::Athlete)).is_err());
    assert_eq!(store.load(), SessionLoad::Absent);
}

#[test]
fn save_overwrites_previous_session() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&make_session(Role::Coach)).unwrap();
    let mut next = make_session(Role::Athlete);
    next.token = "tok-456".to_owned();
    store.save(&next).unwrap();
    assert_eq!(store.load(), SessionLoad::Present(next));
}

#[test]
fn clear_removes_both_keys() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&make_session(Role::Coach)).unwrap();
    store.clear().unwrap();
    assert!(store.storage().is_empty());
    assert_eq!(store.load(), SessionLoad::Absent);
}
