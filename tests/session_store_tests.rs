//! Session store integration tests: durable round-trips through the state
//! file, fail-closed loading of malformed state, idempotent clears, and
//! synchronous subscriber notification.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use tempfile::tempdir;

use lexportal::session::{Identity, Role, Session, SessionStore};

fn police_session() -> Session {
    Session::new(Identity::Police { badge_id: "B123".into() }, "officer1")
}

#[test]
fn set_then_get_round_trips() -> Result<()> {
    let tmp = tempdir()?;
    let store = SessionStore::open(tmp.path().join("session.json"));
    let s = police_session();
    store.set(s.clone());
    assert_eq!(store.get(), s);
    Ok(())
}

#[test]
fn reopen_reconstructs_the_same_session() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("session.json");
    {
        let store = SessionStore::open(&path);
        store.set(police_session());
    }
    let reopened = SessionStore::open(&path);
    assert_eq!(reopened.get(), police_session());
    Ok(())
}

#[test]
fn state_file_keeps_the_flat_key_contract() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("session.json");
    let store = SessionStore::open(&path);
    store.set(police_session());

    let raw = std::fs::read_to_string(&path)?;
    let v: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(v["isAuthenticated"], "true");
    assert_eq!(v["userType"], "Police");
    assert_eq!(v["username"], "officer1");
    assert_eq!(v["badge_id"], "B123");
    assert!(v.get("civilian_id").is_none());
    Ok(())
}

#[test]
fn clear_is_idempotent() -> Result<()> {
    let tmp = tempdir()?;
    let store = SessionStore::open(tmp.path().join("session.json"));
    store.set(police_session());
    store.clear();
    let once = store.get();
    store.clear();
    let twice = store.get();
    assert_eq!(once, twice);
    assert_eq!(once, Session::anonymous());
    assert!(!store.get().authenticated());
    Ok(())
}

#[test]
fn missing_file_loads_anonymous() -> Result<()> {
    let tmp = tempdir()?;
    let store = SessionStore::open(tmp.path().join("never-written.json"));
    assert_eq!(store.get(), Session::anonymous());
    Ok(())
}

#[test]
fn garbage_state_file_fails_closed() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("session.json");
    std::fs::write(&path, "not json at all {{{")?;
    let store = SessionStore::open(&path);
    assert!(!store.get().authenticated());
    Ok(())
}

#[test]
fn role_keys_without_auth_flag_fail_closed() -> Result<()> {
    // The storage contract: without isAuthenticated == "true", the other
    // keys are dead weight.
    let tmp = tempdir()?;
    let path = tmp.path().join("session.json");
    std::fs::write(
        &path,
        r#"{"userType":"Police","username":"officer1","badge_id":"B123"}"#,
    )?;
    let store = SessionStore::open(&path);
    assert!(!store.get().authenticated());
    assert_eq!(store.get().role(), None);
    Ok(())
}

#[test]
fn truncated_role_state_fails_closed() -> Result<()> {
    // Authenticated police state with no badge id is malformed, not partial.
    let tmp = tempdir()?;
    let path = tmp.path().join("session.json");
    std::fs::write(&path, r#"{"isAuthenticated":"true","userType":"Police"}"#)?;
    let store = SessionStore::open(&path);
    assert!(!store.get().authenticated());
    Ok(())
}

#[test]
fn subscribers_see_every_mutation_synchronously() -> Result<()> {
    let tmp = tempdir()?;
    let store = SessionStore::open(tmp.path().join("session.json"));
    let seen = Arc::new(AtomicUsize::new(0));
    let last_authenticated = Arc::new(AtomicUsize::new(usize::MAX));
    {
        let seen = seen.clone();
        let last = last_authenticated.clone();
        store.subscribe(move |session| {
            seen.fetch_add(1, Ordering::SeqCst);
            last.store(session.authenticated() as usize, Ordering::SeqCst);
        });
    }

    store.set(police_session());
    // Notification happened before set() returned.
    assert_eq!(seen.load(Ordering::SeqCst), 1);
    assert_eq!(last_authenticated.load(Ordering::SeqCst), 1);

    store.clear();
    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(last_authenticated.load(Ordering::SeqCst), 0);
    Ok(())
}

#[test]
fn role_switch_replaces_the_persisted_identity() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("session.json");
    let store = SessionStore::open(&path);
    store.set(police_session());
    store.set(Session::new(Identity::Lawyer { lawyer_id: "BAR-9".into() }, "adv.rao"));

    let reopened = SessionStore::open(&path);
    assert_eq!(reopened.get().role(), Some(Role::Lawyer));
    let raw = std::fs::read_to_string(&path)?;
    let v: serde_json::Value = serde_json::from_str(&raw)?;
    assert!(v.get("badge_id").is_none(), "old role key must not linger");
    Ok(())
}
