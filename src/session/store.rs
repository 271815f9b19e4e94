use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

use crate::tprintln;

use super::identity::{Identity, Role, Session};

/// Persisted key-value contract of the state file. Absence of
/// `isAuthenticated == "true"` means unauthenticated regardless of any
/// other key.
const KEY_AUTH: &str = "isAuthenticated";
const KEY_USER_TYPE: &str = "userType";
const KEY_USERNAME: &str = "username";
const KEY_BADGE: &str = "badge_id";
const KEY_CIVILIAN: &str = "civilian_id";
const KEY_LAWYER: &str = "lawyer_id";

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state file io: {0}")]
    Io(#[from] std::io::Error),

    #[error("state file encode: {0}")]
    Encode(#[from] serde_json::Error),
}

type Subscriber = Box<dyn Fn(&Session) + Send + Sync>;

/// Single designated owner of the Session: every mutation is durably written
/// to the state file and fanned out to subscribers synchronously, in
/// registration order. Single writer at a time by construction of the shell
/// event loop; the locks exist so tests and background readers stay safe.
/// Subscribers run after the session lock is released and may read the store.
#[derive(Clone)]
pub struct SessionStore {
    current: Arc<RwLock<Session>>,
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
    path: PathBuf,
}

impl SessionStore {
    /// Load the persisted Session from `path`. Missing, unreadable, or
    /// malformed state all yield the anonymous default (fail-closed).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = match load_state(&path) {
            Some(s) => s,
            None => Session::anonymous(),
        };
        tprintln!(
            "session.open path={} authenticated={}",
            path.display(),
            current.authenticated()
        );
        Self {
            current: Arc::new(RwLock::new(current)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            path,
        }
    }

    pub fn get(&self) -> Session {
        self.current.read().clone()
    }

    /// Overwrite the Session, persist it, then notify subscribers.
    pub fn set(&self, session: Session) {
        if let Err(e) = persist_state(&self.path, &session) {
            // The in-memory session still advances; a reload falls back to
            // anonymous, which fails closed.
            tracing::warn!("session state not persisted: {}", e);
        }
        {
            let mut current = self.current.write();
            *current = session.clone();
        }
        debug!(authenticated = session.authenticated(), "session.set");
        for sub in self.subscribers.read().iter() {
            sub(&session);
        }
    }

    /// Reset to the anonymous default. Calling this twice is the same as once.
    pub fn clear(&self) {
        self.set(Session::anonymous());
    }

    /// Register a callback invoked with the new Session on every mutation.
    pub fn subscribe(&self, f: impl Fn(&Session) + Send + Sync + 'static) {
        self.subscribers.write().push(Box::new(f));
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Decode the key-value state file into a Session. `None` on any defect.
fn load_state(path: &Path) -> Option<Session> {
    let raw = std::fs::read_to_string(path).ok()?;
    let map: BTreeMap<String, String> = serde_json::from_str(&raw).ok()?;
    decode_state(&map)
}

fn decode_state(map: &BTreeMap<String, String>) -> Option<Session> {
    if map.get(KEY_AUTH).map(|v| v.as_str()) != Some("true") {
        return Some(Session::anonymous());
    }
    let role = Role::parse(map.get(KEY_USER_TYPE)?)?;
    let identity = match role {
        Role::Civilian => Identity::Civilian { civilian_id: map.get(KEY_CIVILIAN)?.clone() },
        Role::Lawyer => Identity::Lawyer { lawyer_id: map.get(KEY_LAWYER)?.clone() },
        Role::Police => Identity::Police { badge_id: map.get(KEY_BADGE)?.clone() },
    };
    Some(Session { identity, username: map.get(KEY_USERNAME).cloned() })
}

fn encode_state(session: &Session) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    if !session.authenticated() {
        return map;
    }
    map.insert(KEY_AUTH.to_string(), "true".to_string());
    if let Some(role) = session.role() {
        map.insert(KEY_USER_TYPE.to_string(), role.as_str().to_string());
    }
    if let Some(u) = &session.username {
        map.insert(KEY_USERNAME.to_string(), u.clone());
    }
    match &session.identity {
        Identity::Anonymous => {}
        Identity::Civilian { civilian_id } => {
            map.insert(KEY_CIVILIAN.to_string(), civilian_id.clone());
        }
        Identity::Lawyer { lawyer_id } => {
            map.insert(KEY_LAWYER.to_string(), lawyer_id.clone());
        }
        Identity::Police { badge_id } => {
            map.insert(KEY_BADGE.to_string(), badge_id.clone());
        }
    }
    map
}

fn persist_state(path: &Path, session: &Session) -> Result<(), StateError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let map = encode_state(session);
    let body = serde_json::to_string_pretty(&map)?;
    // Write-then-rename so a crash mid-write cannot leave a torn state file.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, body)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn police_session() -> Session {
        Session::new(Identity::Police { badge_id: "B123".into() }, "officer1")
    }

    #[test]
    fn encode_decode_round_trip() {
        let s = police_session();
        let decoded = decode_state(&encode_state(&s)).unwrap();
        assert_eq!(decoded, s);
    }

    #[test]
    fn anonymous_encodes_empty() {
        assert!(encode_state(&Session::anonymous()).is_empty());
    }

    #[test]
    fn decode_requires_auth_flag() {
        // userType present but the auth flag missing: unauthenticated.
        let mut map = encode_state(&police_session());
        map.remove(KEY_AUTH);
        let decoded = decode_state(&map).unwrap();
        assert!(!decoded.authenticated());
    }

    #[test]
    fn decode_rejects_missing_role_id() {
        // auth flag and role present but the badge id missing: defect, None.
        let mut map = encode_state(&police_session());
        map.remove(KEY_BADGE);
        assert!(decode_state(&map).is_none());
    }

    #[test]
    fn decode_rejects_unknown_role() {
        let mut map = encode_state(&police_session());
        map.insert(KEY_USER_TYPE.to_string(), "Judge".to_string());
        assert!(decode_state(&map).is_none());
    }
}
