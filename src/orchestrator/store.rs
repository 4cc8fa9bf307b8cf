use crate::combat::session::CombatSession;
use std::collections::HashMap;
use uuid::Uuid;

/// Storage for live sessions, owned by the orchestration layer. The combat
/// core takes and returns session values; it never reaches into a store.
///
/// One session must not be advanced from two threads; implementations are
/// expected to be wrapped in whatever synchronization the caller already
/// uses to serialize per-session access.
pub trait SessionStore {
    fn get(&self, id: &Uuid) -> Option<&CombatSession>;
    fn get_mut(&mut self, id: &Uuid) -> Option<&mut CombatSession>;
    /// Inserts the session, returning its id.
    fn insert(&mut self, session: CombatSession) -> Uuid;
    fn remove(&mut self, id: &Uuid) -> Option<CombatSession>;
    /// Ids of sessions matching a predicate (e.g. "resolved and unclaimed").
    fn ids_where(&self, predicate: &dyn Fn(&CombatSession) -> bool) -> Vec<Uuid>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// HashMap-backed store for single-process embeddings and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: HashMap<Uuid, CombatSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, id: &Uuid) -> Option<&CombatSession> {
        self.sessions.get(id)
    }

    fn get_mut(&mut self, id: &Uuid) -> Option<&mut CombatSession> {
        self.sessions.get_mut(id)
    }

    fn insert(&mut self, session: CombatSession) -> Uuid {
        let id = session.id;
        self.sessions.insert(id, session);
        id
    }

    fn remove(&mut self, id: &Uuid) -> Option<CombatSession> {
        self.sessions.remove(id)
    }

    fn ids_where(&self, predicate: &dyn Fn(&CombatSession) -> bool) -> Vec<Uuid> {
        self.sessions
            .values()
            .filter(|session| predicate(session))
            .map(|session| session.id)
            .collect()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
