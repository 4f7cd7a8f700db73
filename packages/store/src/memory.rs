use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::StoreError;
use crate::models::{UserPayload, UserRecord};
use crate::repo::UserStore;

/// In-memory UserStore for testing and offline demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<UserRecord>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing records. Records without an id are given one.
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            for user in users {
                let id = user.id.clone().unwrap_or_else(|| inner.allocate_id());
                inner.users.push(UserRecord {
                    id: Some(id),
                    ..user
                });
            }
        }
        store
    }

    /// Snapshot of everything stored.
    pub fn users(&self) -> Vec<UserRecord> {
        self.lock().users.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("mem-{}", self.next_id)
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.users
            .iter()
            .position(|user| user.id.as_deref() == Some(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl UserStore for MemoryStore {
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.users())
    }

    async fn create(&self, payload: &UserPayload) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let id = inner.allocate_id();
        inner.users.push(payload.clone().into_record(Some(id)));
        Ok(())
    }

    async fn update(&self, id: &str, payload: &UserPayload) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let index = inner.position(id)?;
        inner.users[index] = payload.clone().into_record(Some(id.to_string()));
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let index = inner.position(id)?;
        inner.users.remove(index);
        Ok(())
    }
}
