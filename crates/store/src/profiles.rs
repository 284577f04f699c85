//! Profile storage

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use common::{Error, Result};
use footprint::UserProfile;
use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;

/// Load/save access to user profiles by id
pub trait ProfileRepository: Send + Sync {
    fn load(&self, user_id: &str) -> Result<Option<UserProfile>>;
    fn save(&self, profile: &UserProfile) -> Result<()>;
}

/// Keeps each profile as its serialized JSON document
#[derive(Debug, Default)]
pub struct MemoryRepository {
    documents: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileRepository for MemoryRepository {
    fn load(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let documents = self.documents.read().map_err(|_| poisoned())?;
        documents
            .get(user_id)
            .cloned()
            .map(UserProfile::from_dict)
            .transpose()
    }

    fn save(&self, profile: &UserProfile) -> Result<()> {
        let document = profile.to_dict()?;
        let mut documents = self.documents.write().map_err(|_| poisoned())?;
        documents.insert(profile.user_id().to_string(), document);
        Ok(())
    }
}

fn poisoned() -> Error {
    Error::Internal("profile store lock poisoned".to_string())
}

/// Serializes writes per user on top of a repository
pub struct Profiles<R = MemoryRepository> {
    repo: R,
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl<R: ProfileRepository> Profiles<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn lock_for(&self, user_id: &str) -> Result<Arc<AsyncMutex<()>>> {
        let mut locks = self.locks.lock().map_err(|_| poisoned())?;
        Ok(locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone())
    }

    /// Store a new profile, replacing any previous one with the same id
    pub async fn create(&self, profile: UserProfile) -> Result<()> {
        let lock = self.lock_for(profile.user_id())?;
        let _guard = lock.lock().await;
        self.repo.save(&profile)?;
        debug!("Created profile {}", profile.user_id());
        Ok(())
    }

    pub async fn get(&self, user_id: &str) -> Result<UserProfile> {
        self.repo
            .load(user_id)?
            .ok_or_else(|| Error::NotFound(format!("Profile '{}'", user_id)))
    }

    /// Load, mutate and save a profile while holding its write lock.
    ///
    /// Nothing is saved when `f` fails.
    pub async fn update<F, T>(&self, user_id: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut UserProfile) -> Result<T> + Send,
        T: Send,
    {
        if self.repo.load(user_id)?.is_none() {
            return Err(Error::NotFound(format!("Profile '{}'", user_id)));
        }

        let lock = self.lock_for(user_id)?;
        let _guard = lock.lock().await;

        let mut profile = self
            .repo
            .load(user_id)?
            .ok_or_else(|| Error::NotFound(format!("Profile '{}'", user_id)))?;

        let result = f(&mut profile)?;
        self.repo.save(&profile)?;
        Ok(result)
    }
}
