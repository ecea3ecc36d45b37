//! In-memory entity store with per-entity serialization.
//!
//! Each kind lives on its own shelf. A shelf keeps insertion order and wraps
//! every entity in its own mutex under a shelf-level read-write lock, so
//! actions against one entity serialize while actions against different
//! entities proceed in parallel. Snapshots clone whole entities under their
//! lock and never observe a partial write.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use thiserror::Error;

use super::domain::{
    AccountId, ComplianceRequest, Document, DocumentId, Listing, ListingId, RequestId, UserAccount,
};

/// Storage failures surfaced to the service facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("entity already exists")]
    Duplicate,
    #[error("entity not found")]
    NotFound,
}

struct ShelfInner<T> {
    order: Vec<String>,
    entities: HashMap<String, Arc<Mutex<T>>>,
}

struct Shelf<T> {
    inner: RwLock<ShelfInner<T>>,
}

impl<T: Clone> Default for Shelf<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(ShelfInner {
                order: Vec::new(),
                entities: HashMap::new(),
            }),
        }
    }
}

impl<T: Clone> Shelf<T> {
    fn insert(&self, key: String, entity: T) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if inner.entities.contains_key(&key) {
            return Err(StoreError::Duplicate);
        }
        inner.order.push(key.clone());
        inner.entities.insert(key, Arc::new(Mutex::new(entity)));
        Ok(())
    }

    /// Run `f` with exclusive access to one entity. The shelf lock is
    /// released before the entity lock is taken, so unrelated entities stay
    /// reachable while `f` runs.
    fn with_entity<R>(&self, key: &str, f: impl FnOnce(&mut T) -> R) -> Result<R, StoreError> {
        let slot = {
            let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
            inner.entities.get(key).cloned().ok_or(StoreError::NotFound)?
        };
        let mut entity = slot.lock().unwrap_or_else(|e| e.into_inner());
        Ok(f(&mut entity))
    }

    fn get(&self, key: &str) -> Result<T, StoreError> {
        self.with_entity(key, |entity| entity.clone())
    }

    fn snapshot(&self) -> Vec<T> {
        let slots: Vec<Arc<Mutex<T>>> = {
            let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
            inner
                .order
                .iter()
                .filter_map(|key| inner.entities.get(key).cloned())
                .collect()
        };
        slots
            .into_iter()
            .map(|slot| slot.lock().unwrap_or_else(|e| e.into_inner()).clone())
            .collect()
    }
}

/// Kind-wise shelves for every reviewable entity on the platform.
#[derive(Default)]
pub struct ModerationStore {
    listings: Shelf<Listing>,
    accounts: Shelf<UserAccount>,
    documents: Shelf<Document>,
    requests: Shelf<ComplianceRequest>,
}

impl ModerationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_listing(&self, listing: Listing) -> Result<(), StoreError> {
        self.listings.insert(listing.id.0.clone(), listing)
    }

    pub fn insert_account(&self, account: UserAccount) -> Result<(), StoreError> {
        self.accounts.insert(account.id.0.clone(), account)
    }

    pub fn insert_document(&self, document: Document) -> Result<(), StoreError> {
        self.documents.insert(document.id.0.clone(), document)
    }

    pub fn insert_request(&self, request: ComplianceRequest) -> Result<(), StoreError> {
        self.requests.insert(request.id.0.clone(), request)
    }

    pub fn with_listing<R>(
        &self,
        id: &ListingId,
        f: impl FnOnce(&mut Listing) -> R,
    ) -> Result<R, StoreError> {
        self.listings.with_entity(&id.0, f)
    }

    pub fn with_account<R>(
        &self,
        id: &AccountId,
        f: impl FnOnce(&mut UserAccount) -> R,
    ) -> Result<R, StoreError> {
        self.accounts.with_entity(&id.0, f)
    }

    pub fn with_document<R>(
        &self,
        id: &DocumentId,
        f: impl FnOnce(&mut Document) -> R,
    ) -> Result<R, StoreError> {
        self.documents.with_entity(&id.0, f)
    }

    pub fn with_request<R>(
        &self,
        id: &RequestId,
        f: impl FnOnce(&mut ComplianceRequest) -> R,
    ) -> Result<R, StoreError> {
        self.requests.with_entity(&id.0, f)
    }

    pub fn listing(&self, id: &ListingId) -> Result<Listing, StoreError> {
        self.listings.get(&id.0)
    }

    pub fn account(&self, id: &AccountId) -> Result<UserAccount, StoreError> {
        self.accounts.get(&id.0)
    }

    pub fn document(&self, id: &DocumentId) -> Result<Document, StoreError> {
        self.documents.get(&id.0)
    }

    pub fn request(&self, id: &RequestId) -> Result<ComplianceRequest, StoreError> {
        self.requests.get(&id.0)
    }

    pub fn listings(&self) -> Vec<Listing> {
        self.listings.snapshot()
    }

    pub fn accounts(&self) -> Vec<UserAccount> {
        self.accounts.snapshot()
    }

    pub fn documents(&self) -> Vec<Document> {
        self.documents.snapshot()
    }

    pub fn requests(&self) -> Vec<ComplianceRequest> {
        self.requests.snapshot()
    }
}
