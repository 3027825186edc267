use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use hexa_core::{failure, ServiceResult};
use hexa_data::{
    BatchDeleteUseCase, BatchFindUseCase, BatchPersistUseCase, DeleteUseCase, Entity, FindUseCase,
    Page, Pageable, PersistUseCase,
};
use tokio::sync::RwLock;
use tracing::debug;

type IdGenerator<Id> = Arc<dyn Fn(u64) -> Id + Send + Sync>;
type Rule<E> = Arc<dyn Fn(&E) -> Option<String> + Send + Sync>;

/// In-memory adapter implementing every use case for an [`Entity`].
///
/// Rows keep insertion order. New entities get an identifier from the
/// generator passed to [`MemoryStore::new`]; entities that already carry one
/// replace the stored row with the same identifier. Every hook call is
/// counted, so tests can check that invalid input never reached the adapter.
///
/// # Example
///
/// ```ignore
/// let store = MemoryStore::<Order>::sequential();
/// let order = store.create(Some(Order::new(12))).await?;
/// assert_eq!(order.id, Some(1));
/// ```
pub struct MemoryStore<E: Entity> {
    rows: Arc<RwLock<Vec<E>>>,
    next_id: IdGenerator<E::Id>,
    sequence: Arc<AtomicU64>,
    rule: Option<Rule<E>>,
    hooks: Arc<AtomicUsize>,
}

impl<E: Entity + Clone> MemoryStore<E> {
    /// Create an empty store; `next_id` maps 1, 2, 3, … to identifiers.
    pub fn new(next_id: impl Fn(u64) -> E::Id + Send + Sync + 'static) -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(next_id),
            sequence: Arc::new(AtomicU64::new(0)),
            rule: None,
            hooks: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create an empty store assigning identifiers 1, 2, 3, …
    pub fn sequential() -> Self
    where
        E::Id: From<u64>,
    {
        Self::new(<E::Id as From<u64>>::from)
    }

    /// Preload rows. Rows without an identifier get one from the generator
    /// that no other preloaded row already carries.
    pub fn with_rows(mut self, mut rows: Vec<E>) -> Self {
        let mut taken: Vec<E::Id> = rows.iter().filter_map(|row| row.id().cloned()).collect();
        for row in rows.iter_mut().filter(|row| row.id().is_none()) {
            let id = self.generate_id(taken.len(), |candidate| taken.contains(candidate));
            taken.push(id.clone());
            row.set_id(id);
        }
        self.rows = Arc::new(RwLock::new(rows));
        self
    }

    /// Reject inserts for which `rule` returns a reason, as a `Service` failure.
    pub fn reject_when(
        mut self,
        rule: impl Fn(&E) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.rule = Some(Arc::new(rule));
        self
    }

    /// Number of adapter hook calls so far.
    pub fn hook_calls(&self) -> usize {
        self.hooks.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Copy of the stored rows, in insertion order.
    pub async fn snapshot(&self) -> Vec<E> {
        self.rows.read().await.clone()
    }

    fn hook(&self) {
        self.hooks.fetch_add(1, Ordering::SeqCst);
    }

    fn next_candidate(&self) -> E::Id {
        (self.next_id)(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Next generated identifier for which `taken` is false. At most `attempts`
    /// candidates are skipped, so a constant generator cannot spin forever.
    fn generate_id(&self, attempts: usize, taken: impl Fn(&E::Id) -> bool) -> E::Id {
        let mut id = self.next_candidate();
        for _ in 0..attempts {
            if !taken(&id) {
                break;
            }
            id = self.next_candidate();
        }
        id
    }

    fn check(&self, entity: &E) -> ServiceResult<()> {
        match self.rule.as_ref().and_then(|rule| rule(entity)) {
            Some(reason) => Err(failure::service(reason)),
            None => Ok(()),
        }
    }

    fn store(&self, rows: &mut Vec<E>, mut entity: E) -> E {
        let existing = entity
            .id()
            .and_then(|id| rows.iter().position(|row| row.id() == Some(id)));
        match existing {
            Some(index) => {
                debug!(id = ?entity.id(), "replacing row");
                rows[index] = entity.clone();
            }
            None => {
                if entity.id().is_none() {
                    let id = self.generate_id(rows.len(), |candidate| {
                        rows.iter().any(|row| row.id() == Some(candidate))
                    });
                    entity.set_id(id);
                }
                debug!(id = ?entity.id(), "inserting row");
                rows.push(entity.clone());
            }
        }
        entity
    }
}

impl<E: Entity> Clone for MemoryStore<E> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            next_id: self.next_id.clone(),
            sequence: self.sequence.clone(),
            rule: self.rule.clone(),
            hooks: self.hooks.clone(),
        }
    }
}

impl<E: Entity + Clone> FindUseCase<E, E::Id> for MemoryStore<E> {
    async fn load_by_id(&self, id: &E::Id) -> ServiceResult<Option<E>> {
        self.hook();
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id() == Some(id)).cloned())
    }

    async fn load_exists(&self, id: &E::Id) -> ServiceResult<bool> {
        self.hook();
        let rows = self.rows.read().await;
        Ok(rows.iter().any(|row| row.id() == Some(id)))
    }
}

impl<E: Entity + Clone> BatchFindUseCase<E> for MemoryStore<E> {
    async fn load_all(&self) -> ServiceResult<Vec<E>> {
        self.hook();
        Ok(self.rows.read().await.clone())
    }

    async fn load_page(&self, pageable: &Pageable) -> ServiceResult<Page<E>> {
        self.hook();
        let rows = self.rows.read().await;
        let offset = usize::try_from(pageable.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(pageable.size).unwrap_or(usize::MAX);
        let content = rows.iter().skip(offset).take(size).cloned().collect();
        Ok(Page::new(content, pageable, rows.len() as u64))
    }
}

impl<E: Entity + Clone> PersistUseCase<E> for MemoryStore<E> {
    async fn insert(&self, entity: E) -> ServiceResult<E> {
        self.hook();
        self.check(&entity)?;
        let mut rows = self.rows.write().await;
        Ok(self.store(&mut rows, entity))
    }
}

impl<E: Entity + Clone> BatchPersistUseCase<E> for MemoryStore<E> {
    async fn insert_all(&self, entities: Vec<E>) -> ServiceResult<Vec<E>> {
        self.hook();
        for entity in &entities {
            self.check(entity)?;
        }
        let mut rows = self.rows.write().await;
        Ok(entities
            .into_iter()
            .map(|entity| self.store(&mut rows, entity))
            .collect())
    }
}

impl<E: Entity + Clone> DeleteUseCase<E::Id> for MemoryStore<E> {
    async fn remove(&self, id: &E::Id) -> ServiceResult<()> {
        self.hook();
        let mut rows = self.rows.write().await;
        rows.retain(|row| row.id() != Some(id));
        Ok(())
    }
}

impl<E: Entity + Clone> BatchDeleteUseCase<E::Id> for MemoryStore<E> {
    async fn remove_all(&self, ids: Vec<E::Id>) -> ServiceResult<()> {
        self.hook();
        let mut rows = self.rows.write().await;
        rows.retain(|row| row.id().map_or(true, |id| !ids.contains(id)));
        Ok(())
    }
}
