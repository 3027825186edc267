use std::future::Future;

use hexa_core::ServiceResult;

use crate::guard;

/// Create (store) a single entity.
pub trait PersistUseCase<E>: Send + Sync
where
    E: Send + 'static,
{
    /// Store `entity` and return it as stored, including anything the adapter
    /// assigned such as a generated identifier.
    fn insert(&self, entity: E) -> impl Future<Output = ServiceResult<E>> + Send;

    /// # Errors
    ///
    /// `Validation` when `entity` is `None`; `Service` when the adapter
    /// rejects it on business grounds.
    fn create(&self, entity: Option<E>) -> impl Future<Output = ServiceResult<E>> + Send {
        async move {
            let entity = guard::require(entity, "entity")?;
            self.insert(entity).await
        }
    }
}

/// Create (store) several entities in one call.
pub trait BatchPersistUseCase<E>: Send + Sync
where
    E: Send + 'static,
{
    fn insert_all(&self, entities: Vec<E>) -> impl Future<Output = ServiceResult<Vec<E>>> + Send;

    /// # Errors
    ///
    /// `Validation` when `entities` is `None` or holds a `None`; nothing is
    /// handed to the adapter in that case.
    fn create_all(
        &self,
        entities: Option<Vec<Option<E>>>,
    ) -> impl Future<Output = ServiceResult<Vec<E>>> + Send {
        async move {
            let entities = guard::require_each(entities, "entities")?;
            self.insert_all(entities).await
        }
    }
}
