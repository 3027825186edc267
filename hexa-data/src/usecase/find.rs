use std::future::Future;

use hexa_core::ServiceResult;

use crate::guard;
use crate::page::{Page, Pageable};

/// Look up a single entity by identifier, or check that it exists.
///
/// Callers use [`find_by_id`](Self::find_by_id) and
/// [`exists_by_id`](Self::exists_by_id). Adapters implement the `load_*`
/// hooks, which only ever see a present identifier. A missing entity is
/// `Ok(None)` / `Ok(false)`, not an error.
pub trait FindUseCase<E, ID>: Send + Sync
where
    E: Send + 'static,
    ID: Send + Sync + 'static,
{
    fn load_by_id(&self, id: &ID) -> impl Future<Output = ServiceResult<Option<E>>> + Send;

    fn load_exists(&self, id: &ID) -> impl Future<Output = ServiceResult<bool>> + Send;

    /// Find the entity identified by `id`.
    ///
    /// # Errors
    ///
    /// `Validation` when `id` is `None`; whatever the adapter reports otherwise.
    fn find_by_id(&self, id: Option<&ID>) -> impl Future<Output = ServiceResult<Option<E>>> + Send {
        async move {
            let id = guard::require(id, "id")?;
            self.load_by_id(id).await
        }
    }

    /// Check whether an entity identified by `id` exists.
    ///
    /// # Errors
    ///
    /// `Validation` when `id` is `None`; whatever the adapter reports otherwise.
    fn exists_by_id(&self, id: Option<&ID>) -> impl Future<Output = ServiceResult<bool>> + Send {
        async move {
            let id = guard::require(id, "id")?;
            self.load_exists(id).await
        }
    }
}

/// List entities, either all at once or one page at a time.
pub trait BatchFindUseCase<E>: Send + Sync
where
    E: Send + 'static,
{
    fn load_all(&self) -> impl Future<Output = ServiceResult<Vec<E>>> + Send;

    fn load_page(&self, pageable: &Pageable) -> impl Future<Output = ServiceResult<Page<E>>> + Send;

    /// Every entity, unpaged.
    fn find_all(&self) -> impl Future<Output = ServiceResult<Vec<E>>> + Send {
        self.load_all()
    }

    /// One page of entities.
    ///
    /// # Errors
    ///
    /// `Validation` when `pageable` is `None`.
    fn find_all_paged(
        &self,
        pageable: Option<&Pageable>,
    ) -> impl Future<Output = ServiceResult<Page<E>>> + Send {
        async move {
            let pageable = guard::require(pageable, "pageable")?;
            self.load_page(pageable).await
        }
    }
}
