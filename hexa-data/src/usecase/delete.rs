use std::future::Future;

use hexa_core::ServiceResult;

use crate::guard;

/// Delete a single entity by identifier.
pub trait DeleteUseCase<ID>: Send + Sync
where
    ID: Send + Sync + 'static,
{
    fn remove(&self, id: &ID) -> impl Future<Output = ServiceResult<()>> + Send;

    /// # Errors
    ///
    /// `Validation` when `id` is `None`; `Service` when the deletion breaks a
    /// business rule.
    fn delete(&self, id: Option<&ID>) -> impl Future<Output = ServiceResult<()>> + Send {
        async move {
            let id = guard::require(id, "id")?;
            self.remove(id).await
        }
    }
}

/// Delete several entities by identifier.
pub trait BatchDeleteUseCase<ID>: Send + Sync
where
    ID: Send + Sync + 'static,
{
    fn remove_all(&self, ids: Vec<ID>) -> impl Future<Output = ServiceResult<()>> + Send;

    /// # Errors
    ///
    /// `Validation` when `ids` is `None` or holds a `None`; nothing is
    /// handed to the adapter in that case.
    fn delete_all(
        &self,
        ids: Option<Vec<Option<ID>>>,
    ) -> impl Future<Output = ServiceResult<()>> + Send {
        async move {
            let ids = guard::require_each(ids, "ids")?;
            self.remove_all(ids).await
        }
    }
}
