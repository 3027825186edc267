//! Use-case contracts implemented by adapters.
//!
//! Each trait pairs public operations, which validate their arguments, with
//! adapter hooks that receive validated arguments only. The composites below
//! add nothing; they are implemented for every type that implements their
//! parts.

mod delete;
mod find;
mod persist;

pub use delete::{BatchDeleteUseCase, DeleteUseCase};
pub use find::{BatchFindUseCase, FindUseCase};
pub use persist::{BatchPersistUseCase, PersistUseCase};

/// Single and batch lookups.
pub trait ReadOnlyUseCase<E, ID>: FindUseCase<E, ID> + BatchFindUseCase<E>
where
    E: Send + 'static,
    ID: Send + Sync + 'static,
{
}

impl<T, E, ID> ReadOnlyUseCase<E, ID> for T
where
    T: FindUseCase<E, ID> + BatchFindUseCase<E> + ?Sized,
    E: Send + 'static,
    ID: Send + Sync + 'static,
{
}

/// Single and batch creation.
pub trait PersistenceOnlyUseCase<E>: PersistUseCase<E> + BatchPersistUseCase<E>
where
    E: Send + 'static,
{
}

impl<T, E> PersistenceOnlyUseCase<E> for T
where
    T: PersistUseCase<E> + BatchPersistUseCase<E> + ?Sized,
    E: Send + 'static,
{
}

/// Single and batch deletion.
pub trait DeleteOnlyUseCase<ID>: DeleteUseCase<ID> + BatchDeleteUseCase<ID>
where
    ID: Send + Sync + 'static,
{
}

impl<T, ID> DeleteOnlyUseCase<ID> for T
where
    T: DeleteUseCase<ID> + BatchDeleteUseCase<ID> + ?Sized,
    ID: Send + Sync + 'static,
{
}

/// Read, create and delete.
pub trait CrudUseCase<E, ID>:
    ReadOnlyUseCase<E, ID> + PersistenceOnlyUseCase<E> + DeleteOnlyUseCase<ID>
where
    E: Send + 'static,
    ID: Send + Sync + 'static,
{
}

impl<T, E, ID> CrudUseCase<E, ID> for T
where
    T: ReadOnlyUseCase<E, ID> + PersistenceOnlyUseCase<E> + DeleteOnlyUseCase<ID> + ?Sized,
    E: Send + 'static,
    ID: Send + Sync + 'static,
{
}
