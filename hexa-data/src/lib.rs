pub mod entity;
pub mod guard;
pub mod page;
pub mod usecase;

pub use entity::Entity;
pub use page::{Page, Pageable, PagingConfig};
pub use usecase::{
    BatchDeleteUseCase, BatchFindUseCase, BatchPersistUseCase, CrudUseCase, DeleteOnlyUseCase,
    DeleteUseCase, FindUseCase, PersistUseCase, PersistenceOnlyUseCase, ReadOnlyUseCase,
};

pub mod prelude {
    //! Re-exports of the most commonly used data types.
    pub use crate::usecase::{
        BatchDeleteUseCase, BatchFindUseCase, BatchPersistUseCase, CrudUseCase,
        DeleteOnlyUseCase, DeleteUseCase, FindUseCase, PersistUseCase, PersistenceOnlyUseCase,
        ReadOnlyUseCase,
    };
    pub use crate::{Entity, Page, Pageable};
}
