use hexa_core::ErrorCategory;
use hexa_data::prelude::*;
use hexa_test::MemoryStore;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: Option<u64>,
    total: u32,
}

impl Order {
    fn new(total: u32) -> Self {
        Self { id: None, total }
    }
}

impl Entity for Order {
    type Id = u64;

    fn id(&self) -> Option<&u64> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }
}

fn store() -> MemoryStore<Order> {
    MemoryStore::sequential()
}

#[tokio::test]
async fn create_assigns_an_id_and_keeps_the_rest() {
    let store = store();
    let input = Order::new(12);

    let created = store.create(Some(input.clone())).await.unwrap();
    assert_eq!(created.id, Some(1));
    assert_eq!(created.total, input.total);

    assert_eq!(store.find_by_id(Some(&1)).await.unwrap(), Some(created));
}

#[tokio::test]
async fn create_with_known_id_replaces_the_row() {
    let store = store().with_rows(vec![Order::new(1), Order::new(2)]);

    let updated = Order {
        id: Some(2),
        total: 99,
    };
    store.create(Some(updated.clone())).await.unwrap();

    assert_eq!(store.len().await, 2);
    assert_eq!(store.find_by_id(Some(&2)).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn generated_ids_skip_preloaded_ones() {
    let store = store().with_rows(vec![
        Order {
            id: Some(1),
            total: 5,
        },
        Order {
            id: Some(2),
            total: 6,
        },
    ]);

    let created = store.create(Some(Order::new(7))).await.unwrap();
    assert_eq!(created.id, Some(3));
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn generated_ids_skip_ids_preloaded_later_in_the_list() {
    let store = store().with_rows(vec![
        Order::new(5),
        Order {
            id: Some(1),
            total: 6,
        },
    ]);

    let ids: Vec<_> = store.snapshot().await.into_iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![Some(2), Some(1)]);

    assert_eq!(store.find_by_id(Some(&1)).await.unwrap().map(|o| o.total), Some(6));
    store.delete(Some(&2)).await.unwrap();
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn missing_rows_are_empty_results() {
    let store = store();
    assert_eq!(store.find_by_id(Some(&42)).await.unwrap(), None);
    assert!(!store.exists_by_id(Some(&42)).await.unwrap());
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn absent_arguments_never_reach_the_store() {
    let store = store();

    let errors = [
        store.find_by_id(None).await.unwrap_err(),
        store.exists_by_id(None).await.unwrap_err(),
        store.find_all_paged(None).await.map(|_| ()).unwrap_err(),
        store.create(None).await.map(|_| ()).unwrap_err(),
        store.create_all(None).await.map(|_| ()).unwrap_err(),
        store
            .create_all(Some(vec![Some(Order::new(1)), None]))
            .await
            .map(|_| ())
            .unwrap_err(),
        store.delete(None).await.unwrap_err(),
        store.delete_all(Some(vec![Some(1), None])).await.unwrap_err(),
    ];

    for err in &errors {
        assert_eq!(err.category(), ErrorCategory::Validation, "{err}");
    }
    assert_eq!(store.hook_calls(), 0);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn pages_slice_in_insertion_order() {
    let store = store().with_rows((1..=5).map(Order::new).collect());

    let first = store
        .find_all_paged(Some(&Pageable::new(0, 2)))
        .await
        .unwrap();
    assert_eq!(
        first.content.iter().map(|o| o.total).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(first.total_elements, 5);
    assert_eq!(first.total_pages, 3);
    assert!(first.has_next());

    let last = store
        .find_all_paged(Some(&Pageable::new(2, 2)))
        .await
        .unwrap();
    assert_eq!(last.number_of_elements(), 1);
    assert!(!last.has_next());

    let beyond = store
        .find_all_paged(Some(&Pageable::new(9, 2)))
        .await
        .unwrap();
    assert!(beyond.is_empty());
    assert_eq!(beyond.total_elements, 5);
}

#[tokio::test]
async fn delete_removes_and_tolerates_missing_ids() {
    let store = store().with_rows((1..=4).map(Order::new).collect());

    store.delete(Some(&2)).await.unwrap();
    store.delete(Some(&2)).await.unwrap();
    assert!(!store.exists_by_id(Some(&2)).await.unwrap());

    store
        .delete_all(Some(vec![Some(1), Some(4), Some(77)]))
        .await
        .unwrap();
    let remaining: Vec<_> = store.snapshot().await.into_iter().filter_map(|o| o.id).collect();
    assert_eq!(remaining, vec![3]);
}

#[tokio::test]
async fn rejected_inserts_are_service_failures() {
    let store = store().reject_when(|order| {
        (order.total == 0).then(|| "an order needs at least one line".to_string())
    });

    let err = store.create(Some(Order::new(0))).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Service);
    assert_eq!(err.message(), "an order needs at least one line");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn batch_create_is_all_or_nothing() {
    let store = store().reject_when(|order| (order.total > 100).then(|| "too large".to_string()));

    let err = store
        .create_all(Some(vec![Some(Order::new(1)), Some(Order::new(500))]))
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Service);
    assert!(store.is_empty().await);

    let created = store
        .create_all(Some(vec![Some(Order::new(1)), Some(Order::new(2))]))
        .await
        .unwrap();
    assert_eq!(
        created.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![Some(1), Some(2)]
    );
}

#[tokio::test]
async fn clones_share_rows() {
    let store = store();
    let other = store.clone();

    store.create(Some(Order::new(3))).await.unwrap();
    assert_eq!(other.find_all().await.unwrap().len(), 1);
    assert_eq!(other.hook_calls(), 2);
}

async fn count<R: ReadOnlyUseCase<Order, u64>>(reader: &R) -> usize {
    reader.find_all().await.map(|all| all.len()).unwrap_or(0)
}

#[tokio::test]
async fn store_is_a_crud_use_case() {
    fn assert_crud<T: CrudUseCase<Order, u64>>(_: &T) {}

    let store = store().with_rows(vec![Order::new(1)]);
    assert_crud(&store);
    assert_eq!(count(&store).await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_creates_get_distinct_ids() {
    let store = store();
    let handles: Vec<_> = (0..16)
        .map(|n| {
            let store = store.clone();
            tokio::spawn(async move { store.create(Some(Order::new(n))).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=16).collect::<Vec<_>>());
}
