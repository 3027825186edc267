/// An entity whose identifier may be assigned by the adapter that stores it.
///
/// Generic adapters use this to tell new entities (`id()` is `None`) from
/// existing ones, and to write back a generated identifier on create.
///
/// # Example
///
/// ```
/// use hexa_data::Entity;
///
/// #[derive(Clone)]
/// struct Order {
///     id: Option<u64>,
///     total: u32,
/// }
///
/// impl Entity for Order {
///     type Id = u64;
///     fn id(&self) -> Option<&u64> { self.id.as_ref() }
///     fn set_id(&mut self, id: u64) { self.id = Some(id); }
/// }
/// ```
pub trait Entity: Send + Sync + 'static {
    type Id: Clone + PartialEq + Send + Sync + std::fmt::Debug + 'static;

    fn id(&self) -> Option<&Self::Id>;
    fn set_id(&mut self, id: Self::Id);
}
