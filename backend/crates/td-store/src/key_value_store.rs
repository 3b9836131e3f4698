use crate::Result as StoreErrorResult;

/// Persistent string key/value collaborator behind the session store.
///
/// Implementations take `&self` and handle their own synchronization. A
/// completed `set_item` must be visible to the next `get_item`.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> StoreErrorResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StoreErrorResult<()>;

    /// Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> StoreErrorResult<()>;

    /// Remove several keys in one step. Either all are removed or none are.
    fn remove_items(&self, keys: &[&str]) -> StoreErrorResult<()>;

    fn all_keys(&self) -> StoreErrorResult<Vec<String>>;
}
