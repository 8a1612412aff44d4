//! Repository Layer - Core Traits

/// Synchronous string key-value storage.
///
/// Writes are assumed to succeed; implementations that can fail (quota,
/// private browsing) log and carry on.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}
