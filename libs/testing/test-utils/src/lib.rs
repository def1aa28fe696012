//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: deterministic test data (always available)
//! - `assertions`: custom assertion helpers (always available)
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!     let db = mongo.database(&builder.database_name());
//!     let name = builder.item_name("main");
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// The same seed always produces the same ids and names, so failures are
/// reproducible.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Deterministic v4-shaped item id
    pub fn item_id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        uuid::Builder::from_random_bytes(uuid_bytes).into_uuid()
    }

    /// `test-<prefix>-<seed>-<suffix>`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// assert!(builder.name("item", "main").starts_with("test-item-"));
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    pub fn item_name(&self, suffix: &str) -> String {
        self.name("item", suffix)
    }

    /// Database name unique to this seed, so tests sharing a container
    /// do not see each other's documents.
    pub fn database_name(&self) -> String {
        format!("test_{}", self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    use chrono::{DateTime, Utc};
    use std::time::Duration;

    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `actual` lies within `tolerance` of the current time.
    pub fn assert_recent(actual: DateTime<Utc>, tolerance: Duration, context: &str) {
        let drift = (Utc::now() - actual).abs();
        let drift = drift.to_std().unwrap_or(Duration::MAX);
        assert!(
            drift <= tolerance,
            "{}: {} is {:?} away from now (tolerance {:?})",
            context,
            actual,
            drift,
            tolerance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.item_id(), builder2.item_id());
        assert_eq!(builder1.item_name("a"), builder2.item_name("a"));
        assert_eq!(builder1.database_name(), builder2.database_name());
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.item_id(), builder2.item_id());
    }

    #[test]
    fn test_item_id_is_v4() {
        let id = TestDataBuilder::new(7).item_id();
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_assert_recent_accepts_now() {
        assertions::assert_recent(chrono::Utc::now(), std::time::Duration::from_secs(1), "now");
    }

    #[test]
    #[should_panic(expected = "stale")]
    fn test_assert_recent_rejects_old_timestamp() {
        let old = chrono::Utc::now() - chrono::Duration::minutes(5);
        assertions::assert_recent(old, std::time::Duration::from_secs(1), "stale");
    }
}
