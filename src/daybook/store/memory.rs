use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::DaybookError;

    /// Store whose reads and writes can be made to fail on demand,
    /// for exercising the error paths of the diary core.
    #[derive(Default)]
    pub struct FlakyStore {
        inner: InMemoryStore,
        pub fail_reads: bool,
        pub fail_writes: bool,
    }

    impl FlakyStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seeded(key: &str, value: &str) -> Self {
            let mut inner = InMemoryStore::new();
            inner.set(key, value).unwrap();
            Self {
                inner,
                fail_reads: false,
                fail_writes: false,
            }
        }

        /// The value currently held for `key`, bypassing failure toggles.
        pub fn raw(&self, key: &str) -> Option<String> {
            self.inner.get(key).unwrap()
        }
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads {
                return Err(DaybookError::Storage("storage unavailable".to_string()));
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            if self.fail_writes {
                return Err(DaybookError::Storage("storage unavailable".to_string()));
            }
            self.inner.set(key, value)
        }
    }
}
