//! In-memory registry store.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use crate::domain::{ServerAddress, ServerName};
use crate::error::StoreError;
use crate::port::{RegistryStore, StoredRegistry};

/// Store that keeps the document in memory.
///
/// Call [`fail_writes`](Self::fail_writes) to make every subsequent `save`
/// fail, simulating a full disk, or [`slow_writes`](Self::slow_writes) to
/// make each `save` sleep first.
#[derive(Default)]
pub struct MemoryStore {
    document: Mutex<StoredRegistry>,
    fail_writes: AtomicBool,
    write_delay_ms: AtomicU64,
    saves: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with `(name, address)` pairs.
    ///
    /// # Panics
    ///
    /// Panics on an invalid name or address; seeds are test fixtures.
    #[must_use]
    pub fn with_servers(entries: &[(&str, &str)]) -> Self {
        let document = entries
            .iter()
            .map(|(name, address)| {
                (
                    ServerName::parse(name).expect("valid seed name"),
                    ServerAddress::parse(address).expect("valid seed address"),
                )
            })
            .collect();
        Self {
            document: Mutex::new(document),
            ..Self::default()
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn slow_writes(&self, delay: Duration) {
        let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.write_delay_ms.store(millis, Ordering::SeqCst);
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current stored document.
    #[must_use]
    pub fn snapshot(&self) -> StoredRegistry {
        self.document.lock().clone()
    }
}

impl RegistryStore for MemoryStore {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> Result<StoredRegistry, StoreError> {
        Ok(self.document.lock().clone())
    }

    fn save(&self, servers: &StoredRegistry) -> Result<(), StoreError> {
        let delay = self.write_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            std::thread::sleep(Duration::from_millis(delay));
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write {
                path: PathBuf::from("memory"),
                source: std::io::Error::other("simulated write failure"),
            });
        }
        *self.document.lock() = servers.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
