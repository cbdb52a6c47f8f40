//! Shared test utilities.

#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use credvault::vault::{BlobStore, MemoryBlobStore};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a test-writer subscriber once; honours `RUST_LOG`.
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// In-memory blob store whose reads and writes can be made to fail.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryBlobStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FlakyStore {
    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::SeqCst);
    }

    fn unavailable() -> io::Error {
        io::Error::new(io::ErrorKind::Other, "device storage unavailable")
    }
}

impl BlobStore for FlakyStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.remove(key)
    }
}
