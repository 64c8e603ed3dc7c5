// Allure report model
// Evidence containers, test results, steps and attachments

pub mod attachment;
pub mod container;
pub mod result;
pub mod step;

pub use attachment::{Attachment, MimeType};
pub use container::Container;
pub use result::{Label, Parameter, Stage, StatusDetails, TestResult};
pub use step::Step;

use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, TryLockError};
use std::time::{Duration, Instant};

/// Shared handle to a suite or test evidence container
pub type SharedContainer = Arc<RwLock<Container>>;

/// Shared handle to a test result
pub type SharedResult = Arc<RwLock<TestResult>>;

/// Wrap a value into a shared, lockable handle
pub fn share<T>(value: T) -> Arc<RwLock<T>> {
    Arc::new(RwLock::new(value))
}

/// Acquire a read guard, recovering the data if a writer panicked.
///
/// Evidence is append-only, so a poisoned lock still holds a usable value.
pub fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Acquire a write guard, recovering the data if a writer panicked.
pub fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Acquire a write guard, giving readers up to `wait` to release the lock.
///
/// Returns `None` when the lock is still held after `wait`.
pub fn try_write_for<T>(lock: &RwLock<T>, wait: Duration) -> Option<RwLockWriteGuard<'_, T>> {
    let deadline = Instant::now() + wait;
    loop {
        match lock.try_write() {
            Ok(guard) => return Some(guard),
            Err(TryLockError::Poisoned(e)) => return Some(e.into_inner()),
            Err(TryLockError::WouldBlock) if Instant::now() < deadline => {
                std::thread::yield_now()
            }
            Err(TryLockError::WouldBlock) => return None,
        }
    }
}

/// Test or step status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Passed,
    Failed,
    Broken,
    Skipped,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
            Status::Broken => "broken",
            Status::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
