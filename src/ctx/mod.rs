// Execution contexts
// One context per lifecycle phase, each wired to the evidence destination of that phase

pub mod hooks;

pub use hooks::{AfterAllCtx, AfterEachCtx, BeforeAllCtx, BeforeEachCtx};
pub use test::TestCtx;

use crate::allure::{self, Attachment, SharedResult, Step};
use serde::Serialize;
use std::sync::{RwLock, RwLockWriteGuard};
use std::time::Duration;

/// How long a recording call waits for outstanding readers
pub const RECORD_WAIT: Duration = Duration::from_millis(500);

/// Lifecycle phase a context belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhaseName {
    #[serde(rename = "beforeAll")]
    BeforeAll,
    #[serde(rename = "afterAll")]
    AfterAll,
    #[serde(rename = "beforeEach")]
    BeforeEach,
    #[serde(rename = "afterEach")]
    AfterEach,
    #[serde(rename = "test")]
    Test,
}

impl PhaseName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseName::BeforeAll => "beforeAll",
            PhaseName::AfterAll => "afterAll",
            PhaseName::BeforeEach => "beforeEach",
            PhaseName::AfterEach => "afterEach",
            PhaseName::Test => "test",
        }
    }

    /// Whether the phase runs at suite scope rather than test scope
    pub fn is_suite_scope(&self) -> bool {
        matches!(self, PhaseName::BeforeAll | PhaseName::AfterAll)
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recording surface shared by hooks and test bodies.
///
/// Implementations never mutate their own fields after construction, so the
/// accessors are safe to call from many threads at once. Recording goes
/// through the shared container or result handle the context aliases.
pub trait ExecutionContext: Send + Sync {
    /// Phase this context was built for
    fn name(&self) -> PhaseName;

    /// Append a step to the phase's destination
    fn add_step(&self, step: Step);

    /// Append attachments to the last step of the phase's destination.
    ///
    /// An empty destination gets a placeholder step first; an empty batch is
    /// a no-op.
    fn add_attachments(&self, attachments: Vec<Attachment>);

    /// Result of the running test, when the phase can see one
    ///
    /// # Deadlocks
    ///
    /// Recording in the test phase writes through this same handle. Drop any
    /// guard taken on it before calling `add_step` or `add_attachments`;
    /// a guard still held after [`RECORD_WAIT`] makes the recording call
    /// panic.
    fn test_result(&self) -> Option<SharedResult>;
}

/// Lock a recording destination for `phase`.
///
/// # Panics
///
/// Panics when the destination stays borrowed for longer than
/// [`RECORD_WAIT`].
pub(crate) fn record_into<T>(phase: PhaseName, lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    match allure::try_write_for(lock, RECORD_WAIT) {
        Some(guard) => guard,
        None => panic!(
            "{} context cannot record: destination is still borrowed; drop guards taken from test_result() before recording",
            phase
        ),
    }
}

impl std::fmt::Debug for dyn ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("name", &self.name())
            .field("has_result", &self.test_result().is_some())
            .finish()
    }
}
