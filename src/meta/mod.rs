// Test and suite metadata
// Owners of the evidence containers, results and hooks the manager routes into

pub mod suite;

pub use suite::SuiteMetadata;
pub use test::TestMetadata;

use crate::allure::{SharedContainer, SharedResult};
use crate::ctx::ExecutionContext;
use std::sync::Arc;

/// Hook or test body. The current context is passed in explicitly.
pub type Hook = Arc<dyn Fn(&dyn ExecutionContext) + Send + Sync>;

/// Wrap a closure into a [`Hook`]
pub fn hook<F>(f: F) -> Hook
where
    F: Fn(&dyn ExecutionContext) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Per-test metadata
pub trait TestMeta: Send {
    fn container(&self) -> SharedContainer;

    fn result(&self) -> Option<SharedResult>;

    fn set_result(&mut self, result: SharedResult);

    fn before_each(&self) -> Option<Hook>;

    fn set_before_each(&mut self, hook: Hook);

    fn after_each(&self) -> Option<Hook>;

    fn set_after_each(&mut self, hook: Hook);
}

/// Per-suite metadata. Naming accessors are passed through to reports
/// untouched.
pub trait SuiteMeta: Send {
    fn package_name(&self) -> &str;

    fn runner(&self) -> &str;

    fn suite_name(&self) -> &str;

    fn parent_suite(&self) -> &str;

    fn suite_full_name(&self) -> &str;

    fn container(&self) -> SharedContainer;

    fn before_all(&self) -> Option<Hook>;

    fn set_before_all(&mut self, hook: Hook);

    fn after_all(&self) -> Option<Hook>;

    fn set_after_all(&mut self, hook: Hook);
}
