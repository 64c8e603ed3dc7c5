// Suite metadata

use super::{Hook, SuiteMeta};
use crate::allure::{Container, SharedContainer, share};

#[derive(Clone)]
pub struct SuiteMetadata {
    package_name: String,
    runner: String,
    suite_name: String,
    parent_suite: String,
    full_name: String,
    container: SharedContainer,
    before_all: Option<Hook>,
    after_all: Option<Hook>,
}

impl SuiteMetadata {
    /// Create suite metadata; the full name is `<package>/<suite>`
    pub fn new(package_name: impl Into<String>, suite_name: impl Into<String>) -> Self {
        let package_name = package_name.into();
        let suite_name = suite_name.into();
        let full_name = if package_name.is_empty() {
            suite_name.clone()
        } else {
            format!("{}/{}", package_name, suite_name)
        };

        Self {
            runner: suite_name.clone(),
            container: share(Container::named(&full_name)),
            package_name,
            suite_name,
            parent_suite: String::new(),
            full_name,
            before_all: None,
            after_all: None,
        }
    }

    pub fn with_runner(mut self, runner: impl Into<String>) -> Self {
        self.runner = runner.into();
        self
    }

    pub fn with_parent_suite(mut self, parent_suite: impl Into<String>) -> Self {
        self.parent_suite = parent_suite.into();
        self
    }
}

impl std::fmt::Debug for SuiteMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuiteMetadata")
            .field("full_name", &self.full_name)
            .field("runner", &self.runner)
            .field("parent_suite", &self.parent_suite)
            .field("before_all", &self.before_all.is_some())
            .field("after_all", &self.after_all.is_some())
            .finish()
    }
}

impl SuiteMeta for SuiteMetadata {
    fn package_name(&self) -> &str {
        &self.package_name
    }

    fn runner(&self) -> &str {
        &self.runner
    }

    fn suite_name(&self) -> &str {
        &self.suite_name
    }

    fn parent_suite(&self) -> &str {
        &self.parent_suite
    }

    fn suite_full_name(&self) -> &str {
        &self.full_name
    }

    fn container(&self) -> SharedContainer {
        self.container.clone()
    }

    fn before_all(&self) -> Option<Hook> {
        self.before_all.clone()
    }

    fn set_before_all(&mut self, hook: Hook) {
        self.before_all = Some(hook);
    }

    fn after_all(&self) -> Option<Hook> {
        self.after_all.clone()
    }

    fn set_after_all(&mut self, hook: Hook) {
        self.after_all = Some(hook);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allure::read;
    use crate::meta::hook;
    use std::sync::Arc;

    #[test]
    fn test_suite_naming() {
        let suite = SuiteMetadata::new("payments", "RefundSuite")
            .with_runner("TestRunRefunds")
            .with_parent_suite("Billing");

        assert_eq!(suite.package_name(), "payments");
        assert_eq!(suite.suite_name(), "RefundSuite");
        assert_eq!(suite.runner(), "TestRunRefunds");
        assert_eq!(suite.parent_suite(), "Billing");
        assert_eq!(suite.suite_full_name(), "payments/RefundSuite");
        assert_eq!(read(&suite.container()).name, "payments/RefundSuite");
    }

    #[test]
    fn test_full_name_without_package() {
        let suite = SuiteMetadata::new("", "Lonely");
        assert_eq!(suite.suite_full_name(), "Lonely");
        assert_eq!(suite.runner(), "Lonely");
    }

    #[test]
    fn test_container_is_shared() {
        let suite = SuiteMetadata::new("pkg", "S");
        assert!(Arc::ptr_eq(&suite.container(), &suite.container()));
    }

    #[test]
    fn test_hooks_are_stored_separately() {
        let mut suite = SuiteMetadata::new("pkg", "S");
        assert!(suite.before_all().is_none());

        let before = hook(|_| {});
        suite.set_before_all(before.clone());

        assert!(Arc::ptr_eq(&suite.before_all().unwrap(), &before));
        assert!(suite.after_all().is_none());
    }
}
