// Hook contexts: suite and per-test fixtures
// "before" phases record into `befores`, "after" phases into `afters`

use super::{ExecutionContext, PhaseName, record_into};
use crate::allure::step::attach_to_last;
use crate::allure::{Attachment, SharedContainer, SharedResult, Step};
use tracing::trace;

/// Suite setup
#[derive(Debug, Clone)]
pub struct BeforeAllCtx {
    container: SharedContainer,
}

impl BeforeAllCtx {
    pub fn new(container: SharedContainer) -> Self {
        Self { container }
    }
}

impl ExecutionContext for BeforeAllCtx {
    fn name(&self) -> PhaseName {
        PhaseName::BeforeAll
    }

    fn add_step(&self, step: Step) {
        trace!("{}: step '{}'", self.name(), step.name);
        record_into(self.name(), &self.container).befores.push(step);
    }

    fn add_attachments(&self, attachments: Vec<Attachment>) {
        trace!("{}: {} attachment(s)", self.name(), attachments.len());
        attach_to_last(&mut record_into(self.name(), &self.container).befores, attachments);
    }

    fn test_result(&self) -> Option<SharedResult> {
        None
    }
}

/// Suite teardown
#[derive(Debug, Clone)]
pub struct AfterAllCtx {
    container: SharedContainer,
}

impl AfterAllCtx {
    pub fn new(container: SharedContainer) -> Self {
        Self { container }
    }
}

impl ExecutionContext for AfterAllCtx {
    fn name(&self) -> PhaseName {
        PhaseName::AfterAll
    }

    fn add_step(&self, step: Step) {
        trace!("{}: step '{}'", self.name(), step.name);
        record_into(self.name(), &self.container).afters.push(step);
    }

    fn add_attachments(&self, attachments: Vec<Attachment>) {
        trace!("{}: {} attachment(s)", self.name(), attachments.len());
        attach_to_last(&mut record_into(self.name(), &self.container).afters, attachments);
    }

    fn test_result(&self) -> Option<SharedResult> {
        None
    }
}

/// Per-test setup
#[derive(Debug, Clone)]
pub struct BeforeEachCtx {
    container: SharedContainer,
}

impl BeforeEachCtx {
    pub fn new(container: SharedContainer) -> Self {
        Self { container }
    }
}

impl ExecutionContext for BeforeEachCtx {
    fn name(&self) -> PhaseName {
        PhaseName::BeforeEach
    }

    fn add_step(&self, step: Step) {
        trace!("{}: step '{}'", self.name(), step.name);
        record_into(self.name(), &self.container).befores.push(step);
    }

    fn add_attachments(&self, attachments: Vec<Attachment>) {
        trace!("{}: {} attachment(s)", self.name(), attachments.len());
        attach_to_last(&mut record_into(self.name(), &self.container).befores, attachments);
    }

    fn test_result(&self) -> Option<SharedResult> {
        None
    }
}

/// Per-test teardown.
///
/// Carries the test result, when one exists, so teardown code can inspect
/// how the body ended. A context built without a result is valid: the hook
/// ran but no body outcome was recorded.
#[derive(Debug, Clone)]
pub struct AfterEachCtx {
    container: SharedContainer,
    result: Option<SharedResult>,
}

impl AfterEachCtx {
    pub fn new(container: SharedContainer) -> Self {
        Self {
            container,
            result: None,
        }
    }

    pub fn with_result(container: SharedContainer, result: Option<SharedResult>) -> Self {
        Self { container, result }
    }
}

impl ExecutionContext for AfterEachCtx {
    fn name(&self) -> PhaseName {
        PhaseName::AfterEach
    }

    fn add_step(&self, step: Step) {
        trace!("{}: step '{}'", self.name(), step.name);
        record_into(self.name(), &self.container).afters.push(step);
    }

    fn add_attachments(&self, attachments: Vec<Attachment>) {
        trace!("{}: {} attachment(s)", self.name(), attachments.len());
        attach_to_last(&mut record_into(self.name(), &self.container).afters, attachments);
    }

    fn test_result(&self) -> Option<SharedResult> {
        self.result.clone()
    }
}
