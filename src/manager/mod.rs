// Report manager
// Tracks the active lifecycle phase and routes recorded evidence through it

use crate::allure::{self, Attachment, Step};
use crate::ctx::{
    AfterAllCtx, AfterEachCtx, BeforeAllCtx, BeforeEachCtx, ExecutionContext, TestCtx,
};
use crate::meta::{Hook, SuiteMeta, TestMeta, TestMetadata};
use crate::report::ReportSink;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// Phase mediator for one suite or test.
///
/// Every `enter_*` call builds a fresh context for that phase and replaces
/// the current one. Phase order is not validated; the runner drives it.
/// A manager is driven from one thread, while the context it hands out may
/// be read from many.
pub struct ReportManager {
    suite_meta: Box<dyn SuiteMeta>,
    test_meta: Box<dyn TestMeta>,
    execution_context: Option<Arc<dyn ExecutionContext>>,
}

impl ReportManager {
    pub fn new(suite_meta: Box<dyn SuiteMeta>, test_meta: Box<dyn TestMeta>) -> Self {
        Self {
            suite_meta,
            test_meta,
            execution_context: None,
        }
    }

    /// Manager with empty test metadata, for suite-level phases
    pub fn for_suite(suite_meta: Box<dyn SuiteMeta>) -> Self {
        Self::new(suite_meta, Box::new(TestMetadata::new()))
    }

    pub fn suite_meta(&self) -> &dyn SuiteMeta {
        self.suite_meta.as_ref()
    }

    pub fn test_meta(&self) -> &dyn TestMeta {
        self.test_meta.as_ref()
    }

    /// Swap the test metadata, returning the previous one
    pub fn set_test_meta(&mut self, test_meta: Box<dyn TestMeta>) -> Box<dyn TestMeta> {
        std::mem::replace(&mut self.test_meta, test_meta)
    }

    /// Swap the suite metadata, returning the previous one
    pub fn set_suite_meta(&mut self, suite_meta: Box<dyn SuiteMeta>) -> Box<dyn SuiteMeta> {
        std::mem::replace(&mut self.suite_meta, suite_meta)
    }

    /// Current context; `None` until a phase has been entered
    pub fn execution_context(&self) -> Option<Arc<dyn ExecutionContext>> {
        self.execution_context.clone()
    }

    pub fn enter_suite_before(&mut self) {
        let ctx = BeforeAllCtx::new(self.suite_meta.container());
        self.install(Arc::new(ctx));
    }

    pub fn enter_suite_after(&mut self) {
        let ctx = AfterAllCtx::new(self.suite_meta.container());
        self.install(Arc::new(ctx));
    }

    pub fn enter_test_before(&mut self) {
        let ctx = BeforeEachCtx::new(self.test_meta.container());
        self.install(Arc::new(ctx));
    }

    /// Teardown sees the test result when one exists
    pub fn enter_test_after(&mut self) {
        let ctx = AfterEachCtx::with_result(self.test_meta.container(), self.test_meta.result());
        self.install(Arc::new(ctx));
    }

    pub fn enter_test_body(&mut self) {
        let ctx = TestCtx::new(self.test_meta.result());
        self.install(Arc::new(ctx));
    }

    fn install(&mut self, ctx: Arc<dyn ExecutionContext>) {
        let phase = ctx.name();
        let scope = if phase.is_suite_scope() {
            self.suite_meta.suite_full_name().to_string()
        } else {
            self.test_meta
                .result()
                .map(|r| allure::read(&r).full_name.clone())
                .unwrap_or_default()
        };
        debug!("Entering {} phase [{}]", phase, scope);
        self.execution_context = Some(ctx);
    }

    pub fn before_all(&mut self, hook: Hook) {
        self.suite_meta.set_before_all(hook);
    }

    pub fn after_all(&mut self, hook: Hook) {
        self.suite_meta.set_after_all(hook);
    }

    pub fn before_each(&mut self, hook: Hook) {
        self.test_meta.set_before_each(hook);
    }

    pub fn after_each(&mut self, hook: Hook) {
        self.test_meta.set_after_each(hook);
    }

    /// Record a step in the current phase
    pub fn step(&self, step: Step) {
        match &self.execution_context {
            Some(ctx) => ctx.add_step(step),
            None => warn!("Dropping step '{}': no phase entered", step.name),
        }
    }

    /// Record attachments in the current phase
    pub fn with_attachments(&self, attachments: Vec<Attachment>) {
        match &self.execution_context {
            Some(ctx) => ctx.add_attachments(attachments),
            None => warn!(
                "Dropping {} attachment(s): no phase entered",
                attachments.len()
            ),
        }
    }

    /// Hand the test result and container to `sink`
    pub fn publish_test(&self, sink: &dyn ReportSink) -> Result<()> {
        if let Some(result) = self.test_meta.result() {
            sink.write_result(&allure::read(&result))?;
        }
        sink.write_container(&allure::read(&self.test_meta.container()))
    }

    /// Hand the suite container to `sink`
    pub fn publish_suite(&self, sink: &dyn ReportSink) -> Result<()> {
        sink.write_container(&allure::read(&self.suite_meta.container()))
    }
}

impl std::fmt::Debug for ReportManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportManager")
            .field("suite", &self.suite_meta.suite_full_name())
            .field("execution_context", &self.execution_context)
            .finish()
    }
}
