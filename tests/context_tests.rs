// Execution context behaviour through the public API

use allure_lifecycle::allure::{
    Attachment, Container, SharedResult, Status, Step, TestResult, read, share, write,
};
use allure_lifecycle::ctx::{
    AfterAllCtx, AfterEachCtx, BeforeAllCtx, BeforeEachCtx, ExecutionContext, PhaseName, TestCtx,
};
use std::sync::Arc;
use std::thread;

fn result_with(name: &str, status: Status) -> SharedResult {
    let result = share(TestResult::new(name, format!("suite/{}", name)));
    write(&result).status = status;
    result
}

#[test]
fn test_before_each_step_lands_in_befores() {
    // Arrange
    let container = share(Container::new());
    let ctx = BeforeEachCtx::new(container.clone());
    let step = Step::new("seed database");

    // Act
    ctx.add_step(step.clone());

    // Assert
    let container = read(&container);
    assert_eq!(container.befores, vec![step]);
    assert!(container.afters.is_empty());
}

#[test]
fn test_after_all_attachment_gets_placeholder_step() {
    // Arrange
    let container = share(Container::new());
    let ctx = AfterAllCtx::new(container.clone());
    let attach = Attachment::text("server log", "shutdown ok");

    // Act
    ctx.add_attachments(vec![attach.clone()]);

    // Assert
    let container = read(&container);
    assert_eq!(container.afters.len(), 1);
    assert_eq!(container.afters[0].attachments, vec![attach]);
    assert!(container.befores.is_empty());
}

#[test]
fn test_after_each_preserves_failed_status_and_message() {
    // Arrange
    let result = result_with("TestWillNotRun", Status::Failed);
    write(&result).set_status_message("TestWillNotRun/BeforeEach setup was failed");

    // Act
    let ctx = AfterEachCtx::with_result(share(Container::new()), Some(result));

    // Assert
    let retrieved = ctx.test_result().expect("result should be present");
    let retrieved = read(&retrieved);
    assert_eq!(retrieved.status, Status::Failed);
    assert_eq!(
        retrieved.status_message(),
        Some("TestWillNotRun/BeforeEach setup was failed")
    );
}

#[test]
fn test_before_each_has_no_result() {
    let ctx = BeforeEachCtx::new(share(Container::new()));
    assert!(ctx.test_result().is_none());
}

#[test]
fn test_names_match_construction() {
    let container = share(Container::new());
    let contexts: Vec<(Box<dyn ExecutionContext>, PhaseName)> = vec![
        (Box::new(BeforeAllCtx::new(container.clone())), PhaseName::BeforeAll),
        (Box::new(AfterAllCtx::new(container.clone())), PhaseName::AfterAll),
        (Box::new(BeforeEachCtx::new(container.clone())), PhaseName::BeforeEach),
        (Box::new(AfterEachCtx::new(container.clone())), PhaseName::AfterEach),
        (
            Box::new(TestCtx::new(Some(result_with("Named", Status::Passed)))),
            PhaseName::Test,
        ),
    ];

    for (ctx, expected) in contexts {
        assert_eq!(ctx.name(), expected);
        ctx.add_step(Step::new("noise"));
        assert_eq!(ctx.name(), expected);
    }
}

#[test]
fn test_result_absent_for_suite_and_setup_phases() {
    let container = share(Container::new());
    assert!(BeforeAllCtx::new(container.clone()).test_result().is_none());
    assert!(AfterAllCtx::new(container.clone()).test_result().is_none());
    assert!(BeforeEachCtx::new(container).test_result().is_none());
}

#[test]
fn test_body_result_for_every_status() {
    for status in [Status::Passed, Status::Failed, Status::Broken, Status::Skipped] {
        let ctx = TestCtx::new(Some(result_with("Test", status)));
        let retrieved = ctx.test_result().expect("result should be present");
        assert_eq!(read(&retrieved).status, status, "{}", status);
    }
}

#[test]
fn test_body_result_keeps_status_details() {
    let result = result_with("TestWithDetails", Status::Failed);
    {
        let mut result = write(&result);
        result.set_status_message("Assertion failed: expected 1, got 2");
        result.set_status_trace("trace stack here");
    }

    let ctx = TestCtx::new(Some(result.clone()));

    let retrieved = ctx.test_result().unwrap();
    assert!(Arc::ptr_eq(&retrieved, &result));
    let retrieved = read(&retrieved);
    assert_eq!(
        retrieved.status_message(),
        Some("Assertion failed: expected 1, got 2")
    );
    assert_eq!(retrieved.status_trace(), Some("trace stack here"));
}

#[test]
fn test_step_order_is_call_order() {
    let container = share(Container::new());
    let ctx = AfterEachCtx::new(container.clone());
    let names = ["close", "flush", "drop tables", "report"];

    for name in names {
        ctx.add_step(Step::new(name));
    }

    let recorded: Vec<String> = read(&container)
        .afters
        .iter()
        .map(|s| s.name.clone())
        .collect();
    assert_eq!(recorded, names);
}

#[test]
fn test_nested_attachments_are_kept_as_is() {
    let result = result_with("Nested", Status::Passed);
    let ctx = TestCtx::new(Some(result.clone()));
    let step = Step::new("call")
        .with_attachments([Attachment::text("request", "{}")])
        .with_steps([Step::new("dial").with_attachments([Attachment::text("addr", "::1")])]);

    ctx.add_step(step.clone());

    assert_eq!(read(&result).steps, vec![step]);
}

#[test]
fn test_concurrent_reads_after_each() {
    let result = result_with("TestConcurrent", Status::Passed);
    let ctx: Arc<dyn ExecutionContext> = Arc::new(AfterEachCtx::with_result(
        share(Container::new()),
        Some(result.clone()),
    ));

    thread::scope(|s| {
        for _ in 0..10 {
            let ctx = Arc::clone(&ctx);
            let expected = Arc::clone(&result);
            s.spawn(move || {
                let r = ctx.test_result().expect("result should be present");
                assert!(Arc::ptr_eq(&r, &expected));
                assert_eq!(read(&r).status, Status::Passed);
                assert_eq!(ctx.name(), PhaseName::AfterEach);
            });
        }
    });
}

#[test]
fn test_concurrent_reads_test_body() {
    let result = result_with("ConcurrentTest", Status::Passed);
    let ctx: Arc<dyn ExecutionContext> = Arc::new(TestCtx::new(Some(result)));

    thread::scope(|s| {
        for _ in 0..20 {
            s.spawn(|| {
                let r = ctx.test_result().expect("result should be present");
                assert_eq!(read(&r).status, Status::Passed);
                assert_eq!(read(&r).name, "ConcurrentTest");
            });
        }
    });
}
