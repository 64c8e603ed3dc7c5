// Report module - hand-off of finished evidence to a sink

pub mod memory;

use crate::allure::{Container, TestResult};
use anyhow::Result;

pub use memory::MemorySink;

/// Receives finished results and containers for rendering or persistence
pub trait ReportSink: Send + Sync {
    /// Called once per test result
    fn write_result(&self, result: &TestResult) -> Result<()>;

    /// Called for every test or suite container
    fn write_container(&self, container: &Container) -> Result<()>;
}
