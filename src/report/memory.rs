// In-memory sink - keeps serialized report entries for inspection

use super::ReportSink;
use crate::allure::{Container, TestResult};
use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::{Mutex, PoisonError};

/// Collects the JSON form of everything written to it
#[derive(Debug, Default)]
pub struct MemorySink {
    results: Mutex<Vec<Value>>,
    containers: Mutex<Vec<Value>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results written so far, in write order
    pub fn results(&self) -> Vec<Value> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Containers written so far, in write order
    pub fn containers(&self) -> Vec<Value> {
        self.containers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ReportSink for MemorySink {
    fn write_result(&self, result: &TestResult) -> Result<()> {
        let value = serde_json::to_value(result)
            .with_context(|| format!("Failed to serialize result {}", result.full_name))?;
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
        Ok(())
    }

    fn write_container(&self, container: &Container) -> Result<()> {
        let value = serde_json::to_value(container)
            .with_context(|| format!("Failed to serialize container {}", container.uuid))?;
        self.containers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
        Ok(())
    }
}
