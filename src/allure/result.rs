// Test result structures

use super::{Attachment, Status, Step};
use crate::time;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle stage of a result or step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Scheduled,
    #[default]
    Running,
    Finished,
    Pending,
    Interrupted,
}

/// Message and trace explaining a status
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub value: String,
}

impl Label {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Result of a single test body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub uuid: String,
    pub history_id: String,
    pub name: String,
    pub full_name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<StatusDetails>,
    pub stage: Stage,
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    pub start: i64,
    pub stop: i64,
}

impl TestResult {
    /// Create a running result; `history_id` is stable for a given full name
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let history_id = Uuid::new_v5(&Uuid::NAMESPACE_OID, full_name.as_bytes()).to_string();
        Self {
            uuid: Uuid::new_v4().to_string(),
            history_id,
            name: name.into(),
            full_name,
            status: Status::Passed,
            status_details: None,
            stage: Stage::Running,
            labels: Vec::new(),
            parameters: Vec::new(),
            steps: Vec::new(),
            attachments: Vec::new(),
            start: 0,
            stop: 0,
        }
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_details
            .get_or_insert_with(StatusDetails::default)
            .message = Some(message.into());
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_details.as_ref()?.message.as_deref()
    }

    pub fn set_status_trace(&mut self, trace: impl Into<String>) {
        self.status_details
            .get_or_insert_with(StatusDetails::default)
            .trace = Some(trace.into());
    }

    pub fn status_trace(&self) -> Option<&str> {
        self.status_details.as_ref()?.trace.as_deref()
    }

    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// First label value registered under `name`
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.value.as_str())
    }

    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    pub fn begin(&mut self) {
        self.start = time::now_unix_millis();
        self.stage = Stage::Running;
    }

    pub fn finish(&mut self) {
        self.stop = time::now_unix_millis();
        self.stage = Stage::Finished;
    }
}
