// Step records

use super::{Attachment, Parameter, Stage, Status, StatusDetails};
use crate::time;
use serde::Serialize;

/// A named unit of recorded test activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<StatusDetails>,
    pub stage: Stage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    pub start: i64,
    pub stop: i64,
}

impl Step {
    /// Create a finished, passed step stamped with the current time
    pub fn new(name: impl Into<String>) -> Self {
        let now = time::now_unix_millis();
        Self {
            name: name.into(),
            status: Status::Passed,
            status_details: None,
            stage: Stage::Finished,
            steps: Vec::new(),
            attachments: Vec::new(),
            parameters: Vec::new(),
            start: now,
            stop: now,
        }
    }

    /// Unnamed step that carries attachments recorded outside any open step
    pub fn placeholder() -> Self {
        Self::new("")
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.status_details
            .get_or_insert_with(StatusDetails::default)
            .message = Some(message.into());
        self
    }

    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments.extend(attachments);
        self
    }

    pub fn with_steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps.extend(steps);
        self
    }

    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Close the step, stamping its stop time
    pub fn finish(&mut self) {
        self.stop = time::now_unix_millis();
        self.stage = Stage::Finished;
    }
}

/// Append attachments to the last step of `steps`, synthesizing a
/// placeholder step when the sequence is empty.
pub(crate) fn attach_to_last(steps: &mut Vec<Step>, attachments: Vec<Attachment>) {
    if attachments.is_empty() {
        return;
    }
    if steps.is_empty() {
        steps.push(Step::placeholder());
    }
    if let Some(last) = steps.last_mut() {
        last.attachments.extend(attachments);
    }
}
