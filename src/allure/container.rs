// Evidence container: fixture steps wrapped around one or more results

use super::Step;
use crate::time;
use serde::Serialize;
use uuid::Uuid;

/// Holds the ordered `befores` and `afters` fixture steps of a suite or test.
///
/// Insertion order is presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub uuid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub children: Vec<String>,
    pub befores: Vec<Step>,
    pub afters: Vec<Step>,
    pub start: i64,
    pub stop: i64,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            name: String::new(),
            children: Vec::new(),
            befores: Vec::new(),
            afters: Vec::new(),
            start: 0,
            stop: 0,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// Register a wrapped result by uuid; duplicates are ignored
    pub fn add_child(&mut self, uuid: impl Into<String>) {
        let uuid = uuid.into();
        if !self.children.contains(&uuid) {
            self.children.push(uuid);
        }
    }

    pub fn begin(&mut self) {
        self.start = time::now_unix_millis();
    }

    pub fn finish(&mut self) {
        self.stop = time::now_unix_millis();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_container_is_empty() {
        let container = Container::new();
        assert!(container.befores.is_empty());
        assert!(container.afters.is_empty());
        assert!(container.children.is_empty());
        assert!(Uuid::parse_str(&container.uuid).is_ok());
    }

    #[test]
    fn test_add_child_dedupes() {
        let mut container = Container::named("suite");
        container.add_child("abc");
        container.add_child("abc");
        container.add_child("def");
        assert_eq!(container.children, vec!["abc", "def"]);
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn test_begin_finish_stamps_times() {
        let mut container = Container::new();
        container.begin();
        container.finish();
        assert!(container.start > 0);
        assert!(container.stop >= container.start);
    }
}
