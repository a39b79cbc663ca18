//! Shared state fixtures for the reducer suites.

#![allow(dead_code)]

use refold::ListState;
use serde::{Deserialize, Serialize};

/// Map-shaped state: a nested record, an optional field, and an
/// array-typed field, so merge behavior is observable at every level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub name: String,
    pub owner: Option<String>,
    pub panel: Panel,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub visible: bool,
    pub width: u32,
    pub shortcuts: Vec<String>,
}

pub fn workspace() -> Workspace {
    Workspace {
        name: "main".to_string(),
        owner: Some("sam".to_string()),
        panel: Panel {
            visible: true,
            width: 80,
            shortcuts: vec!["ctrl-p".to_string(), "ctrl-f".to_string()],
        },
        tags: vec!["draft".to_string(), "local".to_string()],
    }
}

/// List-shaped state with string items plus a field every list action
/// must carry through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    pub revision: u64,
    pub list: Vec<String>,
}

impl ListState for Queue {
    type Item = String;

    fn list(&self) -> &[String] {
        &self.list
    }

    fn with_list(mut self, list: Vec<String>) -> Self {
        self.list = list;
        self
    }
}

pub fn queue(items: &[&str]) -> Queue {
    Queue {
        revision: 7,
        list: items.iter().map(|item| item.to_string()).collect(),
    }
}

/// Integer-item variant for the numeric equality properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    pub list: Vec<i32>,
}

impl ListState for Readings {
    type Item = i32;

    fn list(&self) -> &[i32] {
        &self.list
    }

    fn with_list(mut self, list: Vec<i32>) -> Self {
        self.list = list;
        self
    }
}

pub fn readings(items: &[i32]) -> Readings {
    Readings {
        list: items.to_vec(),
    }
}
