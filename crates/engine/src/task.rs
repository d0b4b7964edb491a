//! Tasks and the editing session built around them.
//!
//! A task is a set of demonstration pairs (`train`) plus pairs to solve
//! (`test`). The session owns the read-only test input grid and the
//! `GridEditEngine` holding the output being edited.

use std::fmt;

use serde::{Deserialize, Serialize};
use taskgrid_config::EditorSettings;
use taskgrid_core::Grid;

use crate::editor::GridEditEngine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPair {
    pub input: Grid,
    /// Missing for test pairs whose answer is withheld.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Grid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub train: Vec<TaskPair>,
    pub test: Vec<TaskPair>,
}

impl Task {
    pub fn from_json(input: &str) -> Result<Self, TaskError> {
        let task: Task = serde_json::from_str(input).map_err(|e| TaskError::Parse(e.to_string()))?;
        if task.test.is_empty() {
            return Err(TaskError::NoTestPairs);
        }
        Ok(task)
    }

    pub fn to_json(&self) -> Result<String, TaskError> {
        serde_json::to_string(self).map_err(|e| TaskError::Parse(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Malformed JSON, or a grid that fails validation.
    Parse(String),
    /// Task has nothing to solve.
    NoTestPairs,
    /// Already at the last test input.
    NoNextTestInput { total: usize },
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "bad task format: {msg}"),
            Self::NoTestPairs => write!(f, "task has no test pairs"),
            Self::NoNextTestInput { total } => write!(f, "no next test input ({total} total)"),
        }
    }
}

impl std::error::Error for TaskError {}

/// Outcome of comparing the edited output with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionCheck {
    Correct,
    Wrong,
    /// The current test pair carries no expected output.
    NoReference,
}

#[derive(Debug, Clone)]
pub struct TaskSession {
    task: Option<Task>,
    test_index: usize,
    input: Grid,
    engine: GridEditEngine,
}

impl Default for TaskSession {
    fn default() -> Self {
        Self::new(&EditorSettings::default())
    }
}

impl TaskSession {
    /// Session with no task loaded: blank input and output.
    pub fn new(settings: &EditorSettings) -> Self {
        let engine = GridEditEngine::with_settings(settings);
        Self {
            task: None,
            test_index: 0,
            input: Grid::blank(engine.default_size()),
            engine,
        }
    }

    /// Switch to `task`: first test input, blank output, empty history.
    pub fn load(&mut self, task: Task) -> Result<(), TaskError> {
        let first = task.test.first().ok_or(TaskError::NoTestPairs)?;
        self.input = first.input.clone();
        self.test_index = 0;
        self.engine.reset_task();
        log::debug!(
            "loaded task: {} train pair(s), {} test pair(s)",
            task.train.len(),
            task.test.len()
        );
        self.task = Some(task);
        Ok(())
    }

    pub fn load_json(&mut self, json: &str) -> Result<(), TaskError> {
        self.load(Task::from_json(json)?)
    }

    /// Drop the task and start over with blank grids.
    pub fn clear(&mut self) {
        self.task = None;
        self.test_index = 0;
        self.input = Grid::blank(self.engine.default_size());
        self.engine.reset_task();
    }

    pub fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    pub fn input(&self) -> &Grid {
        &self.input
    }

    pub fn engine(&self) -> &GridEditEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GridEditEngine {
        &mut self.engine
    }

    pub fn test_index(&self) -> usize {
        self.test_index
    }

    pub fn test_count(&self) -> usize {
        self.task.as_ref().map_or(0, |t| t.test.len())
    }

    /// Advance to the next test input. The output grid and history are kept.
    pub fn next_test_input(&mut self) -> Result<usize, TaskError> {
        let total = self.test_count();
        let next = self.test_index + 1;
        let pair = self
            .task
            .as_ref()
            .and_then(|t| t.test.get(next))
            .ok_or(TaskError::NoNextTestInput { total })?;
        self.input = pair.input.clone();
        self.test_index = next;
        Ok(next)
    }

    /// Replace the output with the current input (undoable).
    pub fn copy_from_input(&mut self) {
        self.engine.copy_from_source(&self.input);
    }

    pub fn check_solution(&self) -> SolutionCheck {
        let expected = self
            .task
            .as_ref()
            .and_then(|t| t.test.get(self.test_index))
            .and_then(|pair| pair.output.as_ref());
        match expected {
            None => SolutionCheck::NoReference,
            Some(expected) if expected == self.engine.grid() => SolutionCheck::Correct,
            Some(_) => SolutionCheck::Wrong,
        }
    }
}
