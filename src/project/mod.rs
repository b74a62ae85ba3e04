// src/project/mod.rs

//! Projects: tasks linked by prerequisite edges.
//!
//! A [`Project`] owns a directed [`Graph`] of [`Task`]s. Every project starts
//! with a synthetic root task named `"start"`; top-level tasks hang off it.
//! An edge `a -> b` means `a` must precede `b`.

pub mod task;

pub use task::Task;

use std::fmt;

use tracing::{debug, info, warn};

use crate::errors::{Result, TrackerError};
use crate::graph::Graph;

/// Name of the synthetic root task every project starts with.
pub const ROOT_TASK_NAME: &str = "start";

const ROOT_TASK_DESCRIPTION: &str = "base node for all projects";

#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    description: String,
    root: Task,
    graph: Graph<Task>,
}

impl Project {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let root = Task::new(ROOT_TASK_NAME, ROOT_TASK_DESCRIPTION);
        let graph = Graph::with_vertices([root.clone()], true);
        let name = name.into();

        info!(project = %name, "created project");

        Self {
            name,
            description: description.into(),
            root,
            graph,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The synthetic `"start"` task. Never removed.
    pub fn root(&self) -> &Task {
        &self.root
    }

    /// All tasks in insertion order, root first.
    pub fn tasks(&self) -> &[Task] {
        self.graph.vertices()
    }

    /// Read-only view of the underlying prerequisite graph.
    pub fn graph(&self) -> &Graph<Task> {
        &self.graph
    }

    /// Number of tasks, root included.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Always `false`: the root task is always present.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Add `task` as a dependent of `prerequisite`.
    ///
    /// `prerequisite` must already be in the project (the root or an earlier
    /// task); otherwise nothing changes and `VertexNotFound` is returned.
    /// A task whose name is already present is not inserted again; only the
    /// prerequisite edge is added to the existing one.
    pub fn add_task(&mut self, prerequisite: &Task, task: Task) -> Result<()> {
        if !self.graph.contains(prerequisite) {
            warn!(
                project = %self.name,
                prerequisite = %prerequisite.name(),
                task = %task.name(),
                "prerequisite is not part of the project"
            );
            return Err(TrackerError::VertexNotFound(prerequisite.name().to_string()));
        }

        if !self.graph.add_vertex(task.clone()) {
            debug!(task = %task.name(), "task name already present; only linking it");
        }
        self.graph.add_edge((prerequisite.clone(), task))?;
        Ok(())
    }

    /// Like [`Project::add_task`], with the prerequisite looked up by name.
    pub fn add_task_after(&mut self, prerequisite: &str, task: Task) -> Result<()> {
        let prerequisite = self
            .get_task(prerequisite)
            .cloned()
            .ok_or_else(|| TrackerError::VertexNotFound(prerequisite.to_string()))?;
        self.add_task(&prerequisite, task)
    }

    /// Remove `task` and every prerequisite edge touching it.
    ///
    /// Returns the task as stored in the project.
    pub fn remove_task(&mut self, task: &Task) -> Result<Task> {
        if *task == self.root {
            warn!(project = %self.name, "refusing to remove the root task");
            return Err(TrackerError::RootTask);
        }
        if !self.graph.contains(task) {
            return Err(TrackerError::VertexNotFound(task.name().to_string()));
        }

        let removed = self.graph.remove_vertex(task)?;
        info!(project = %self.name, task = %removed.name(), "removed task");
        Ok(removed)
    }

    /// First task (in insertion order) named `name`.
    pub fn get_task(&self, name: &str) -> Option<&Task> {
        self.graph.vertices().iter().find(|t| t.name() == name)
    }

    /// Tasks that list `task` as a direct prerequisite, in insertion order.
    ///
    /// `None` if `task` is not in the project.
    pub fn dependents_of(&self, task: &Task) -> Option<Vec<&Task>> {
        let dependents = self.graph.neighbors(task)?;
        Some(
            self.graph
                .vertices()
                .iter()
                .filter(|t| dependents.contains(*t))
                .collect(),
        )
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project({{")?;
        for (i, (task, dependents)) in self.graph.adjacency().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let mut names: Vec<&str> = dependents.iter().map(Task::name).collect();
            names.sort_unstable();
            write!(f, "{}: {{{}}}", task.name(), names.join(", "))?;
        }
        write!(f, "}})")
    }
}
