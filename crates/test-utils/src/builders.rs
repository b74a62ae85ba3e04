#![allow(dead_code)]

use chrono::NaiveDate;
use project_tracker::{Graph, Project, Task};

/// Builder for `Task` to keep test setup short.
pub struct TaskBuilder {
    name: String,
    description: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    percent: f64,
}

impl TaskBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            start: None,
            end: None,
            percent: 0.0,
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Dates are given as `(year, month, day)`.
    pub fn starts(mut self, (y, m, d): (i32, u32, u32)) -> Self {
        self.start = Some(date(y, m, d));
        self
    }

    pub fn ends(mut self, (y, m, d): (i32, u32, u32)) -> Self {
        self.end = Some(date(y, m, d));
        self
    }

    pub fn percent(mut self, percent: f64) -> Self {
        self.percent = percent;
        self
    }

    pub fn build(self) -> Task {
        let description = self
            .description
            .unwrap_or_else(|| format!("{} description", self.name));
        let mut task = Task::new(self.name, description)
            .with_percent_complete(self.percent)
            .expect("builder percent must be within [0, 100]");
        task.set_start_date(self.start);
        task.set_end_date(self.end);
        task
    }
}

/// Shorthand for a task with a generated description.
pub fn task(name: &str) -> Task {
    TaskBuilder::new(name).build()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// Graph over the vertices `1..=n` with no edges.
pub fn numbered_graph(n: i32, directed: bool) -> Graph<i32> {
    Graph::with_vertices(1..=n, directed)
}

/// `P` with `start -> a -> b` and `start -> c`.
pub fn sample_project() -> Project {
    let mut project = Project::new("P", "d");
    let root = project.root().clone();
    let a = task("a");
    project.add_task(&root, a.clone()).expect("root is present");
    project.add_task(&a, task("b")).expect("a was just added");
    project.add_task(&root, task("c")).expect("root is present");
    project
}
