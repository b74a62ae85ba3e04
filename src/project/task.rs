// src/project/task.rs

//! The task record carried by project vertices.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, TimeDelta};
use tracing::debug;

use crate::errors::{Result, TrackerError};

/// A unit of work inside a [`Project`](crate::project::Project).
///
/// Identity is the `name` alone: `PartialEq` and `Hash` ignore every other
/// field, so two tasks with the same name are the same graph vertex even when
/// their descriptions or dates differ. The name has no setter; the remaining
/// fields are plain data.
#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    description: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    percent_complete: f64,
}

impl Task {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start_date: None,
            end_date: None,
            percent_complete: 0.0,
        }
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_percent_complete(mut self, percent: impl Into<f64>) -> Result<Self> {
        self.set_percent_complete(percent)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
    }

    pub fn percent_complete(&self) -> f64 {
        self.percent_complete
    }

    /// Set completion, which must lie in `[0, 100]`. NaN is rejected.
    pub fn set_percent_complete(&mut self, percent: impl Into<f64>) -> Result<()> {
        let percent = percent.into();
        if !(0.0..=100.0).contains(&percent) {
            return Err(TrackerError::PercentOutOfRange(percent));
        }

        debug!(task = %self.name, percent, "updated percent complete");
        self.percent_complete = percent;
        Ok(())
    }

    /// `end_date - start_date`.
    ///
    /// Fails if either date is unset. An end date before the start date gives
    /// a negative duration.
    pub fn duration(&self) -> Result<TimeDelta> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Ok(end.signed_duration_since(start)),
            _ => Err(TrackerError::DurationUndefined(self.name.clone())),
        }
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task({} : {} : from {} to {})",
            self.name,
            self.description,
            display_date(self.start_date),
            display_date(self.end_date)
        )
    }
}

fn display_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string())
        .unwrap_or_else(|| "unset".to_string())
}
