use std::path::Path;

use serde_json::Value;

pub mod arrays_hashing;
pub mod error;
pub mod testing;

pub use error::{CaseError, RunError};

/// Adapter from a JSON case input to the JSON form of a problem's answer.
pub type SolveFn = fn(Value) -> Result<Value, CaseError>;

/// A named category of problems, each registered under its own name.
pub struct TaskGroup {
    name: &'static str,
    tasks: Vec<(&'static str, SolveFn)>,
}

impl TaskGroup {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tasks: Vec::new(),
        }
    }

    pub fn add(mut self, problem: &'static str, solve: SolveFn) -> Self {
        self.tasks.push((problem, solve));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Problem names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.iter().map(|(name, _)| *name)
    }

    pub fn get(&self, problem: &str) -> Option<SolveFn> {
        self.tasks
            .iter()
            .find(|(name, _)| *name == problem)
            .map(|(_, solve)| *solve)
    }

    /// Run every case file found under `data_dir/<category>/<problem>`.
    pub fn run(&self, data_dir: &Path, problem: &str) -> Result<testing::Report, RunError> {
        let solve = self.get(problem).ok_or_else(|| RunError::UnknownProblem {
            category: self.name.to_string(),
            problem: problem.to_string(),
        })?;
        testing::run_problem(data_dir, self.name, problem, solve)
    }
}

/// All registered categories.
pub fn categories() -> Vec<TaskGroup> {
    vec![arrays_hashing::tasks()]
}

pub fn find_category(name: &str) -> Option<TaskGroup> {
    categories().into_iter().find(|group| group.name() == name)
}
