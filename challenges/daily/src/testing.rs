//! Case runner: loads JSON case files and checks a problem's answers against them.
//!
//! A case file holds an array of `{"input": {...}, "expected": ...}` objects. Case
//! files live in `<data_dir>/<category>/<problem>/*.json` and are run in file name
//! order.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::{CaseError, RunError, SolveFn};

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub input: Value,
    pub expected: Value,
}

#[derive(Debug)]
pub enum Verdict {
    Passed,
    Failed { expected: Value, actual: Value },
    Errored(CaseError),
}

#[derive(Debug)]
pub struct CaseOutcome {
    /// Case file the case was read from.
    pub source: PathBuf,
    /// Position of the case within its file.
    pub index: usize,
    pub input: Value,
    pub verdict: Verdict,
    pub duration: Duration,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.verdict, Verdict::Passed)
    }
}

#[derive(Debug)]
pub struct Report {
    pub category: String,
    pub problem: String,
    pub outcomes: Vec<CaseOutcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn total_duration(&self) -> Duration {
        self.outcomes.iter().map(|o| o.duration).sum()
    }
}

/// Discover all case files for a given problem, sorted by file name.
pub fn discover_cases(
    data_dir: &Path,
    category: &str,
    problem: &str,
) -> Result<Vec<PathBuf>, RunError> {
    let case_dir = data_dir.join(category).join(problem);
    let entries = fs::read_dir(&case_dir).map_err(|source| RunError::Io {
        path: case_dir.clone(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    files.sort_unstable();
    Ok(files)
}

pub fn load_cases(path: &Path) -> Result<Vec<Case>, RunError> {
    let raw = fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| RunError::CaseFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Evaluate each case and compare the answer with the expected JSON value.
pub fn run_cases(source: &Path, cases: Vec<Case>, solve: SolveFn) -> Vec<CaseOutcome> {
    cases
        .into_iter()
        .enumerate()
        .map(|(index, case)| {
            let start = Instant::now();
            let result = solve(case.input.clone());
            let duration = start.elapsed();

            let verdict = match result {
                Ok(actual) if actual == case.expected => Verdict::Passed,
                Ok(actual) => {
                    warn!(
                        "{} case {}: expected {}, got {}",
                        source.display(),
                        index,
                        case.expected,
                        actual
                    );
                    Verdict::Failed {
                        expected: case.expected,
                        actual,
                    }
                }
                Err(err) => {
                    warn!("{} case {}: {}", source.display(), index, err);
                    Verdict::Errored(err)
                }
            };
            debug!("{} case {} took {:?}", source.display(), index, duration);

            CaseOutcome {
                source: source.to_path_buf(),
                index,
                input: case.input,
                verdict,
                duration,
            }
        })
        .collect()
}

/// Run every case file for a problem and collect the outcomes.
pub fn run_problem(
    data_dir: &Path,
    category: &str,
    problem: &str,
    solve: SolveFn,
) -> Result<Report, RunError> {
    let files = discover_cases(data_dir, category, problem)?;
    if files.is_empty() {
        return Err(RunError::NoCases {
            category: category.to_string(),
            problem: problem.to_string(),
        });
    }

    let mut outcomes = Vec::new();
    for file in &files {
        let cases = load_cases(file)?;
        debug!("loaded {} cases from {}", cases.len(), file.display());
        outcomes.extend(run_cases(file, cases, solve));
    }

    let report = Report {
        category: category.to_string(),
        problem: problem.to_string(),
        outcomes,
    };
    info!(
        "{}/{}: {} passed, {} failed",
        category,
        problem,
        report.passed(),
        report.failed()
    );
    Ok(report)
}

/// Verify all cases for a problem, panicking on the first one that does not pass.
pub fn verify_all_cases(data_dir: &Path, category: &str, problem: &str, solve: SolveFn) {
    let report = match run_problem(data_dir, category, problem, solve) {
        Ok(report) => report,
        Err(e) => panic!("{}/{}: {}", category, problem, e),
    };

    for outcome in &report.outcomes {
        match &outcome.verdict {
            Verdict::Passed => {}
            Verdict::Failed { expected, actual } => panic!(
                "{} case {} failed\nInput: {}\nExpected: {}\nActual: {}",
                outcome.source.display(),
                outcome.index,
                outcome.input,
                expected,
                actual
            ),
            Verdict::Errored(e) => panic!(
                "{} case {} error: {}",
                outcome.source.display(),
                outcome.index,
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn echo_bool(input: Value) -> Result<Value, CaseError> {
        #[derive(Deserialize)]
        struct Input {
            flag: bool,
        }
        let Input { flag } = serde_json::from_value(input)?;
        Ok(Value::Bool(flag))
    }

    fn write_cases(dir: &TempDir, file: &str, body: &str) {
        let case_dir = dir.path().join("cat").join("echo");
        fs::create_dir_all(&case_dir).unwrap();
        fs::write(case_dir.join(file), body).unwrap();
    }

    #[test]
    fn test_discover_sorted_json_only() {
        let dir = TempDir::new().unwrap();
        write_cases(&dir, "b.json", "[]");
        write_cases(&dir, "a.json", "[]");
        write_cases(&dir, "notes.txt", "ignored");

        let files = discover_cases(dir.path(), "cat", "echo").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = discover_cases(dir.path(), "cat", "echo").unwrap_err();
        assert!(matches!(err, RunError::Io { .. }));
    }

    #[test]
    fn test_no_cases() {
        let dir = TempDir::new().unwrap();
        write_cases(&dir, "readme.md", "");
        let err = run_problem(dir.path(), "cat", "echo", echo_bool).unwrap_err();
        assert!(matches!(err, RunError::NoCases { .. }));
    }

    #[test]
    fn test_invalid_case_file() {
        let dir = TempDir::new().unwrap();
        write_cases(&dir, "1.json", "{not json");
        let err = run_problem(dir.path(), "cat", "echo", echo_bool).unwrap_err();
        assert!(matches!(err, RunError::CaseFile { .. }));
    }

    #[test]
    fn test_verdicts() {
        let cases = vec![
            Case {
                input: json!({"flag": true}),
                expected: json!(true),
            },
            Case {
                input: json!({"flag": false}),
                expected: json!(true),
            },
            Case {
                input: json!({"other": 1}),
                expected: json!(false),
            },
        ];
        let outcomes = run_cases(Path::new("inline.json"), cases, echo_bool);

        assert!(matches!(outcomes[0].verdict, Verdict::Passed));
        assert!(matches!(
            &outcomes[1].verdict,
            Verdict::Failed { expected, actual } if *expected == json!(true) && *actual == json!(false)
        ));
        assert!(matches!(outcomes[2].verdict, Verdict::Errored(CaseError::Input(_))));
        assert_eq!(outcomes[2].index, 2);
    }

    #[test]
    fn test_report_counts() {
        let dir = TempDir::new().unwrap();
        write_cases(
            &dir,
            "1.json",
            r#"[{"input": {"flag": true}, "expected": true},
                {"input": {"flag": true}, "expected": false}]"#,
        );
        write_cases(&dir, "2.json", r#"[{"input": {"flag": false}, "expected": false}]"#);

        let report = run_problem(dir.path(), "cat", "echo", echo_bool).unwrap();
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
    }
}
