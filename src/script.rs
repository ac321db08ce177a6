// =============================================================================
// Script runner: apply a TOML-described sequence of list operations
// =============================================================================

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;
use itertools::Itertools;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{LinkedList, ListError};

/// Element type driven by scripts. A missing `value` in the script becomes
/// `None`, which the list rejects as absent.
pub type Value = Option<i64>;

/// Scenario run when the binary is started without a script.
pub const DEMO_SCRIPT: &str = r#"
[list]
initial = []

[[op]]
kind = "add"
value = 5

[[op]]
kind = "add"
value = 7

[[op]]
kind = "add_at"
index = 1
value = 9

[[op]]
kind = "add_at"
index = 5
value = 4

[[op]]
kind = "add"

[[op]]
kind = "set"
index = 1
value = 99

[[op]]
kind = "remove_value"
value = 7

[[op]]
kind = "contains"
value = 99

[[op]]
kind = "iterate"

[[op]]
kind = "remove"

[[op]]
kind = "remove_at"
index = 0

[[op]]
kind = "remove"

[[op]]
kind = "get"
index = 0
"#;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read script {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLevel(String),

    #[error(transparent)]
    List(#[from] ListError),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

// =============================================================================
// Script model
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_string()
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ScriptError> {
        self.level
            .parse()
            .map_err(|_| ScriptError::InvalidLevel(self.level.clone()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: Self::default_level(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListConfig {
    #[serde(default)]
    pub initial: Vec<i64>,
}

/// One list operation. Indices are zero based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Op {
    Add {
        #[serde(default)]
        value: Value,
    },
    AddAt {
        index: usize,
        #[serde(default)]
        value: Value,
    },
    Remove,
    RemoveAt {
        index: usize,
    },
    RemoveValue {
        #[serde(default)]
        value: Value,
    },
    Set {
        index: usize,
        #[serde(default)]
        value: Value,
    },
    Get {
        index: usize,
    },
    Contains {
        #[serde(default)]
        value: Value,
    },
    Clear,
    Size,
    IsEmpty,
    ToVec,
    Iterate,
}

impl Op {
    /// Applies the operation and describes its result.
    pub fn apply(&self, list: &mut LinkedList<Value>) -> Result<String, ListError> {
        match self {
            Op::Add { value } => list.add(*value).map(|_| "ok".to_string()),
            Op::AddAt { index, value } => list.add_at(*index, *value).map(|_| "ok".to_string()),
            Op::Remove => list.remove().map(|v| render(&v)),
            Op::RemoveAt { index } => list.remove_at(*index).map(|v| render(&v)),
            Op::RemoveValue { value } => list.remove_value(value).map(|v| render(&v)),
            Op::Set { index, value } => list.set(*index, *value).map(|v| render(&v)),
            Op::Get { index } => list.get(*index).map(render),
            Op::Contains { value } => list.contains(value).map(|found| found.to_string()),
            Op::Clear => {
                list.clear();
                Ok("ok".to_string())
            }
            Op::Size => Ok(list.size().to_string()),
            Op::IsEmpty => Ok(list.is_empty().to_string()),
            Op::ToVec => Ok(render_all(list.to_vec().iter())),
            Op::Iterate => {
                let mut cursor = list.iter();
                let mut seen = Vec::new();
                while cursor.has_next() {
                    seen.push(cursor.try_next()?);
                }
                Ok(render_all(seen.into_iter()))
            }
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add { value } => write!(f, "add({})", render(value)),
            Op::AddAt { index, value } => write!(f, "add_at({}, {})", index, render(value)),
            Op::Remove => write!(f, "remove()"),
            Op::RemoveAt { index } => write!(f, "remove_at({})", index),
            Op::RemoveValue { value } => write!(f, "remove_value({})", render(value)),
            Op::Set { index, value } => write!(f, "set({}, {})", index, render(value)),
            Op::Get { index } => write!(f, "get({})", index),
            Op::Contains { value } => write!(f, "contains({})", render(value)),
            Op::Clear => write!(f, "clear()"),
            Op::Size => write!(f, "size()"),
            Op::IsEmpty => write!(f, "is_empty()"),
            Op::ToVec => write!(f, "to_vec()"),
            Op::Iterate => write!(f, "iterate()"),
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "none".to_string(),
    }
}

fn render_all<'a>(values: impl Iterator<Item = &'a Value>) -> String {
    format!("[{}]", values.map(render).join(", "))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default, rename = "op")]
    pub ops: Vec<Op>,
}

impl Script {
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        let script: Script = toml::from_str(content)?;
        script.logging.level_filter()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn demo() -> Result<Self, ScriptError> {
        Self::from_toml(DEMO_SCRIPT)
    }

    /// Runs every operation in order. A failing operation is recorded in the
    /// report and the run continues with the next one.
    pub fn run(&self) -> Result<Report, ScriptError> {
        let mut list = LinkedList::new_from(Some(self.list.initial.iter().map(|&v| Some(v))))?;
        log::info!("running {} operations on {:?}", self.ops.len(), list);

        let steps = self
            .ops
            .iter()
            .map(|op| {
                let outcome = match op.apply(&mut list) {
                    Ok(output) => Outcome::Succeeded { output },
                    Err(err) => {
                        log::warn!("{} failed: {}", op, err);
                        Outcome::Failed {
                            kind: err.kind(),
                            message: err.to_string(),
                        }
                    }
                };
                Step {
                    op: op.clone(),
                    outcome,
                }
            })
            .collect();

        Ok(Report {
            steps,
            contents: list.iter().flatten().copied().collect(),
            size: list.size(),
        })
    }
}

// =============================================================================
// Report
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Succeeded { output: String },
    Failed { kind: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub op: Op,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub steps: Vec<Step>,
    pub contents: Vec<i64>,
    pub size: usize,
}

impl Report {
    pub fn failures(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, Outcome::Failed { .. }))
            .count()
    }

    pub fn to_json(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable, colored rendering.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, step) in self.steps.iter().enumerate() {
            let line = match &step.outcome {
                Outcome::Succeeded { output } => {
                    format!("{:>3}. {} -> {}", i + 1, step.op, output.green())
                }
                Outcome::Failed { kind, message } => format!(
                    "{:>3}. {} -> {} ({})",
                    i + 1,
                    step.op,
                    kind.red().bold(),
                    message
                ),
            };
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&format!(
            "final: [{}] size {}",
            self.contents.iter().join(", "),
            self.size
        ));
        out
    }
}

// =============================================================================
// Tests
// =============================================================================
